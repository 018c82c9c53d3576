use common::storefront::card::CardData;
use common::storefront::price::PriceDisplay;
use yew::prelude::*;

/// One `<article class="car">`, carrying `data-make` and `data-tags`.
pub fn card_view(card: &CardData, visible: bool) -> Html {
    html! {
        <article
            class={classes!("car", (!visible).then_some("is-hidden"))}
            data-make={card.make.clone()}
            data-tags={card.data_tags()}
        >
            <div class="img">
                <img src={card.image.clone()} alt={card.image_alt.clone()} />
            </div>
            <div class="body">
                <h4>{ card.heading.clone() }</h4>

                <div class="specs">
                    { for card.specs.iter().map(|spec| html! { <div class="spec">{ spec.clone() }</div> }) }
                </div>

                <div class="price-row">
                    <div class="price-group">
                        { price_view(&card.price) }
                    </div>
                    <a class="pill" href="#kontakt">{ "Zistiť viac" }</a>
                </div>
            </div>
        </article>
    }
}

fn price_view(price: &PriceDisplay) -> Html {
    match price {
        PriceDisplay::Discounted {
            original,
            discounted,
        } => html! {
            <>
                <div class="price">
                    <span class="oldprice">{ original.clone() }</span>
                </div>
                <div class="discountprice">{ discounted.clone() }</div>
            </>
        },
        PriceDisplay::Single(text) => html! {
            <div class="price">
                <span class="singleprice">{ text.clone() }</span>
            </div>
        },
    }
}
