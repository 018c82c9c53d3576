use common::storefront::filter::FILTER_ALL;
use yew::prelude::*;

use super::card::card_view;
use super::messages::Msg;
use super::state::StorefrontComponent;

/// Label of the control that clears the filter.
const ALL_LABEL: &str = "Všetky";

pub fn view(component: &StorefrontComponent, ctx: &Context<StorefrontComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section class="inventory-section">
            <div class="filter-row">
                { for component.filter_values.iter().map(|value| {
                    let active = component.filter.as_str() == value.as_str();
                    let label = if value == FILTER_ALL { ALL_LABEL.to_string() } else { value.clone() };
                    let selected = value.clone();
                    html! {
                        <button
                            class={classes!("tag", active.then_some("active"))}
                            data-filter={value.clone()}
                            onclick={link.callback(move |_: MouseEvent| Msg::SetFilter(selected.clone()))}
                        >
                            { label }
                        </button>
                    }
                }) }
            </div>
            <div id="inventory">
                { for component.cards.iter().map(|card| card_view(card, component.filter.reveals(card))) }
            </div>
        </section>
    }
}
