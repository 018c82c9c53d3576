use common::model::car::Car;
use common::storefront::form::FormField;
use common::storefront::price::PriceDisplay;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AdminComponent;

pub fn view(component: &AdminComponent, ctx: &Context<AdminComponent>) -> Html {
    html! {
        <div class="admin">
            <h2>{ "Správa ponuky áut" }</h2>
            { form_view(component, ctx) }
            { list_view(component, ctx) }
        </div>
    }
}

fn form_view(component: &AdminComponent, ctx: &Context<AdminComponent>) -> Html {
    let link = ctx.link();
    let title = match component.editing {
        Some(index) => format!("Úprava auta #{}", index + 1),
        None => "Nové auto".to_string(),
    };

    html! {
        <form
            class="admin-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Save
            })}
        >
            <h3>{ title }</h3>
            { for FormField::ALL.iter().map(|&field| html! {
                <label class="admin-field">
                    <span>{ field.label() }</span>
                    <input
                        type="text"
                        value={component.form.get(field).to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetField(field, input.value())
                        })}
                    />
                </label>
            }) }
            <label class="admin-field">
                <span>{ "Nahrať obrázok" }</span>
                <input
                    type="file"
                    accept="image/*"
                    ref={component.file_input_ref.clone()}
                    disabled={component.busy}
                    onchange={link.batch_callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        input.files().and_then(|files| files.get(0)).map(Msg::ImageSelected)
                    })}
                />
            </label>
            {
                if component.form.image.is_empty() {
                    html! {}
                } else {
                    html! { <img class="admin-preview" src={component.form.image.clone()} alt="" /> }
                }
            }
            <div class="admin-actions">
                <button type="submit" disabled={component.busy}>{ "Uložiť" }</button>
                <button type="button" onclick={link.callback(|_| Msg::New)}>{ "Nové auto" }</button>
            </div>
        </form>
    }
}

fn list_view(component: &AdminComponent, ctx: &Context<AdminComponent>) -> Html {
    let link = ctx.link();

    html! {
        <table class="admin-list">
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ "Auto" }</th>
                    <th>{ "Rok" }</th>
                    <th>{ "Cena" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for component.cars.iter().enumerate().map(|(index, record)| {
                    let car = Car::from_record(record);
                    let price = match PriceDisplay::for_car(&car) {
                        PriceDisplay::Discounted { discounted, .. } => discounted,
                        PriceDisplay::Single(text) => text,
                    };
                    let selected = component.editing == Some(index);
                    html! {
                        <tr class={classes!(selected.then_some("selected"))}>
                            <td>{ (index + 1).to_string() }</td>
                            <td>{ format!("{} {}", car.brand, car.model) }</td>
                            <td>{ car.year.clone() }</td>
                            <td>{ price }</td>
                            <td>
                                <button type="button" onclick={link.callback(move |_| Msg::Edit(index))}>
                                    { "Upraviť" }
                                </button>
                                <button
                                    type="button"
                                    disabled={component.busy}
                                    onclick={link.callback(move |_| Msg::Delete(index))}
                                >
                                    { "Zmazať" }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
