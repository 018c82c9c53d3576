//! Storefront: the public car list with brand/tag filters.
//!
//! On first render the component fetches `/api/cars`, replaces whatever it
//! showed with one card per record, and resets the filter to `all`. Cards
//! hidden by the active filter stay in the DOM with the `is-hidden` class.

use yew::platform::spawn_local;
use yew::prelude::*;

mod card;
mod messages;
mod state;
mod view;

use crate::api;
pub use messages::Msg;
pub use state::StorefrontComponent;

impl Component for StorefrontComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StorefrontComponent::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(records) => {
                self.show(&records);
                gloo_console::log!(format!("Loaded cars: {}", records.len()));
                true
            }
            Msg::LoadFailed(error) => {
                gloo_console::error!(format!("Failed to load cars: {}", error));
                false
            }
            Msg::SetFilter(value) => {
                self.select_filter(&value);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_cars().await {
                    Ok(records) => link.send_message(Msg::Loaded(records)),
                    Err(error) => link.send_message(Msg::LoadFailed(error)),
                }
            });
        }
    }
}
