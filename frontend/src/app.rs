use crate::components::admin::AdminComponent;
use crate::components::storefront::StorefrontComponent;
use yew::{html, Component, Context, Html};

/// Path of the inventory admin page; everything else shows the storefront.
const ADMIN_PATH: &str = "/admin";

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if is_admin_path() {
            html! { <AdminComponent /> }
        } else {
            html! { <StorefrontComponent /> }
        }
    }
}

fn is_admin_path() -> bool {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| path.trim_end_matches('/') == ADMIN_PATH)
        .unwrap_or(false)
}
