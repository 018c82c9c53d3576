use crate::app::App;

mod api;
mod app;
mod components;

fn main() {
    yew::Renderer::<App>::new().render();
}
