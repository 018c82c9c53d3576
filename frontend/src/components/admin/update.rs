//! Elm-style update for the admin page: mutates the state for each `Msg` and
//! spawns the backend calls, whose results come back as further messages.

use base64::{engine::general_purpose, Engine as _};
use common::storefront::form::CarForm;
use gloo_file::{futures::read_as_bytes, Blob};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AdminComponent;
use crate::api;
use crate::components::helpers::{confirm, show_toast};

pub fn update(component: &mut AdminComponent, ctx: &Context<AdminComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Reload => {
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_cars().await {
                    Ok(cars) => link.send_message(Msg::Loaded(cars)),
                    Err(error) => link.send_message(Msg::Failed(format!(
                        "Chyba pri načítaní áut: {}",
                        error
                    ))),
                }
            });
            true
        }
        Msg::Loaded(cars) => {
            component.cars = cars;
            component.busy = false;
            true
        }
        Msg::Edit(index) => match component.cars.get(index) {
            Some(record) => {
                component.form = CarForm::from_record(record);
                component.editing = Some(index);
                true
            }
            None => false,
        },
        Msg::New => {
            component.reset_form();
            true
        }
        Msg::SetField(field, value) => {
            component.form.set(field, value);
            true
        }
        Msg::Save => {
            if component.busy {
                return false;
            }
            component.busy = true;

            let record = component.record_to_save();
            let editing = component.editing;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match editing {
                    Some(index) => api::replace_car(index, &record).await,
                    None => api::add_car(&record).await,
                };
                link.send_message(match result {
                    Ok(()) => Msg::Saved("Auto uložené.".to_string()),
                    Err(error) => Msg::Failed(format!("Chyba pri ukladaní: {}", error)),
                });
            });
            true
        }
        Msg::Delete(index) => {
            if component.busy || !confirm(&format!("Zmazať auto #{}?", index + 1)) {
                return false;
            }
            component.busy = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(match api::delete_car(index).await {
                    Ok(()) => Msg::Saved("Auto zmazané.".to_string()),
                    Err(error) => Msg::Failed(format!("Chyba pri mazaní: {}", error)),
                });
            });
            true
        }
        Msg::Saved(message) => {
            show_toast(&message);
            component.reset_form();
            ctx.link().send_message(Msg::Reload);
            true
        }
        Msg::Failed(message) => {
            gloo_console::error!(message.clone());
            show_toast(&message);
            component.busy = false;
            true
        }
        Msg::ImageSelected(file) => {
            component.busy = true;

            let filename = file.name();
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                let uploaded = match read_as_bytes(&blob).await {
                    Ok(bytes) => {
                        let content = general_purpose::STANDARD.encode(&bytes);
                        api::upload_image(filename, content).await
                    }
                    Err(error) => Err(error.to_string()),
                };
                link.send_message(match uploaded {
                    Ok(url) => Msg::ImageUploaded(url),
                    Err(error) => Msg::Failed(format!("Chyba pri nahrávaní obrázka: {}", error)),
                });
            });
            true
        }
        Msg::ImageUploaded(url) => {
            component.form.image = url;
            component.busy = false;
            show_toast("Obrázok nahraný.");
            true
        }
    }
}
