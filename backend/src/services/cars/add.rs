use actix_web::{web, HttpResponse};
use common::model::car::{display_text, BRAND, MODEL};
use common::requests::OkResponse;
use serde_json::Value;

use super::inventory;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler for `POST /api/cars`: appends the body, unmodified, to the array.
pub async fn process(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    add_car(&state, &body).await?;
    Ok(HttpResponse::Ok().json(OkResponse::success()))
}

pub async fn add_car(state: &AppState, body: &[u8]) -> Result<(), ApiError> {
    let (target, path) = state.config.inventory()?;
    let car = inventory::parse_record(body)?;
    let message = add_message(&car);

    let mut inventory = inventory::load(state.store.as_ref(), &target, &path).await?;
    inventory.cars.push(car);
    inventory::save(state.store.as_ref(), &target, &path, inventory, message).await
}

/// Commit message naming the new car's brand and model.
fn add_message(car: &Value) -> String {
    format!(
        "chore(admin): add car {} {}",
        display_text(car.get(BRAND)),
        display_text(car.get(MODEL))
    )
}
