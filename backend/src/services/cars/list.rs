use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::inventory;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler for `GET /api/cars`: the stored array, verbatim.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let cars = list_cars(&state).await?;
    Ok(HttpResponse::Ok().json(cars))
}

pub async fn list_cars(state: &AppState) -> Result<Vec<Value>, ApiError> {
    let (target, path) = state.config.inventory()?;
    let inventory = inventory::load(state.store.as_ref(), &target, &path).await?;
    Ok(inventory.cars)
}
