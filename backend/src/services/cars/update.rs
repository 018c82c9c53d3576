use actix_web::{web, HttpResponse};
use common::requests::{IndexQuery, OkResponse};

use super::inventory;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler for `PUT /api/cars?index=N`: replaces the record at `N`.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<IndexQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    replace_car(&state, &query, &body).await?;
    Ok(HttpResponse::Ok().json(OkResponse::success()))
}

pub async fn replace_car(
    state: &AppState,
    query: &IndexQuery,
    body: &[u8],
) -> Result<(), ApiError> {
    let (target, path) = state.config.inventory()?;
    let index = inventory::parse_index(query)?;
    let car = inventory::parse_record(body)?;

    let mut inventory = inventory::load(state.store.as_ref(), &target, &path).await?;
    let slot = inventory.cars.get_mut(index).ok_or(ApiError::NotFound)?;
    *slot = car;

    let message = format!("chore(admin): update car #{}", index + 1);
    inventory::save(state.store.as_ref(), &target, &path, inventory, message).await
}
