use actix_web::{web, HttpResponse};
use common::requests::{IndexQuery, OkResponse};

use super::inventory;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler for `DELETE /api/cars?index=N`: removes the record at `N`; later
/// records move down one position.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<IndexQuery>,
) -> Result<HttpResponse, ApiError> {
    remove_car(&state, &query).await?;
    Ok(HttpResponse::Ok().json(OkResponse::success()))
}

pub async fn remove_car(state: &AppState, query: &IndexQuery) -> Result<(), ApiError> {
    let (target, path) = state.config.inventory()?;
    let index = inventory::parse_index(query)?;

    let mut inventory = inventory::load(state.store.as_ref(), &target, &path).await?;
    if index >= inventory.cars.len() {
        return Err(ApiError::NotFound);
    }
    inventory.cars.remove(index);

    let message = format!("chore(admin): delete car #{}", index + 1);
    inventory::save(state.store.as_ref(), &target, &path, inventory, message).await
}
