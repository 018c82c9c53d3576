//! # Inventory Service Module
//!
//! CRUD over the car list stored as one JSON array file in the GitHub
//! repository. Records are untyped JSON objects addressed by their position
//! in the array; nothing validates their fields.
//!
//! ## Registered routes (`/api/cars`)
//!
//! *   **`GET`** (`list::process`): the stored array, verbatim.
//! *   **`POST`** (`add::process`): appends the body to the array.
//! *   **`PUT ?index=N`** (`update::process`): replaces the record at `N`.
//!     `400` when `N` is missing or not an integer >= 0, `404` when `N` is
//!     past the end.
//! *   **`DELETE ?index=N`** (`remove::process`): removes the record at `N`,
//!     same validation as `PUT`.
//! *   Any other method answers `405` with an `Allow` header.
//!
//! Every mutation is one read-modify-write of the file guarded by its sha.

mod add;
mod inventory;
mod list;
mod remove;
mod update;

use actix_web::web::{delete, get, post, put, resource, to};
use actix_web::Resource;

use crate::error::ApiError;

const API_PATH: &str = "/api/cars";

const ALLOWED_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE"];

/// Configures and returns the Actix `Resource` for the inventory endpoint.
pub fn configure_routes() -> Resource {
    resource(API_PATH)
        .route(get().to(list::process))
        .route(post().to(add::process))
        .route(put().to(update::process))
        .route(delete().to(remove::process))
        .default_service(to(method_not_allowed))
}

async fn method_not_allowed() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(ALLOWED_METHODS))
}
