//! # Image Upload Service Module
//!
//! `POST /api/upload-image` commits one base64-encoded file under `uploads/`
//! in the GitHub repository and answers with its raw-content URL, so the
//! storefront can use the image without a redeploy.

mod upload;

use actix_web::web::{post, resource, to};
use actix_web::Resource;

use crate::error::ApiError;

const API_PATH: &str = "/api/upload-image";

const ALLOWED_METHODS: &[&str] = &["POST"];

/// Configures and returns the Actix `Resource` for the upload endpoint.
pub fn configure_routes() -> Resource {
    resource(API_PATH)
        .route(post().to(upload::process))
        .default_service(to(method_not_allowed))
}

async fn method_not_allowed() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(ALLOWED_METHODS))
}
