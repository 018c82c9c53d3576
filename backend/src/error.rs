//! Error type shared by every handler and its mapping to HTTP responses.
//!
//! Nothing is recovered locally: each variant becomes a JSON `ErrorResponse`
//! with a human-readable message, and the failure is logged on the way out.

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorResponse;
use log::{error, warn};
use thiserror::Error;

use crate::github::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required settings are absent from the environment.
    #[error("Missing env: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Bad index")]
    BadIndex,

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("Missing filename or contentBase64")]
    MissingUploadFields,

    #[error("Not found")]
    NotFound,

    /// Carries the methods advertised in the `Allow` header.
    #[error("Method Not Allowed")]
    MethodNotAllowed(&'static [&'static str]),

    /// The hosting platform refused an upload; its status is passed through.
    #[error("GitHub upload failed: {status} {reason}")]
    UploadRejected {
        status: u16,
        reason: String,
        details: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadIndex | ApiError::InvalidBody(_) | ApiError::MissingUploadFields => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UploadRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::MissingConfig(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let mut response = HttpResponse::build(status);
        if let ApiError::MethodNotAllowed(methods) = self {
            response.insert_header((header::ALLOW, methods.join(", ")));
        }

        let details = match self {
            ApiError::UploadRejected { details, .. } => Some(details.clone()),
            _ => None,
        };
        response.json(ErrorResponse {
            error: self.to_string(),
            details,
        })
    }
}
