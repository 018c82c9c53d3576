//! Commits an uploaded image into the repository.
//!
//! The file name is sanitised and prefixed with the upload time in
//! milliseconds, so every upload lands on a new path and is created without a
//! sha. Content is forwarded as received; type and size are left to GitHub's
//! own limits.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::car::display_text;
use common::requests::UploadImageResponse;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::ApiError;
use crate::github::{FileWrite, StoreError};
use crate::state::AppState;

const UPLOAD_DIR: &str = "uploads";
const FILENAME: &str = "filename";
const CONTENT_BASE64: &str = "contentBase64";

static UNSAFE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.\-]+").expect("valid filename pattern"));

/// Handler for `POST /api/upload-image`.
///
/// - `200 OK` with `{ok, url, path}` once the file is committed.
/// - `400 Bad Request` when `filename` or `contentBase64` is missing.
/// - GitHub's own status, with its body as `details`, when it refuses the file.
pub async fn process(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let uploaded = upload_image(&state, &body, Utc::now().timestamp_millis()).await?;
    Ok(HttpResponse::Ok().json(uploaded))
}

pub async fn upload_image(
    state: &AppState,
    body: &[u8],
    timestamp_millis: i64,
) -> Result<UploadImageResponse, ApiError> {
    let target = state.config.repository()?;

    // A body that is not a JSON object is treated as one without fields.
    let request: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let (filename, content_base64) = match (
        upload_field(request.get(FILENAME)),
        upload_field(request.get(CONTENT_BASE64)),
    ) {
        (Some(filename), Some(content)) => (filename, content),
        _ => return Err(ApiError::MissingUploadFields),
    };

    let safe_name = sanitize_filename(&filename);
    let path = upload_path(timestamp_millis, &safe_name);
    let write = FileWrite {
        path: &path,
        content_base64,
        message: format!("chore(admin): upload image {}", safe_name),
        sha: None,
    };

    match state.store.write_file(&target, write).await {
        Ok(()) => {}
        Err(StoreError::Status {
            status,
            reason,
            body,
            ..
        }) => {
            return Err(ApiError::UploadRejected {
                status,
                reason,
                details: body,
            })
        }
        Err(e) => return Err(e.into()),
    }

    info!("Uploaded image {}", path);
    Ok(UploadImageResponse {
        ok: true,
        url: state.store.raw_url(&target, &path),
        path,
    })
}

/// Text of an upload field. Absent, `null`, `false`, zero and empty values
/// count as missing; other scalars are used in their text form and arrays or
/// objects as their JSON text.
fn upload_field(value: Option<&Value>) -> Option<String> {
    let value = value?;
    let text = match value {
        Value::Array(_) | Value::Object(_) => value.to_string(),
        scalar => display_text(Some(scalar)),
    };
    (!text.is_empty()).then_some(text)
}

/// Replaces every run of characters outside `[A-Za-z0-9_.-]` with one `_`.
pub fn sanitize_filename(filename: &str) -> String {
    UNSAFE_RUN.replace_all(filename, "_").into_owned()
}

fn upload_path(timestamp_millis: i64, safe_name: &str) -> String {
    format!("{}/{}-{}", UPLOAD_DIR, timestamp_millis, safe_name)
}
