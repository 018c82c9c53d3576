//! Request and response bodies shared by the backend handlers and the admin page.

use serde::{Deserialize, Serialize};

/// Query string of `PUT /api/cars` and `DELETE /api/cars`.
///
/// The index stays a raw string so the handler can answer a malformed value
/// with its own 400 body instead of the extractor's.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexQuery {
    pub index: Option<String>,
}

/// Body of `POST /api/upload-image` as the admin page sends it.
/// `content_base64` must be plain base64, without a `data:` URI prefix. The
/// backend reads the body loosely, so non-string scalars are accepted too.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UploadImageRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, rename = "contentBase64")]
    pub content_base64: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadImageResponse {
    pub ok: bool,
    pub url: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn success() -> Self {
        OkResponse { ok: true }
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
