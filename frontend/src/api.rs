//! Calls to the backend endpoints.
//!
//! Errors come back as display strings: the backend's `error` message when it
//! sent one, otherwise the HTTP status text.

use common::requests::{ErrorResponse, UploadImageRequest, UploadImageResponse};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::RequestCache;

const CARS_URL: &str = "/api/cars";
const UPLOAD_URL: &str = "/api/upload-image";

/// Current car list, bypassing the browser cache.
pub async fn fetch_cars() -> Result<Vec<Value>, String> {
    let response = Request::get(CARS_URL)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let response = ensure_ok(response).await?;
    response.json::<Vec<Value>>().await.map_err(|e| e.to_string())
}

pub async fn add_car(record: &Value) -> Result<(), String> {
    let request = Request::post(CARS_URL).json(record).map_err(|e| e.to_string())?;
    send(request).await
}

pub async fn replace_car(index: usize, record: &Value) -> Result<(), String> {
    let request = Request::put(&indexed_url(index))
        .json(record)
        .map_err(|e| e.to_string())?;
    send(request).await
}

pub async fn delete_car(index: usize) -> Result<(), String> {
    let response = Request::delete(&indexed_url(index))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response).await.map(|_| ())
}

/// Uploads `content_base64` as `filename`; returns the public URL.
pub async fn upload_image(filename: String, content_base64: String) -> Result<String, String> {
    let body = UploadImageRequest {
        filename: Some(filename),
        content_base64: Some(content_base64),
    };
    let response = Request::post(UPLOAD_URL)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let response = ensure_ok(response).await?;
    let uploaded: UploadImageResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(uploaded.url)
}

fn indexed_url(index: usize) -> String {
    format!("{}?index={}", CARS_URL, index)
}

async fn send(request: Request) -> Result<(), String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    ensure_ok(response).await.map(|_| ())
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse {
            error,
            details: Some(details),
        }) => format!("{} ({})", error, details),
        Ok(ErrorResponse { error, .. }) => error,
        Err(_) => response.status_text(),
    };
    Err(format!("{}: {}", status, message))
}
