//! Read-modify-write helpers for the inventory file.
//!
//! A request reads the array and its sha, mutates the array locally and
//! writes it back with that sha. A write racing in between makes GitHub
//! reject the second write; the rejection is returned as-is.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use common::requests::IndexQuery;
use log::info;
use serde_json::Value;

use crate::config::RepositoryTarget;
use crate::error::ApiError;
use crate::github::{FileWrite, RepositoryStore, StoreError};

/// The stored car array plus the sha it was read at.
#[derive(Debug)]
pub struct Inventory {
    pub cars: Vec<Value>,
    pub sha: String,
}

pub async fn load(
    store: &dyn RepositoryStore,
    target: &RepositoryTarget,
    path: &str,
) -> Result<Inventory, ApiError> {
    let file = store.read_file(target, path).await?;
    let json: Value =
        serde_json::from_slice(&file.content).map_err(|e| StoreError::Content(e.to_string()))?;

    match json {
        Value::Array(cars) => Ok(Inventory {
            cars,
            sha: file.sha,
        }),
        _ => Err(StoreError::NotArray(path.to_string()).into()),
    }
}

/// Commits `inventory.cars` pretty-printed, guarded by the sha it was read at.
pub async fn save(
    store: &dyn RepositoryStore,
    target: &RepositoryTarget,
    path: &str,
    inventory: Inventory,
    message: String,
) -> Result<(), ApiError> {
    let json = serde_json::to_string_pretty(&inventory.cars)
        .map_err(|e| StoreError::Content(e.to_string()))?;

    info!("{} ({} cars)", message, inventory.cars.len());
    store
        .write_file(
            target,
            FileWrite {
                path,
                content_base64: BASE64.encode(json),
                message,
                sha: Some(inventory.sha),
            },
        )
        .await?;
    Ok(())
}

/// Validates `?index=N`: a base-10 integer >= 0, surrounding whitespace ignored.
pub fn parse_index(query: &IndexQuery) -> Result<usize, ApiError> {
    query
        .index
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .ok_or(ApiError::BadIndex)
}

/// Parses a request body as an untyped record. An empty body is `null`.
pub fn parse_record(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index(raw: Option<&str>) -> Result<usize, ApiError> {
        parse_index(&IndexQuery {
            index: raw.map(str::to_string),
        })
    }

    #[test]
    fn accepts_non_negative_integers() {
        assert_eq!(index(Some("0")).unwrap(), 0);
        assert_eq!(index(Some(" 12 ")).unwrap(), 12);
    }

    #[test]
    fn rejects_missing_negative_and_non_numeric() {
        for raw in [None, Some(""), Some("-1"), Some("abc"), Some("1.5"), Some("2x")] {
            assert!(matches!(index(raw), Err(ApiError::BadIndex)), "{:?}", raw);
        }
    }

    #[test]
    fn empty_body_is_null_record() {
        assert_eq!(parse_record(b"").unwrap(), Value::Null);
        assert_eq!(parse_record(b" \n").unwrap(), Value::Null);
        assert_eq!(parse_record(br#"{"znacka":"kia"}"#).unwrap(), json!({"znacka": "kia"}));
        assert!(matches!(parse_record(b"{oops"), Err(ApiError::InvalidBody(_))));
    }
}
