//! In-memory repository used by handler tests.
//!
//! Behaves like the Contents API where it matters: every write bumps the
//! file's sha, replacing a file requires the current sha, and creating a file
//! that already exists is refused.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

use crate::config::{Config, RepositoryTarget};
use crate::github::{FileWrite, RepositoryStore, StoreError, StoredFile};
use crate::state::AppState;

pub const DATA_PATH: &str = "data/auta.json";
pub const RAW_URL: &str = "https://raw.example";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub path: String,
    pub message: String,
    pub sha: Option<String>,
}

#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<String, (Vec<u8>, u32)>>,
    writes: Mutex<Vec<RecordedWrite>>,
    reject_writes: Mutex<Option<(u16, String)>>,
    edit_after_read: Mutex<Option<(String, Vec<u8>)>>,
}

impl MemoryStore {
    pub fn with_json(path: &str, value: Value) -> Arc<Self> {
        let store = MemoryStore::default();
        store.put(path, serde_json::to_vec(&value).unwrap());
        Arc::new(store)
    }

    pub fn put(&self, path: &str, content: Vec<u8>) {
        let mut files = self.files.lock().unwrap();
        let version = files.get(path).map(|(_, v)| v + 1).unwrap_or(1);
        files.insert(path.to_string(), (content, version));
    }

    pub fn json(&self, path: &str) -> Value {
        let files = self.files.lock().unwrap();
        serde_json::from_slice(&files[path].0).unwrap()
    }

    pub fn raw(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).map(|(c, _)| c.clone())
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// Makes every following write fail with `status` and `body`.
    pub fn reject_writes(&self, status: u16, body: &str) {
        *self.reject_writes.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Stores `value` at `path` right after the next read, as another writer
    /// would, so the sha that read returned is already stale.
    pub fn edit_after_read(&self, path: &str, value: Value) {
        *self.edit_after_read.lock().unwrap() =
            Some((path.to_string(), serde_json::to_vec(&value).unwrap()));
    }

    fn sha_of(version: u32) -> String {
        format!("sha-{}", version)
    }
}

fn status(operation: &'static str, status: u16, reason: &str, body: &str) -> StoreError {
    StoreError::Status {
        operation,
        status,
        reason: reason.to_string(),
        body: body.to_string(),
    }
}

#[async_trait]
impl RepositoryStore for MemoryStore {
    async fn read_file(
        &self,
        _target: &RepositoryTarget,
        path: &str,
    ) -> Result<StoredFile, StoreError> {
        let file = match self.files.lock().unwrap().get(path) {
            Some((content, version)) => StoredFile {
                content: content.clone(),
                sha: Self::sha_of(*version),
            },
            None => return Err(status("GET", 404, "Not Found", r#"{"message":"Not Found"}"#)),
        };

        if let Some((edited, content)) = self.edit_after_read.lock().unwrap().take() {
            self.put(&edited, content);
        }
        Ok(file)
    }

    async fn write_file(
        &self,
        _target: &RepositoryTarget,
        write: FileWrite<'_>,
    ) -> Result<(), StoreError> {
        if let Some((code, body)) = self.reject_writes.lock().unwrap().clone() {
            return Err(status("PUT", code, "Rejected", &body));
        }

        let current = self
            .files
            .lock()
            .unwrap()
            .get(write.path)
            .map(|(_, v)| Self::sha_of(*v));
        match (&current, &write.sha) {
            (Some(current), Some(sha)) if current != sha => {
                return Err(status("PUT", 409, "Conflict", "sha does not match"));
            }
            (Some(_), None) => {
                return Err(status("PUT", 422, "Unprocessable Entity", "\"sha\" wasn't supplied"));
            }
            _ => {}
        }

        let content = BASE64
            .decode(&write.content_base64)
            .map_err(|e| StoreError::Content(e.to_string()))?;
        self.put(write.path, content);
        self.writes.lock().unwrap().push(RecordedWrite {
            path: write.path.to_string(),
            message: write.message,
            sha: write.sha,
        });
        Ok(())
    }

    fn raw_url(&self, target: &RepositoryTarget, path: &str) -> String {
        format!("{}/{}/{}/{}", RAW_URL, target.repo, target.branch, path)
    }
}

pub fn full_config() -> Config {
    Config::from_lookup(|key| match key {
        "GITHUB_TOKEN" => Some("secret".to_string()),
        "GITHUB_REPO" => Some("dealer/site".to_string()),
        "GITHUB_BRANCH" => Some("main".to_string()),
        "DATA_PATH" => Some(DATA_PATH.to_string()),
        _ => None,
    })
}

pub fn app_data(config: Config, store: Arc<MemoryStore>) -> web::Data<AppState> {
    web::Data::new(AppState::new(config, store))
}
