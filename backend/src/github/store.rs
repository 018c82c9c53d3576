use async_trait::async_trait;
use thiserror::Error;

use crate::config::RepositoryTarget;

/// A file read from the repository together with its version token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub content: Vec<u8>,
    /// Blob sha of the content; writes must send it back to replace the file.
    pub sha: String,
}

/// One commit of a single file.
#[derive(Debug, Clone)]
pub struct FileWrite<'a> {
    pub path: &'a str,
    /// Already base64-encoded file content.
    pub content_base64: String,
    pub message: String,
    /// `None` creates a new file; replacing an existing one requires its sha.
    pub sha: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status, e.g. `409` for a stale sha.
    #[error("{operation} file failed: {status} {reason} {body}")]
    Status {
        operation: &'static str,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid file content: {0}")]
    Content(String),

    #[error("{0} is not a JSON array")]
    NotArray(String),
}

#[async_trait]
pub trait RepositoryStore: Send + Sync {
    async fn read_file(
        &self,
        target: &RepositoryTarget,
        path: &str,
    ) -> Result<StoredFile, StoreError>;

    async fn write_file(
        &self,
        target: &RepositoryTarget,
        write: FileWrite<'_>,
    ) -> Result<(), StoreError>;

    /// Public address serving the raw bytes of `path` on the target branch.
    fn raw_url(&self, target: &RepositoryTarget, path: &str) -> String;
}
