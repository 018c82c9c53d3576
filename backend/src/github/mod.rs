//! Access to the GitHub repository used as the site's storage.
//!
//! Handlers talk to a [`RepositoryStore`]; the production implementation is
//! [`ContentsClient`], a thin wrapper over the GitHub Contents API.

mod contents;
mod store;

pub use contents::ContentsClient;
pub use store::{FileWrite, RepositoryStore, StoreError, StoredFile};
