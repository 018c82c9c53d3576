use std::sync::Arc;

use crate::config::Config;
use crate::github::RepositoryStore;

/// Shared, read-only application state handed to every handler as `web::Data`.
///
/// Handlers keep nothing between requests; the repository file is the only
/// shared resource.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn RepositoryStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn RepositoryStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
