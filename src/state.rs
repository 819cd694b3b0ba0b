//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::AliasService;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
    pub base_url: String,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService>, base_url: String) -> Self {
        Self {
            alias_service,
            base_url,
        }
    }

    /// Builds the full short URL for an alias from the configured base URL.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), alias)
    }
}
