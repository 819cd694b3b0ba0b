#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use snaplink::api::handlers::{health_handler, redirect_handler, shorten_handler};
use snaplink::application::services::AliasService;
use snaplink::infrastructure::persistence::InMemoryAliasRepository;
use snaplink::state::AppState;

pub const TEST_BASE_URL: &str = "https://s.test";

/// Builds application state over a fresh in-memory store.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryAliasRepository::new());
    let alias_service = Arc::new(AliasService::new(repository));

    AppState::new(alias_service, TEST_BASE_URL.to_string())
}

/// Router with the full route surface, without the outer middleware stack.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/api/shorten", post(shorten_handler))
        .with_state(state)
}

/// Seeds an alias directly through the service.
pub async fn seed_alias(state: &AppState, url: &str, alias: &str) {
    state
        .alias_service
        .create_short_link(url.to_string(), Some(alias.to_string()))
        .await
        .unwrap();
}
