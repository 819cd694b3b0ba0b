//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`     - Short link redirect
//! - `GET  /health`      - Health check
//! - `POST /api/shorten` - Create a short link
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Request ID** - `x-request-id` stamped and propagated
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new().route("/shorten", post(shorten_handler));

    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
