//! Handler for short alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// The stored URL is returned unchanged in the `Location` header with a
/// 307 Temporary Redirect, so the mapping stays re-pointable and clients
/// keep the original method.
///
/// # Errors
///
/// Returns 404 `not_found` if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target_url = state.alias_service.resolve_short_link(&alias).await?;

    Ok(Redirect::temporary(&target_url))
}
