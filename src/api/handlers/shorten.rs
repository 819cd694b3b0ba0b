//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short alias for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "docs"   // optional; generated when absent
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "alias": "docs",
///   "short_url": "https://s.example.com/docs"
/// }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` - missing/malformed url or malformed alias
/// - 409 `conflict` - the requested alias already exists
/// - 500 `internal_error` - storage failure (details logged server-side only)
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let alias = state
        .alias_service
        .create_short_link(payload.url, payload.alias)
        .await?;

    let short_url = state.short_url(&alias);

    Ok(Json(ShortenResponse { alias, short_url }))
}
