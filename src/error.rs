//! Application error taxonomy and HTTP rendering.
//!
//! Every failure the service surfaces falls into one of four kinds. The
//! transport layer renders each kind to a caller-appropriate JSON response;
//! storage errors are logged with full detail server-side but never leak
//! internals to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error details included in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application error kinds.
///
/// - [`AppError::InvalidInput`] - a required field is missing or malformed (HTTP 400)
/// - [`AppError::AliasExists`] - save collided with an existing alias (HTTP 409)
/// - [`AppError::AliasNotFound`] - resolve miss, a clean "not found" (HTTP 404)
/// - [`AppError::Storage`] - underlying I/O or integrity error (HTTP 500, opaque)
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("alias '{alias}' already exists")]
    AliasExists { alias: String },

    #[error("alias '{alias}' not found")]
    AliasNotFound { alias: String },

    #[error("storage failure")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Converts the error into the wire-format payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidInput { field, reason } => ErrorInfo {
                code: "validation_error",
                message: format!("invalid {field}: {reason}"),
                details: json!({ "field": field }),
            },
            AppError::AliasExists { alias } => ErrorInfo {
                code: "conflict",
                message: "alias already exists".to_string(),
                details: json!({ "alias": alias }),
            },
            AppError::AliasNotFound { alias } => ErrorInfo {
                code: "not_found",
                message: "alias not found".to_string(),
                details: json!({ "alias": alias }),
            },
            // Opaque on the wire; the full error is logged where it occurs.
            AppError::Storage(_) => ErrorInfo {
                code: "internal_error",
                message: "internal error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::AliasExists { .. } => StatusCode::CONFLICT,
            AppError::AliasNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(source) => {
                tracing::error!(error = %source, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a sqlx error from an alias insert to the application taxonomy.
///
/// A unique-constraint violation on the alias column means the alias is
/// already taken; everything else is an opaque storage failure.
pub fn map_save_error(alias: &str, e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::AliasExists {
            alias: alias.to_string(),
        };
    }

    AppError::Storage(e)
}
