//! DTOs for the link shortening endpoint.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,

    /// Optional requested alias. Empty or absent means one is generated.
    #[serde(default)]
    pub alias: Option<String>,
}

impl ShortenRequest {
    /// Checks the required fields, naming the field that failed and why.
    ///
    /// Syntactic URL validation happens in the service; this guards the
    /// request shape itself.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.url.trim().is_empty() {
            return Err(AppError::invalid_input("url", "must not be empty"));
        }

        Ok(())
    }
}

/// Successful shorten response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The alias actually stored.
    pub alias: String,

    /// Full short URL built from the configured base URL.
    pub short_url: String,
}
