//! Alias creation and resolution service.

use std::sync::Arc;

use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::alias::{generate_alias, validate_requested_alias};
use url::Url;

/// Attempts at generating a fresh alias before surfacing the collision.
const MAX_GENERATE_ATTEMPTS: usize = 8;

/// Service orchestrating alias assignment and resolution.
///
/// Both operations are single-shot, stateless request/response transactions
/// against the store; the service holds no mutable state of its own.
pub struct AliasService {
    repository: Arc<dyn AliasRepository>,
}

impl AliasService {
    pub fn new(repository: Arc<dyn AliasRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `target_url` and returns the alias actually stored.
    ///
    /// A requested alias is validated and saved as-is; a collision on it is
    /// terminal and surfaced as the conflict. With no requested alias, a
    /// random 6-character alphanumeric alias is generated, retrying a bounded
    /// number of times on collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL does not parse or the
    /// requested alias is malformed, [`AppError::AliasExists`] on conflict,
    /// and [`AppError::Storage`] on any other store error.
    pub async fn create_short_link(
        &self,
        target_url: String,
        requested_alias: Option<String>,
    ) -> Result<String, AppError> {
        Url::parse(&target_url)
            .map_err(|e| AppError::invalid_input("url", e.to_string()))?;

        match requested_alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_requested_alias(&alias)?;

                let entry = self.repository.save(&target_url, &alias).await?;
                tracing::info!(id = entry.id, alias = %entry.alias, "alias created");

                Ok(entry.alias)
            }
            None => self.save_generated(&target_url).await,
        }
    }

    /// Resolves an alias to its stored target URL, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for an empty alias; propagates
    /// [`AppError::AliasNotFound`] and [`AppError::Storage`] from the store.
    pub async fn resolve_short_link(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::invalid_input("alias", "must not be empty"));
        }

        let target_url = self.repository.resolve(alias).await?;
        tracing::info!(alias = %alias, "alias resolved");

        Ok(target_url)
    }

    /// Saves under a freshly generated alias, retrying on collision.
    ///
    /// The save itself is the atomic check-and-insert, so two concurrent
    /// generations of the same alias cannot both succeed; the loser simply
    /// draws again.
    async fn save_generated(&self, target_url: &str) -> Result<String, AppError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let alias = generate_alias();

            match self.repository.save(target_url, &alias).await {
                Ok(entry) => {
                    tracing::info!(id = entry.id, alias = %entry.alias, "alias created");
                    return Ok(entry.alias);
                }
                Err(AppError::AliasExists { alias }) if attempt < MAX_GENERATE_ATTEMPTS => {
                    tracing::warn!(alias = %alias, attempt, "generated alias collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
