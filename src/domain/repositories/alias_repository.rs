//! Repository trait for alias storage.

use crate::domain::entities::Entry;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from alias to target URL.
///
/// The store exclusively owns the persisted mapping and enforces alias
/// uniqueness; callers hold no reference to stored data beyond returned
/// copies. A not-found resolve is reported distinctly from other failures.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryAliasRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a new entry and returns it with its store-assigned id.
    ///
    /// The uniqueness check-and-insert is atomic at the storage layer: of two
    /// concurrent saves with the same alias, exactly one succeeds and the
    /// other observes the conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already present.
    /// Returns [`AppError::Storage`] on any underlying I/O or integrity error.
    async fn save(&self, target_url: &str, alias: &str) -> Result<Entry, AppError>;

    /// Returns the stored target URL for an alias, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasNotFound`] if no entry matches.
    /// Returns [`AppError::Storage`] on any underlying I/O error.
    async fn resolve(&self, alias: &str) -> Result<String, AppError>;
}
