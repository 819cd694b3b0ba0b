//! PostgreSQL implementation of alias storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::Entry;
use crate::domain::repositories::AliasRepository;
use crate::error::{AppError, map_save_error};

/// PostgreSQL repository for alias storage and resolution.
///
/// Uniqueness is enforced by the unique constraint on the `alias` column; the
/// insert is the atomic check-and-insert, so concurrent saves with the same
/// alias serialize in the database and exactly one succeeds.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn save(&self, target_url: &str, alias: &str) -> Result<Entry, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO aliases (alias, target_url)
            VALUES ($1, $2)
            RETURNING id, alias, target_url, created_at
            "#,
        )
        .bind(alias)
        .bind(target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_save_error(alias, e))?;

        Ok(Entry::new(
            row.try_get("id")?,
            row.try_get("alias")?,
            row.try_get("target_url")?,
            row.try_get::<DateTime<Utc>, _>("created_at")?,
        ))
    }

    async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        let row = sqlx::query("SELECT target_url FROM aliases WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => Ok(row.try_get("target_url")?),
            None => Err(AppError::AliasNotFound {
                alias: alias.to_string(),
            }),
        }
    }
}
