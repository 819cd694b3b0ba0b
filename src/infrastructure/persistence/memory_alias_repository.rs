//! In-memory implementation of alias storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as MapEntry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::Entry;
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct StoredEntry {
    id: i64,
    target_url: String,
    created_at: DateTime<Utc>,
}

/// In-memory alias store backed by a DashMap.
///
/// Implements the same contract as the PostgreSQL repository: the entry API
/// makes the uniqueness check-and-insert atomic, so concurrent saves with the
/// same alias see exactly one winner. Used as the test double for handler
/// tests and as the backing store when no database is configured.
#[derive(Debug)]
pub struct InMemoryAliasRepository {
    entries: DashMap<String, StoredEntry>,
    next_id: AtomicI64,
}

impl InMemoryAliasRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAliasRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AliasRepository for InMemoryAliasRepository {
    async fn save(&self, target_url: &str, alias: &str) -> Result<Entry, AppError> {
        match self.entries.entry(alias.to_owned()) {
            MapEntry::Occupied(_) => Err(AppError::AliasExists {
                alias: alias.to_string(),
            }),
            MapEntry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let created_at = Utc::now();

                slot.insert(StoredEntry {
                    id,
                    target_url: target_url.to_owned(),
                    created_at,
                });

                Ok(Entry::new(
                    id,
                    alias.to_owned(),
                    target_url.to_owned(),
                    created_at,
                ))
            }
        }
    }

    async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        match self.entries.get(alias) {
            Some(stored) => Ok(stored.target_url.clone()),
            None => Err(AppError::AliasNotFound {
                alias: alias.to_string(),
            }),
        }
    }
}
