//! Entry entity representing one persisted alias mapping.

use chrono::{DateTime, Utc};

/// One persisted (alias, target URL) pair.
///
/// The alias is unique across all entries. The target URL is stored verbatim:
/// no normalization, no canonicalization, no dereferencing. Entries are
/// insert-only; a save against an existing alias fails rather than overwrites.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Store-assigned identifier. Monotonic, not meaningful to callers
    /// beyond uniqueness.
    pub id: i64,
    pub alias: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(id: i64, alias: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            target_url,
            created_at,
        }
    }
}
