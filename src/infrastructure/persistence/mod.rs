//! Concrete implementations of the domain repository traits.
//!
//! - [`PgAliasRepository`] - PostgreSQL-backed storage
//! - [`InMemoryAliasRepository`] - in-process map, for tests and standalone mode

pub mod memory_alias_repository;
pub mod pg_alias_repository;

pub use memory_alias_repository::InMemoryAliasRepository;
pub use pg_alias_repository::PgAliasRepository;
