//! Core business entities.

pub mod entry;

pub use entry::Entry;
