//! Utility functions shared across the application.
//!
//! - [`alias`] - alias generation and requested-alias validation

pub mod alias;
