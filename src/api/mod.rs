//! HTTP API layer: DTOs, handlers, and middleware.
//!
//! Translates HTTP requests into domain operations and renders the results.
//! This layer is thin transport plumbing; the contracts live in the domain
//! and application layers.

pub mod dto;
pub mod handlers;
pub mod middleware;
