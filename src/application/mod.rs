//! Application layer: business logic built on the domain contracts.

pub mod services;
