//! Application services orchestrating domain operations.

pub mod alias_service;

pub use alias_service::AliasService;
