//! Infrastructure layer: storage backends implementing the domain contracts.

pub mod persistence;
