//! Shared types and domain logic for StockManager
//!
//! This crate contains the models and the pure derivation logic (stock
//! status classification, free-text search, movement and revenue
//! aggregation) shared between the backend and any future components.

pub mod models;
pub mod reporting;
pub mod search;
pub mod validation;

pub use models::*;
pub use reporting::*;
pub use search::*;
pub use validation::*;
