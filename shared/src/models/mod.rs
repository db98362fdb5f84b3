//! Domain models for StockManager

mod movement;
mod product;
mod store;
mod transaction;

pub use movement::*;
pub use product::*;
pub use store::*;
pub use transaction::*;
