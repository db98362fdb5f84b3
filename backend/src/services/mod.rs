//! Business logic, one service per domain area
//!
//! Each service is a thin handle over the shared [`Repository`] and is
//! constructed per request from the application state.
//!
//! [`Repository`]: crate::repository::Repository

pub mod movements;
pub mod notifications;
pub mod products;
pub mod reports;
pub mod stores;
pub mod transactions;

pub use movements::MovementService;
pub use notifications::NotificationService;
pub use products::ProductService;
pub use reports::ReportService;
pub use stores::StoreService;
pub use transactions::TransactionService;
