//! HTTP handlers, grouped by domain area

mod health;
mod movements;
mod notifications;
mod products;
mod stores;
mod transactions;

pub use health::health_check;
pub use movements::{
    create_movement, get_movement, list_movements, list_reasons, stock_summary, update_movement,
};
pub use notifications::{list_notifications, mark_all_read, mark_read, unread_count};
pub use products::{
    create_product, delete_product, get_product, list_categories, list_products, product_summary,
    update_product,
};
pub use stores::{create_store, delete_store, get_store, list_stores, store_report, update_store};
pub use transactions::{
    create_transaction, get_transaction, list_transactions, transaction_revenue,
    transaction_summary,
};
