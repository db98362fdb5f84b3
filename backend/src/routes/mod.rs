//! Route definitions for the StockManager API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Product catalog
        .nest("/products", product_routes())
        // Stock movement journal
        .nest("/stock", stock_routes())
        // Store directory and printable reports
        .nest("/stores", store_routes())
        // Point-of-sale transactions
        .nest("/transactions", transaction_routes())
        // Notification feed
        .nest("/notifications", notification_routes())
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/summary", get(handlers::product_summary))
        .route("/categories", get(handlers::list_categories))
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Stock movement routes. The journal is append-only: movements can be
/// recorded and corrected but never deleted.
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movements",
            get(handlers::list_movements).post(handlers::create_movement),
        )
        .route(
            "/movements/:movement_id",
            get(handlers::get_movement).put(handlers::update_movement),
        )
        .route("/summary", get(handlers::stock_summary))
        .route("/reasons", get(handlers::list_reasons))
}

/// Store directory routes
fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stores).post(handlers::create_store))
        .route(
            "/:store_id",
            get(handlers::get_store)
                .put(handlers::update_store)
                .delete(handlers::delete_store),
        )
        .route("/:store_id/report/:section", get(handlers::store_report))
}

/// Transaction routes. Transactions are a settlement log: create and read
/// only.
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route("/summary", get(handlers::transaction_summary))
        .route("/revenue", get(handlers::transaction_revenue))
        .route("/:transaction_id", get(handlers::get_transaction))
}

/// Notification feed routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_notifications))
        .route("/unread-count", get(handlers::unread_count))
        .route("/mark-all-read", post(handlers::mark_all_read))
        .route("/:notification_id/read", post(handlers::mark_read))
}
