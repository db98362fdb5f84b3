//! HTTP handlers for the point-of-sale transaction endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use shared::models::Transaction;
use shared::reporting::RevenueSummary;

use crate::error::AppResult;
use crate::services::transactions::{
    CreateTransactionInput, TransactionFilter, TransactionService, TransactionSummary,
};
use crate::AppState;

/// List transactions matching the filter
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Json<Vec<Transaction>> {
    let service = TransactionService::new(state.repo);
    Json(service.list(filter).await)
}

/// Record a transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(input): Json<CreateTransactionInput>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let service = TransactionService::new(state.repo);
    let transaction = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get a transaction by its "TXN-NNN" identifier
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Transaction>> {
    let service = TransactionService::new(state.repo);
    Ok(Json(service.get(&id).await?))
}

/// The transactions page stat cards
pub async fn transaction_summary(State(state): State<AppState>) -> Json<TransactionSummary> {
    let service = TransactionService::new(state.repo);
    Json(service.summary().await)
}

/// Revenue by store with the grand total
pub async fn transaction_revenue(State(state): State<AppState>) -> Json<RevenueSummary> {
    let service = TransactionService::new(state.repo);
    Json(service.revenue().await)
}
