//! Point-of-sale transaction service

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{
    transaction_id, Transaction, TransactionItem, TransactionStatus, TransactionType,
};
use shared::reporting::{revenue_by_store, RevenueSummary};
use shared::search::Searchable;
use shared::validation::{require_field, validate_price, validate_quantity};

use crate::error::{AppError, AppResult};
use crate::repository::Repository;
use crate::services::notifications::NotificationKind;

/// Point-of-sale transaction service
#[derive(Clone)]
pub struct TransactionService {
    repo: Repository,
}

/// Input for recording a transaction
#[derive(Debug, Deserialize)]
pub struct CreateTransactionInput {
    pub transaction_type: TransactionType,
    pub store: String,
    pub customer: String,
    pub items: Vec<TransactionItemInput>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub payment_method: String,
    pub status: Option<TransactionStatus>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionItemInput {
    pub product: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Filters for listing transactions
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilter {
    pub search: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub store: Option<String>,
}

/// The transactions page stat cards
#[derive(Debug, Serialize)]
pub struct TransactionSummary {
    /// Sum of completed sale amounts
    pub total_sales: Decimal,
    /// Sum of absolute return amounts
    pub total_returns: Decimal,
    pub today_transactions: usize,
    pub pending_transactions: usize,
}

impl TransactionService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Record a transaction. The total is derived from the line items and
    /// negated for returns so the caller can never record an inconsistent
    /// amount.
    pub async fn create(&self, input: CreateTransactionInput) -> AppResult<Transaction> {
        require_field("store", &input.store)?;
        require_field("customer", &input.customer)?;
        require_field("payment_method", &input.payment_method)?;
        if input.items.is_empty() {
            return Err(AppError::Validation {
                field: "items".to_string(),
                message: "at least one line item is required".to_string(),
                message_fr: "au moins un article est requis".to_string(),
            });
        }

        let mut items = Vec::with_capacity(input.items.len());
        for item in input.items {
            require_field("items.product", &item.product)?;
            validate_quantity("items.quantity", item.quantity)?;
            validate_price("items.unit_price", item.unit_price)?;
            items.push(TransactionItem {
                product: item.product,
                quantity: item.quantity,
                unit_price: item.unit_price,
            });
        }

        let gross: Decimal = items.iter().map(TransactionItem::line_total).sum();
        let total = match input.transaction_type {
            TransactionType::Sale => gross,
            TransactionType::Return => -gross,
        };

        let now = Utc::now();
        let mut catalog = self.repo.write().await;
        let seq = catalog.next_transaction_seq();
        let transaction = Transaction {
            id: transaction_id(seq),
            transaction_type: input.transaction_type,
            store: input.store,
            customer: input.customer,
            items,
            total,
            date: input.date.unwrap_or_else(|| now.date_naive()),
            time: input.time.unwrap_or_else(|| now.time()),
            payment_method: input.payment_method,
            status: input.status.unwrap_or_default(),
        };
        catalog.notify(
            NotificationKind::TransactionEvent,
            match transaction.transaction_type {
                TransactionType::Sale => "Vente enregistrée",
                TransactionType::Return => "Retour enregistré",
            },
            format!(
                "{} — {} FCFA ({})",
                transaction.id, transaction.total, transaction.store
            ),
        );
        catalog.transactions.push(transaction.clone());
        tracing::info!(
            id = %transaction.id,
            transaction_type = transaction.transaction_type.as_str(),
            total = %transaction.total,
            "transaction recorded"
        );
        Ok(transaction)
    }

    /// Get a transaction by its "TXN-NNN" identifier
    pub async fn get(&self, id: &str) -> AppResult<Transaction> {
        let catalog = self.repo.read().await;
        catalog
            .transactions
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Transaction".to_string()))
    }

    /// List transactions matching the filter
    pub async fn list(&self, filter: TransactionFilter) -> Vec<Transaction> {
        let catalog = self.repo.read().await;
        catalog
            .transactions
            .iter()
            .filter(|t| t.matches(filter.search.as_deref().unwrap_or_default()))
            .filter(|t| {
                filter
                    .transaction_type
                    .map_or(true, |wanted| t.transaction_type == wanted)
            })
            .filter(|t| filter.status.map_or(true, |wanted| t.status == wanted))
            .filter(|t| filter.store.as_deref().map_or(true, |s| t.store == s))
            .cloned()
            .collect()
    }

    /// The transactions page stat cards
    pub async fn summary(&self) -> TransactionSummary {
        let catalog = self.repo.read().await;
        let today = Utc::now().date_naive();
        TransactionSummary {
            total_sales: catalog
                .transactions
                .iter()
                .filter(|t| t.counts_toward_revenue())
                .map(|t| t.total)
                .sum(),
            total_returns: catalog
                .transactions
                .iter()
                .filter(|t| t.transaction_type == TransactionType::Return)
                .map(|t| t.total.abs())
                .sum(),
            today_transactions: catalog.transactions.iter().filter(|t| t.date == today).count(),
            pending_transactions: catalog
                .transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Pending)
                .count(),
        }
    }

    /// Revenue grouped by store, with the grand total
    pub async fn revenue(&self) -> RevenueSummary {
        let catalog = self.repo.read().await;
        revenue_by_store(&catalog.transactions)
    }
}
