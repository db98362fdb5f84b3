//! Point-of-sale transaction model

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A point-of-sale transaction (sale or return)
///
/// Transactions are an immutable settlement log: once recorded they are
/// never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Human-readable identifier, e.g. "TXN-001"
    pub id: String,
    pub transaction_type: TransactionType,
    pub store: String,
    pub customer: String,
    pub items: Vec<TransactionItem>,
    /// Signed amount: negative for returns
    pub total: Decimal,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub payment_method: String,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Whether this transaction counts toward revenue
    pub fn counts_toward_revenue(&self) -> bool {
        self.transaction_type == TransactionType::Sale
            && self.status == TransactionStatus::Completed
    }
}

/// A line item within a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    pub product: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl TransactionItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Return,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Return => "return",
        }
    }
}

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

/// Format a transaction identifier from its sequence number
pub fn transaction_id(seq: u32) -> String {
    format!("TXN-{seq:03}")
}
