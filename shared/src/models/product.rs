//! Catalog product model and stock status classification

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product
///
/// The stock status is deliberately not a field: it is a pure function of
/// `(stock, min_stock)` and is recomputed on every read so it can never
/// drift from the actual stock level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: Decimal,
    pub stock: i32,
    pub min_stock: i32,
    pub description: Option<String>,
    /// Calendar date the product was added to the catalog
    pub added_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Derived stock status for this product
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.min_stock)
    }
}

/// Derived stock status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify a stock level against its minimum threshold
    ///
    /// First match wins: an empty shelf is out of stock regardless of the
    /// threshold, then anything at or below the threshold is low.
    pub fn classify(stock: i32, min_stock: i32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::InStock => "in_stock",
        }
    }

    /// French label used by report rendering
    pub fn label_fr(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Rupture",
            StockStatus::LowStock => "Stock faible",
            StockStatus::InStock => "En stock",
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out_of_stock" => Ok(StockStatus::OutOfStock),
            "low_stock" => Ok(StockStatus::LowStock),
            "in_stock" => Ok(StockStatus::InStock),
            other => Err(format!("unknown stock status: {other}")),
        }
    }
}

/// Suggested product categories (open set, not enforced)
pub const PRODUCT_CATEGORIES: &[&str] =
    &["Chaussures", "Vêtements", "Accessoires", "Sacs", "Bijoux"];
