//! Retail store model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A retail store of the business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager: String,
    pub status: StoreStatus,
    pub created_at: NaiveDate,
    pub photo: Option<String>,
    pub description: Option<String>,
}

/// Operating status of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
            StoreStatus::Maintenance => "maintenance",
        }
    }
}
