//! Stock movement model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded stock movement (entry into or exit from a store's stock)
///
/// The product and store are referenced by name, not by id: movements form
/// an independent journal and carry no referential integrity with the
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    pub store: String,
    pub product: String,
    pub movement_type: MovementType,
    pub quantity: i32,
    pub date: NaiveDate,
    pub user: String,
    pub reason: String,
    /// Supplier for entries, customer for exits
    pub counterparty: Option<String>,
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Entry,
    Exit,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entry => "entry",
            MovementType::Exit => "exit",
        }
    }

    /// French label used by report rendering
    pub fn label_fr(&self) -> &'static str {
        match self {
            MovementType::Entry => "Entrée",
            MovementType::Exit => "Sortie",
        }
    }
}

/// Suggested reasons for stock entries
pub const ENTRY_REASONS: &[&str] = &[
    "Réapprovisionnement",
    "Nouvelle collection",
    "Retour client",
    "Transfert entre magasins",
    "Correction d'inventaire",
    "Autre",
];

/// Suggested reasons for stock exits
pub const EXIT_REASONS: &[&str] = &[
    "Vente en magasin",
    "Vente en ligne",
    "Retour fournisseur",
    "Transfert entre magasins",
    "Perte/Vol",
    "Promotion",
    "Autre",
];
