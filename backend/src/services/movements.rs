//! Stock movement journal service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use shared::models::{MovementType, StockMovement};
use shared::reporting::{movement_totals, movements_on};
use shared::search::Searchable;
use shared::validation::{parse_quantity, require_field, validate_quantity};

use crate::error::{AppError, AppResult};
use crate::repository::Repository;
use crate::services::notifications::NotificationKind;

/// Stock movement journal service
#[derive(Clone)]
pub struct MovementService {
    repo: Repository,
}

/// Accepts the quantity either as a JSON number or as the string the legacy
/// clients send. Malformed text is rejected, never silently coerced.
fn quantity_field<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i32),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => parse_quantity("quantity", &s).map_err(serde::de::Error::custom),
    }
}

/// Input for recording a stock movement
#[derive(Debug, Deserialize)]
pub struct CreateMovementInput {
    pub store: String,
    pub product: String,
    pub movement_type: MovementType,
    #[serde(deserialize_with = "quantity_field")]
    pub quantity: i32,
    pub date: Option<NaiveDate>,
    pub user: String,
    pub reason: String,
    pub counterparty: Option<String>,
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
}

/// Input for correcting a recorded movement; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMovementInput {
    pub quantity: Option<i32>,
    pub reason: Option<String>,
    pub counterparty: Option<String>,
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
}

/// The stock page's direction filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionFilter {
    #[default]
    All,
    Entries,
    Exits,
}

impl DirectionFilter {
    fn admits(self, movement_type: MovementType) -> bool {
        match self {
            DirectionFilter::All => true,
            DirectionFilter::Entries => movement_type == MovementType::Entry,
            DirectionFilter::Exits => movement_type == MovementType::Exit,
        }
    }
}

/// Filters for listing movements
#[derive(Debug, Default, Deserialize)]
pub struct MovementFilter {
    pub search: Option<String>,
    #[serde(default)]
    pub direction: DirectionFilter,
    pub store: Option<String>,
    pub date: Option<NaiveDate>,
}

/// The stock page stat cards: lifetime totals plus today's activity
#[derive(Debug, Serialize)]
pub struct StockSummary {
    pub total_entries: i64,
    pub total_exits: i64,
    pub net_balance: i64,
    pub today_movements: usize,
    pub low_stock_alerts: usize,
}

impl MovementService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Record a movement in the journal
    pub async fn create(&self, input: CreateMovementInput) -> AppResult<StockMovement> {
        require_field("store", &input.store)?;
        require_field("product", &input.product)?;
        require_field("user", &input.user)?;
        require_field("reason", &input.reason)?;
        validate_quantity("quantity", input.quantity)?;

        let mut catalog = self.repo.write().await;
        let id = catalog.next_movement_id();
        let movement = StockMovement {
            id,
            store: input.store,
            product: input.product,
            movement_type: input.movement_type,
            quantity: input.quantity,
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            user: input.user,
            reason: input.reason,
            counterparty: input.counterparty,
            unit_price: input.unit_price,
            notes: input.notes,
            created_at: Utc::now(),
        };
        catalog.notify(
            NotificationKind::MovementEvent,
            &format!("{} enregistrée", movement.movement_type.label_fr()),
            format!(
                "{} x{} ({}) — {}",
                movement.product, movement.quantity, movement.store, movement.reason
            ),
        );
        catalog.movements.push(movement.clone());
        tracing::info!(
            movement_type = movement.movement_type.as_str(),
            product = %movement.product,
            quantity = movement.quantity,
            "movement recorded"
        );
        Ok(movement)
    }

    /// Get a movement by id
    pub async fn get(&self, id: i64) -> AppResult<StockMovement> {
        let catalog = self.repo.read().await;
        catalog
            .movements
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Stock movement".to_string()))
    }

    /// List movements matching the filter
    pub async fn list(&self, filter: MovementFilter) -> Vec<StockMovement> {
        let catalog = self.repo.read().await;
        catalog
            .movements
            .iter()
            .filter(|m| m.matches(filter.search.as_deref().unwrap_or_default()))
            .filter(|m| filter.direction.admits(m.movement_type))
            .filter(|m| filter.store.as_deref().map_or(true, |s| m.store == s))
            .filter(|m| filter.date.map_or(true, |d| m.date == d))
            .cloned()
            .collect()
    }

    /// Correct a recorded movement. The journal is append-only so movements
    /// can be amended but never deleted.
    pub async fn update(&self, id: i64, input: UpdateMovementInput) -> AppResult<StockMovement> {
        if let Some(quantity) = input.quantity {
            validate_quantity("quantity", quantity)?;
        }
        if let Some(reason) = &input.reason {
            require_field("reason", reason)?;
        }

        let mut catalog = self.repo.write().await;
        let position = catalog
            .movements
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound("Stock movement".to_string()))?;
        {
            let movement = &mut catalog.movements[position];
            if let Some(quantity) = input.quantity {
                movement.quantity = quantity;
            }
            if let Some(reason) = input.reason {
                movement.reason = reason;
            }
            if let Some(counterparty) = input.counterparty {
                movement.counterparty = Some(counterparty);
            }
            if let Some(unit_price) = input.unit_price {
                movement.unit_price = Some(unit_price);
            }
            if let Some(notes) = input.notes {
                movement.notes = Some(notes);
            }
        }
        let movement = catalog.movements[position].clone();
        catalog.notify(
            NotificationKind::MovementEvent,
            "Mouvement corrigé",
            format!("Le mouvement #{} a été mis à jour", movement.id),
        );
        Ok(movement)
    }

    /// Totals for the stock page stat cards
    pub async fn summary(&self) -> StockSummary {
        let catalog = self.repo.read().await;
        let totals = movement_totals(&catalog.movements);
        let today = Utc::now().date_naive();
        StockSummary {
            total_entries: totals.total_entries,
            total_exits: totals.total_exits,
            net_balance: totals.net_balance,
            today_movements: movements_on(&catalog.movements, today),
            low_stock_alerts: catalog
                .products
                .iter()
                .filter(|p| p.status() != shared::models::StockStatus::InStock)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(product: &str, quantity: i32) -> CreateMovementInput {
        CreateMovementInput {
            store: "Boutique Centre-Ville".to_string(),
            product: product.to_string(),
            movement_type: MovementType::Entry,
            quantity,
            date: None,
            user: "Marie Mukendi".to_string(),
            reason: "Réapprovisionnement".to_string(),
            counterparty: Some("Fournisseur Nike".to_string()),
            unit_price: Some(dec!(95)),
            notes: None,
        }
    }

    #[tokio::test]
    async fn movements_are_journaled_with_sequential_ids() {
        let service = MovementService::new(Repository::new());
        let first = service.create(entry("Nike Air Max 90", 50)).await.unwrap();
        let second = service.create(entry("Adidas Ultraboost", 30)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn zero_or_negative_quantities_are_rejected() {
        let service = MovementService::new(Repository::new());
        assert!(service.create(entry("Nike Air Max 90", 0)).await.is_err());
        assert!(service.create(entry("Nike Air Max 90", -5)).await.is_err());
    }

    #[tokio::test]
    async fn summary_nets_entries_against_exits() {
        let service = MovementService::new(Repository::new());
        service.create(entry("Nike Air Max 90", 50)).await.unwrap();
        let mut exit = entry("Nike Air Max 90", 13);
        exit.movement_type = MovementType::Exit;
        exit.reason = "Vente".to_string();
        service.create(exit).await.unwrap();

        let summary = service.summary().await;
        assert_eq!(summary.total_entries, 50);
        assert_eq!(summary.total_exits, 13);
        assert_eq!(summary.net_balance, 37);
        assert_eq!(summary.today_movements, 2);
    }

    #[tokio::test]
    async fn list_filters_by_type_and_store() {
        let service = MovementService::new(Repository::new());
        service.create(entry("Nike Air Max 90", 50)).await.unwrap();
        let mut exit = entry("Jean Levi's 501", 4);
        exit.movement_type = MovementType::Exit;
        exit.store = "Boutique Gombe".to_string();
        exit.reason = "Vente".to_string();
        service.create(exit).await.unwrap();

        let exits = service
            .list(MovementFilter {
                direction: DirectionFilter::Exits,
                ..Default::default()
            })
            .await;
        assert_eq!(exits.len(), 1);
        assert_eq!(exits[0].store, "Boutique Gombe");

        let gombe = service
            .list(MovementFilter {
                store: Some("Boutique Gombe".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(gombe.len(), 1);
    }

    #[test]
    fn quantity_field_accepts_numbers_and_digit_strings_only() {
        let json = |q: &str| {
            format!(
                r#"{{"store":"A","product":"P","movement_type":"entry","quantity":{q},"user":"U","reason":"Vente"}}"#
            )
        };
        let parsed: CreateMovementInput = serde_json::from_str(&json("12")).unwrap();
        assert_eq!(parsed.quantity, 12);
        let parsed: CreateMovementInput = serde_json::from_str(&json("\"7\"")).unwrap();
        assert_eq!(parsed.quantity, 7);
        assert!(serde_json::from_str::<CreateMovementInput>(&json("\"abc\"")).is_err());
        assert!(serde_json::from_str::<CreateMovementInput>(&json("\"\"")).is_err());
    }
}
