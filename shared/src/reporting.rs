//! Aggregation over movements and transactions
//!
//! All functions here are total and side-effect free: they take a slice of
//! records and produce the figures shown on the dashboard stat cards.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{MovementType, StockMovement, Transaction, TransactionType};

/// Summed movement quantities by direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct MovementTotals {
    pub total_entries: i64,
    pub total_exits: i64,
    /// `total_entries - total_exits`, may be negative
    pub net_balance: i64,
}

/// Sum movement quantities by direction over the whole journal
pub fn movement_totals(movements: &[StockMovement]) -> MovementTotals {
    let mut totals = MovementTotals::default();
    for movement in movements {
        match movement.movement_type {
            MovementType::Entry => totals.total_entries += i64::from(movement.quantity),
            MovementType::Exit => totals.total_exits += i64::from(movement.quantity),
        }
    }
    totals.net_balance = totals.total_entries - totals.total_exits;
    totals
}

/// Same summation restricted to movements recorded on the given day
///
/// Date comparison is a literal calendar-day equality, matching how the
/// dashboard counts "today's" movements.
pub fn movement_totals_on(movements: &[StockMovement], day: NaiveDate) -> MovementTotals {
    let on_day: Vec<StockMovement> = movements
        .iter()
        .filter(|m| m.date == day)
        .cloned()
        .collect();
    movement_totals(&on_day)
}

/// Number of movements recorded on the given day
pub fn movements_on(movements: &[StockMovement], day: NaiveDate) -> usize {
    movements.iter().filter(|m| m.date == day).count()
}

/// Revenue figures aggregated from the transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RevenueSummary {
    /// Completed sale totals grouped by store name
    pub by_store: BTreeMap<String, Decimal>,
    /// Sum of all per-store revenue
    pub grand_total: Decimal,
    /// Sum of absolute return amounts, not broken down by store
    pub total_returns: Decimal,
}

/// Aggregate revenue by store over the transaction log
///
/// Only completed sales count toward revenue; returns are tracked
/// separately as a positive figure regardless of their store.
pub fn revenue_by_store(transactions: &[Transaction]) -> RevenueSummary {
    let mut summary = RevenueSummary::default();
    for txn in transactions {
        if txn.counts_toward_revenue() {
            *summary
                .by_store
                .entry(txn.store.clone())
                .or_insert(Decimal::ZERO) += txn.total;
            summary.grand_total += txn.total;
        } else if txn.transaction_type == TransactionType::Return {
            summary.total_returns += txn.total.abs();
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionStatus;
    use chrono::{NaiveTime, Utc};
    use rust_decimal_macros::dec;

    fn movement(movement_type: MovementType, quantity: i32, date: &str) -> StockMovement {
        StockMovement {
            id: 0,
            store: "Boutique Centre-Ville".to_string(),
            product: "Nike Air Max 90".to_string(),
            movement_type,
            quantity,
            date: date.parse().unwrap(),
            user: "Admin".to_string(),
            reason: "Réapprovisionnement".to_string(),
            counterparty: None,
            unit_price: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn transaction(
        id: &str,
        transaction_type: TransactionType,
        store: &str,
        total: Decimal,
        status: TransactionStatus,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            transaction_type,
            store: store.to_string(),
            customer: "Client".to_string(),
            items: vec![],
            total,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            payment_method: "Espèces".to_string(),
            status,
        }
    }

    #[test]
    fn empty_journal_yields_zero_totals() {
        assert_eq!(
            movement_totals(&[]),
            MovementTotals {
                total_entries: 0,
                total_exits: 0,
                net_balance: 0
            }
        );
    }

    #[test]
    fn mixed_journal_sums_by_direction() {
        let journal = vec![
            movement(MovementType::Entry, 20, "2024-01-15"),
            movement(MovementType::Exit, 5, "2024-01-15"),
            movement(MovementType::Entry, 30, "2024-01-14"),
            movement(MovementType::Exit, 8, "2024-01-13"),
        ];
        let totals = movement_totals(&journal);
        assert_eq!(totals.total_entries, 50);
        assert_eq!(totals.total_exits, 13);
        assert_eq!(totals.net_balance, 37);
    }

    #[test]
    fn daily_totals_only_count_the_given_day() {
        let journal = vec![
            movement(MovementType::Entry, 20, "2024-01-15"),
            movement(MovementType::Exit, 5, "2024-01-15"),
            movement(MovementType::Entry, 30, "2024-01-14"),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let totals = movement_totals_on(&journal, day);
        assert_eq!(totals.total_entries, 20);
        assert_eq!(totals.total_exits, 5);
        assert_eq!(totals.net_balance, 15);
        assert_eq!(movements_on(&journal, day), 2);
    }

    #[test]
    fn net_balance_can_go_negative() {
        let journal = vec![
            movement(MovementType::Entry, 3, "2024-01-15"),
            movement(MovementType::Exit, 10, "2024-01-15"),
        ];
        assert_eq!(movement_totals(&journal).net_balance, -7);
    }

    #[test]
    fn revenue_groups_completed_sales_by_store() {
        let log = vec![
            transaction(
                "TXN-001",
                TransactionType::Sale,
                "Store A",
                dec!(60000),
                TransactionStatus::Completed,
            ),
            transaction(
                "TXN-002",
                TransactionType::Sale,
                "Store A",
                dec!(40000),
                TransactionStatus::Completed,
            ),
            transaction(
                "TXN-003",
                TransactionType::Sale,
                "Store B",
                dec!(90000),
                TransactionStatus::Completed,
            ),
            transaction(
                "TXN-004",
                TransactionType::Return,
                "Store A",
                dec!(-47500),
                TransactionStatus::Completed,
            ),
        ];
        let summary = revenue_by_store(&log);
        assert_eq!(summary.by_store.get("Store A"), Some(&dec!(100000)));
        assert_eq!(summary.by_store.get("Store B"), Some(&dec!(90000)));
        assert_eq!(summary.grand_total, dec!(190000));
        assert_eq!(summary.total_returns, dec!(47500));
    }

    #[test]
    fn pending_and_cancelled_sales_are_excluded() {
        let log = vec![
            transaction(
                "TXN-001",
                TransactionType::Sale,
                "Store A",
                dec!(180),
                TransactionStatus::Pending,
            ),
            transaction(
                "TXN-002",
                TransactionType::Sale,
                "Store A",
                dec!(95),
                TransactionStatus::Cancelled,
            ),
        ];
        let summary = revenue_by_store(&log);
        assert!(summary.by_store.is_empty());
        assert_eq!(summary.grand_total, Decimal::ZERO);
        assert_eq!(summary.total_returns, Decimal::ZERO);
    }
}
