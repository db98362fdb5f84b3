//! Aggregation tests for the dashboard stat cards
//!
//! Property-based and unit tests for:
//! - movement totals: net balance always equals entries minus exits
//! - day-scoped totals never exceed the lifetime totals
//! - revenue: only completed sales enter the per-store totals, the grand
//!   total is their sum, and returns are tallied separately as an
//!   absolute amount

use chrono::{NaiveDate, NaiveTime, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::models::{
    MovementType, StockMovement, Transaction, TransactionStatus, TransactionType,
};
use shared::reporting::{movement_totals, movement_totals_on, movements_on, revenue_by_store};

fn movement(movement_type: MovementType, quantity: i32, date: NaiveDate) -> StockMovement {
    StockMovement {
        id: 0,
        store: "Boutique Centre-Ville".to_string(),
        product: "Nike Air Max 90".to_string(),
        movement_type,
        quantity,
        date,
        user: "Admin".to_string(),
        reason: "Réapprovisionnement".to_string(),
        counterparty: None,
        unit_price: None,
        notes: None,
        created_at: Utc::now(),
    }
}

fn transaction(
    transaction_type: TransactionType,
    status: TransactionStatus,
    store: &str,
    total: Decimal,
) -> Transaction {
    Transaction {
        id: "TXN-001".to_string(),
        transaction_type,
        store: store.to_string(),
        customer: "Marie Dupont".to_string(),
        items: vec![],
        total,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        payment_method: "Carte Bancaire".to_string(),
        status,
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

fn movement_strategy() -> impl Strategy<Value = StockMovement> {
    (
        prop_oneof![Just(MovementType::Entry), Just(MovementType::Exit)],
        1i32..1_000,
        1u32..29,
    )
        .prop_map(|(movement_type, quantity, day)| {
            movement(
                movement_type,
                quantity,
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            )
        })
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        prop_oneof![Just(TransactionType::Sale), Just(TransactionType::Return)],
        prop_oneof![
            Just(TransactionStatus::Completed),
            Just(TransactionStatus::Pending),
            Just(TransactionStatus::Cancelled),
        ],
        prop_oneof![
            Just("Boutique Centre-Ville"),
            Just("Boutique Gombe"),
            Just("Boutique Lemba"),
        ],
        1i64..100_000,
    )
        .prop_map(|(transaction_type, status, store, amount)| {
            let total = match transaction_type {
                TransactionType::Sale => Decimal::from(amount),
                TransactionType::Return => -Decimal::from(amount),
            };
            transaction(transaction_type, status, store, total)
        })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn empty_journal_yields_zero_totals() {
    let totals = movement_totals(&[]);
    assert_eq!(totals.total_entries, 0);
    assert_eq!(totals.total_exits, 0);
    assert_eq!(totals.net_balance, 0);
}

#[test]
fn totals_match_the_demo_journal() {
    let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    let journal = [
        movement(MovementType::Entry, 20, d(15)),
        movement(MovementType::Exit, 5, d(15)),
        movement(MovementType::Entry, 30, d(14)),
        movement(MovementType::Exit, 8, d(14)),
        movement(MovementType::Entry, 15, d(13)),
        movement(MovementType::Exit, 3, d(13)),
    ];
    let totals = movement_totals(&journal);
    assert_eq!(totals.total_entries, 65);
    assert_eq!(totals.total_exits, 16);
    assert_eq!(totals.net_balance, 49);
    assert_eq!(movements_on(&journal, d(15)), 2);
}

#[test]
fn cancelled_and_pending_sales_earn_nothing() {
    let transactions = [
        transaction(
            TransactionType::Sale,
            TransactionStatus::Pending,
            "Boutique Gombe",
            Decimal::from(180),
        ),
        transaction(
            TransactionType::Sale,
            TransactionStatus::Cancelled,
            "Boutique Gombe",
            Decimal::from(90),
        ),
    ];
    let revenue = revenue_by_store(&transactions);
    assert!(revenue.by_store.is_empty());
    assert_eq!(revenue.grand_total, Decimal::ZERO);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Net balance is always entries minus exits
    #[test]
    fn net_balance_is_entries_minus_exits(journal in prop::collection::vec(movement_strategy(), 0..50)) {
        let totals = movement_totals(&journal);
        prop_assert_eq!(totals.net_balance, totals.total_entries - totals.total_exits);
    }

    /// Day-scoped totals never exceed the lifetime totals
    #[test]
    fn one_day_never_exceeds_the_lifetime(
        journal in prop::collection::vec(movement_strategy(), 0..50),
        day in 1u32..29,
    ) {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let lifetime = movement_totals(&journal);
        let scoped = movement_totals_on(&journal, date);
        prop_assert!(scoped.total_entries <= lifetime.total_entries);
        prop_assert!(scoped.total_exits <= lifetime.total_exits);
        prop_assert!(movements_on(&journal, date) <= journal.len());
    }

    /// The grand total is exactly the sum of the per-store totals
    #[test]
    fn grand_total_sums_the_stores(transactions in prop::collection::vec(transaction_strategy(), 0..50)) {
        let revenue = revenue_by_store(&transactions);
        let summed: Decimal = revenue.by_store.values().copied().sum();
        prop_assert_eq!(revenue.grand_total, summed);
    }

    /// Only completed sales enter the per-store totals
    #[test]
    fn per_store_totals_only_count_completed_sales(transactions in prop::collection::vec(transaction_strategy(), 0..50)) {
        let revenue = revenue_by_store(&transactions);
        let expected: Decimal = transactions
            .iter()
            .filter(|t| t.counts_toward_revenue())
            .map(|t| t.total)
            .sum();
        prop_assert_eq!(revenue.grand_total, expected);
    }

    /// Returns are tallied as a separate absolute amount, whatever their status
    #[test]
    fn returns_accumulate_as_absolute_amounts(transactions in prop::collection::vec(transaction_strategy(), 0..50)) {
        let revenue = revenue_by_store(&transactions);
        let expected: Decimal = transactions
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Return)
            .map(|t| t.total.abs())
            .sum();
        prop_assert_eq!(revenue.total_returns, expected);
        prop_assert!(revenue.total_returns >= Decimal::ZERO);
    }
}
