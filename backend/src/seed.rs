//! Demo data loaded at startup in development
//!
//! Mirrors the dataset the sales team demos with, so a fresh server is
//! immediately browsable.

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use shared::models::{
    transaction_id, MovementType, Product, StockMovement, Store, StoreStatus, Transaction,
    TransactionItem, TransactionStatus, TransactionType,
};

use crate::repository::Repository;

fn day(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).context("invalid seed date")
}

fn clock(hour: u32, minute: u32) -> anyhow::Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).context("invalid seed time")
}

/// Load the demo catalog, stores, movement journal and transaction log
pub async fn load_demo_data(repo: &Repository) -> anyhow::Result<()> {
    let mut catalog = repo.write().await;

    let products = [
        ("Nike Air Max 90", "Chaussures", "Nike", 120, 25, 5),
        ("Adidas Ultraboost", "Chaussures", "Adidas", 180, 3, 5),
        ("Polo Lacoste Classic", "Vêtements", "Lacoste", 85, 45, 10),
        ("Jean Levi's 501", "Vêtements", "Levi's", 95, 0, 8),
        ("T-shirt Hugo Boss", "Vêtements", "Hugo Boss", 65, 18, 5),
        ("Converse Chuck Taylor", "Chaussures", "Converse", 70, 32, 8),
    ];
    for (name, category, brand, price, stock, min_stock) in products {
        let id = catalog.next_product_id();
        catalog.products.push(Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            price: Decimal::from(price),
            stock,
            min_stock,
            description: None,
            added_on: day(2024, 1, 10)?,
            created_at: Utc::now(),
        });
    }

    let stores = [
        (
            "Boutique Centre-Ville",
            "123 Avenue Principale, Kinshasa",
            "+243 81 234 5678",
            "Marie Mukendi",
            day(2024, 1, 10)?,
        ),
        (
            "Boutique Gombe",
            "456 Bd du 30 Juin, Gombe",
            "+243 82 345 6789",
            "Jean Kabila",
            day(2024, 1, 15)?,
        ),
        (
            "Boutique Lemba",
            "789 Avenue de l'Université, Lemba",
            "+243 83 456 7890",
            "Paul Ilunga",
            day(2024, 1, 20)?,
        ),
    ];
    for (name, address, phone, manager, created_at) in stores {
        let id = catalog.next_store_id();
        catalog.stores.push(Store {
            id,
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            manager: manager.to_string(),
            status: StoreStatus::Active,
            created_at,
            photo: Some("/placeholder.svg".to_string()),
            description: None,
        });
    }

    let movements = [
        (
            "Boutique Centre-Ville",
            "Nike Air Max 90",
            MovementType::Entry,
            20,
            day(2024, 1, 15)?,
            "Admin",
            "Réapprovisionnement",
        ),
        (
            "Boutique Gombe",
            "Adidas Ultraboost",
            MovementType::Exit,
            5,
            day(2024, 1, 15)?,
            "Vendeur1",
            "Vente en magasin",
        ),
        (
            "Boutique Centre-Ville",
            "Polo Lacoste Classic",
            MovementType::Entry,
            30,
            day(2024, 1, 14)?,
            "Admin",
            "Nouvelle collection",
        ),
        (
            "Boutique Gombe",
            "Jean Levi's 501",
            MovementType::Exit,
            8,
            day(2024, 1, 14)?,
            "Vendeur2",
            "Rupture suite ventes",
        ),
        (
            "Boutique Centre-Ville",
            "T-shirt Hugo Boss",
            MovementType::Entry,
            15,
            day(2024, 1, 13)?,
            "Admin",
            "Réapprovisionnement",
        ),
        (
            "Boutique Lemba",
            "Converse Chuck Taylor",
            MovementType::Exit,
            3,
            day(2024, 1, 13)?,
            "Vendeur1",
            "Vente en ligne",
        ),
    ];
    for (store, product, movement_type, quantity, date, user, reason) in movements {
        let id = catalog.next_movement_id();
        catalog.movements.push(StockMovement {
            id,
            store: store.to_string(),
            product: product.to_string(),
            movement_type,
            quantity,
            date,
            user: user.to_string(),
            reason: reason.to_string(),
            counterparty: None,
            unit_price: None,
            notes: None,
            created_at: Utc::now(),
        });
    }

    let transactions = [
        (
            TransactionType::Sale,
            "Boutique Centre-Ville",
            "Marie Dupont",
            vec![("Nike Air Max 90", 1, 120), ("T-shirt Hugo Boss", 2, 65)],
            day(2024, 1, 15)?,
            clock(14, 30)?,
            "Carte Bancaire",
            TransactionStatus::Completed,
        ),
        (
            TransactionType::Return,
            "Boutique Centre-Ville",
            "Jean Martin",
            vec![("Jean Levi's 501", 1, 95)],
            day(2024, 1, 15)?,
            clock(11, 15)?,
            "Remboursement CB",
            TransactionStatus::Completed,
        ),
        (
            TransactionType::Sale,
            "Boutique Gombe",
            "Sophie Laurent",
            vec![
                ("Polo Lacoste Classic", 1, 85),
                ("Converse Chuck Taylor", 1, 70),
            ],
            day(2024, 1, 14)?,
            clock(16, 45)?,
            "Espèces",
            TransactionStatus::Completed,
        ),
        (
            TransactionType::Sale,
            "Boutique Gombe",
            "Pierre Dubois",
            vec![("Adidas Ultraboost", 1, 180)],
            day(2024, 1, 14)?,
            clock(10, 20)?,
            "Carte Bancaire",
            TransactionStatus::Pending,
        ),
        (
            TransactionType::Sale,
            "Boutique Lemba",
            "Alice Bernard",
            vec![("T-shirt Hugo Boss", 3, 65)],
            day(2024, 1, 13)?,
            clock(15, 10)?,
            "Carte Bancaire",
            TransactionStatus::Completed,
        ),
    ];
    for (transaction_type, store, customer, lines, date, time, payment_method, status) in
        transactions
    {
        let items: Vec<TransactionItem> = lines
            .into_iter()
            .map(|(product, quantity, unit_price)| TransactionItem {
                product: product.to_string(),
                quantity,
                unit_price: Decimal::from(unit_price),
            })
            .collect();
        let gross: Decimal = items.iter().map(TransactionItem::line_total).sum();
        let total = match transaction_type {
            TransactionType::Sale => gross,
            TransactionType::Return => -gross,
        };
        let seq = catalog.next_transaction_seq();
        catalog.transactions.push(Transaction {
            id: transaction_id(seq),
            transaction_type,
            store: store.to_string(),
            customer: customer.to_string(),
            items,
            total,
            date,
            time,
            payment_method: payment_method.to_string(),
            status,
        });
    }

    tracing::info!(
        products = catalog.products.len(),
        stores = catalog.stores.len(),
        movements = catalog.movements.len(),
        transactions = catalog.transactions.len(),
        "demo data loaded"
    );
    Ok(())
}
