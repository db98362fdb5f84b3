//! Free-text search over dashboard records
//!
//! Matching is case-insensitive substring containment over a fixed set of
//! fields per entity. No tokenization, no fuzzy matching, no ranking.

use crate::models::{Product, StockMovement, Transaction};

/// A record that can be matched against a free-text query
pub trait Searchable {
    /// The fields considered by the search, in display order
    fn searchable_fields(&self) -> Vec<&str>;

    /// Whether the record matches the query
    ///
    /// An empty query matches every record.
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for Product {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.brand, &self.category]
    }
}

impl Searchable for StockMovement {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.product, &self.reason]
    }
}

impl Searchable for Transaction {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.customer.as_str()];
        fields.extend(self.items.iter().map(|item| item.product.as_str()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovementType, TransactionItem, TransactionStatus, TransactionType};
    use chrono::{NaiveDate, NaiveTime, Utc};
    use rust_decimal_macros::dec;

    fn product(name: &str, brand: &str, category: &str) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            price: dec!(120),
            stock: 25,
            min_stock: 5,
            description: None,
            added_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let p = product("Nike Air Max 90", "Nike", "Chaussures");
        assert!(p.matches(""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let p = product("Nike Air Max 90", "Nike", "Chaussures");
        assert!(p.matches("NIKE"));
        assert!(p.matches("air max"));
        assert!(p.matches("chauss"));
    }

    #[test]
    fn non_matching_query_is_rejected() {
        let p = product("Nike Air Max 90", "Nike", "Chaussures");
        assert!(!p.matches("Adidas"));
    }

    #[test]
    fn movements_match_on_product_or_reason() {
        let movement = StockMovement {
            id: 1,
            store: "Boutique Centre-Ville".to_string(),
            product: "Adidas Ultraboost".to_string(),
            movement_type: MovementType::Exit,
            quantity: 5,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            user: "Vendeur1".to_string(),
            reason: "Vente en magasin".to_string(),
            counterparty: None,
            unit_price: None,
            notes: None,
            created_at: Utc::now(),
        };
        assert!(movement.matches("ultraboost"));
        assert!(movement.matches("vente"));
        // The store name is not a searchable field
        assert!(!movement.matches("centre-ville"));
    }

    #[test]
    fn transactions_match_on_id_customer_or_item_product() {
        let txn = Transaction {
            id: "TXN-001".to_string(),
            transaction_type: TransactionType::Sale,
            store: "Boutique Gombe".to_string(),
            customer: "Marie Dupont".to_string(),
            items: vec![TransactionItem {
                product: "Polo Lacoste Classic".to_string(),
                quantity: 1,
                unit_price: dec!(85),
            }],
            total: dec!(85),
            date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            time: NaiveTime::from_hms_opt(16, 45, 0).unwrap(),
            payment_method: "Espèces".to_string(),
            status: TransactionStatus::Completed,
        };
        assert!(txn.matches("txn-001"));
        assert!(txn.matches("dupont"));
        assert!(txn.matches("lacoste"));
        assert!(!txn.matches("gombe"));
    }
}
