//! Product catalog service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{Product, StockStatus};
use shared::search::Searchable;
use shared::validation::{require_field, validate_price, validate_stock_level};

use crate::error::{AppError, AppResult};
use crate::repository::Repository;
use crate::services::notifications::NotificationKind;

/// Product catalog service
#[derive(Clone)]
pub struct ProductService {
    repo: Repository,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub min_stock: Option<i32>,
    pub description: Option<String>,
    pub added_on: Option<NaiveDate>,
}

/// Input for updating a product; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub min_stock: Option<i32>,
    pub description: Option<String>,
}

/// A product together with its derived stock status
///
/// Status is recomputed on every read rather than stored, so it can never
/// drift from the stock level.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub status: StockStatus,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let status = product.status();
        Self { product, status }
    }
}

/// Catalog counts by derived status (the Products page stat cards)
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl ProductService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a product
    pub async fn create(&self, input: CreateProductInput) -> AppResult<ProductView> {
        require_field("name", &input.name)?;
        require_field("category", &input.category)?;
        validate_price("price", input.price)?;
        validate_stock_level("stock", input.stock)?;
        let min_stock = input.min_stock.unwrap_or(0);
        validate_stock_level("min_stock", min_stock)?;

        let mut catalog = self.repo.write().await;
        if catalog
            .products
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&input.name))
        {
            return Err(AppError::DuplicateEntry("product name".to_string()));
        }

        let id = catalog.next_product_id();
        let product = Product {
            id,
            name: input.name,
            category: input.category,
            brand: input.brand.unwrap_or_default(),
            price: input.price,
            stock: input.stock,
            min_stock,
            description: input.description,
            added_on: input.added_on.unwrap_or_else(|| Utc::now().date_naive()),
            created_at: Utc::now(),
        };
        catalog.notify(
            NotificationKind::ProductEvent,
            "Produit créé",
            format!("{} a été ajouté au catalogue", product.name),
        );
        Self::alert_if_low(&mut catalog, &product);
        catalog.products.push(product.clone());
        tracing::info!(product = %product.name, "product created");
        Ok(product.into())
    }

    /// Get a product by id
    pub async fn get(&self, id: i64) -> AppResult<ProductView> {
        let catalog = self.repo.read().await;
        catalog
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(ProductView::from)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))
    }

    /// List products, optionally filtered by free text and derived status
    pub async fn list(
        &self,
        search: Option<&str>,
        status: Option<StockStatus>,
    ) -> Vec<ProductView> {
        let catalog = self.repo.read().await;
        catalog
            .products
            .iter()
            .filter(|p| p.matches(search.unwrap_or_default()))
            .filter(|p| status.map_or(true, |wanted| p.status() == wanted))
            .cloned()
            .map(ProductView::from)
            .collect()
    }

    /// Update a product in place
    pub async fn update(&self, id: i64, input: UpdateProductInput) -> AppResult<ProductView> {
        if let Some(name) = &input.name {
            require_field("name", name)?;
        }
        if let Some(category) = &input.category {
            require_field("category", category)?;
        }
        if let Some(price) = input.price {
            validate_price("price", price)?;
        }
        if let Some(stock) = input.stock {
            validate_stock_level("stock", stock)?;
        }
        if let Some(min_stock) = input.min_stock {
            validate_stock_level("min_stock", min_stock)?;
        }

        let mut catalog = self.repo.write().await;
        let position = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let previous_status = catalog.products[position].status();
        {
            let product = &mut catalog.products[position];
            if let Some(name) = input.name {
                product.name = name;
            }
            if let Some(category) = input.category {
                product.category = category;
            }
            if let Some(brand) = input.brand {
                product.brand = brand;
            }
            if let Some(price) = input.price {
                product.price = price;
            }
            if let Some(stock) = input.stock {
                product.stock = stock;
            }
            if let Some(min_stock) = input.min_stock {
                product.min_stock = min_stock;
            }
            if let Some(description) = input.description {
                product.description = Some(description);
            }
        }
        let product = catalog.products[position].clone();
        catalog.notify(
            NotificationKind::ProductEvent,
            "Produit modifié",
            format!("{} a été mis à jour", product.name),
        );
        if product.status() != previous_status {
            Self::alert_if_low(&mut catalog, &product);
        }
        Ok(product.into())
    }

    /// Delete a product
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut catalog = self.repo.write().await;
        let position = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
        let product = catalog.products.remove(position);
        catalog.notify(
            NotificationKind::ProductEvent,
            "Produit supprimé",
            format!("{} a été retiré du catalogue", product.name),
        );
        tracing::info!(product = %product.name, "product deleted");
        Ok(())
    }

    /// Catalog counts by derived status
    pub async fn summary(&self) -> ProductSummary {
        let catalog = self.repo.read().await;
        let mut summary = ProductSummary {
            total: catalog.products.len(),
            in_stock: 0,
            low_stock: 0,
            out_of_stock: 0,
        };
        for product in &catalog.products {
            match product.status() {
                StockStatus::InStock => summary.in_stock += 1,
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::OutOfStock => summary.out_of_stock += 1,
            }
        }
        summary
    }

    fn alert_if_low(catalog: &mut crate::repository::Catalog, product: &Product) {
        match product.status() {
            StockStatus::LowStock => catalog.notify(
                NotificationKind::StockAlert,
                "Stock faible",
                format!(
                    "{} est en stock faible ({} restants, minimum {})",
                    product.name, product.stock, product.min_stock
                ),
            ),
            StockStatus::OutOfStock => catalog.notify(
                NotificationKind::StockAlert,
                "Rupture de stock",
                format!("{} est en rupture de stock", product.name),
            ),
            StockStatus::InStock => {}
        }
    }
}
