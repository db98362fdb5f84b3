//! HTTP handlers for the product catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use shared::models::{StockStatus, PRODUCT_CATEGORIES};

use crate::error::AppResult;
use crate::services::products::{
    CreateProductInput, ProductService, ProductSummary, ProductView, UpdateProductInput,
};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub search: Option<String>,
    pub status: Option<StockStatus>,
}

/// List products, filtered by free text and derived status
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Json<Vec<ProductView>> {
    let service = ProductService::new(state.repo);
    Json(service.list(query.search.as_deref(), query.status).await)
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<ProductView>)> {
    let service = ProductService::new(state.repo);
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductView>> {
    let service = ProductService::new(state.repo);
    Ok(Json(service.get(id).await?))
}

/// Update a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateProductInput>,
) -> AppResult<Json<ProductView>> {
    let service = ProductService::new(state.repo);
    Ok(Json(service.update(id, input).await?))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = ProductService::new(state.repo);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Catalog counts by derived status
pub async fn product_summary(State(state): State<AppState>) -> Json<ProductSummary> {
    let service = ProductService::new(state.repo);
    Json(service.summary().await)
}

/// The fixed category list products are filed under
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(PRODUCT_CATEGORIES.to_vec())
}
