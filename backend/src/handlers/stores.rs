//! HTTP handlers for the store directory endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use shared::models::{Store, StoreStatus};

use crate::error::AppResult;
use crate::services::reports::{ReportFormat, ReportSection, ReportService};
use crate::services::stores::{CreateStoreInput, StoreService, UpdateStoreInput};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StoreListQuery {
    pub status: Option<StoreStatus>,
}

/// List stores, optionally filtered by status
pub async fn list_stores(
    State(state): State<AppState>,
    Query(query): Query<StoreListQuery>,
) -> Json<Vec<Store>> {
    let service = StoreService::new(state.repo);
    Json(service.list(query.status).await)
}

/// Register a store
pub async fn create_store(
    State(state): State<AppState>,
    Json(input): Json<CreateStoreInput>,
) -> AppResult<(StatusCode, Json<Store>)> {
    let service = StoreService::new(state.repo);
    let store = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// Get a store by id
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Store>> {
    let service = StoreService::new(state.repo);
    Ok(Json(service.get(id).await?))
}

/// Update a store
pub async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateStoreInput>,
) -> AppResult<Json<Store>> {
    let service = StoreService::new(state.repo);
    Ok(Json(service.update(id, input).await?))
}

/// Remove a store
pub async fn delete_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = StoreService::new(state.repo);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub format: ReportFormat,
}

/// Render one section of a store's printable report
pub async fn store_report(
    State(state): State<AppState>,
    Path((id, section)): Path<(i64, ReportSection)>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let service = ReportService::new(
        state.repo,
        state.config.company.name.clone(),
        state.config.company.currency.clone(),
    );
    let report = service.render(id, section, query.format).await?;
    Ok((
        [(header::CONTENT_TYPE, report.content_type)],
        report.body,
    )
        .into_response())
}
