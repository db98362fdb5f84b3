//! HTTP handlers for the stock movement endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use shared::models::{StockMovement, ENTRY_REASONS, EXIT_REASONS};

use crate::error::AppResult;
use crate::services::movements::{
    CreateMovementInput, MovementFilter, MovementService, StockSummary, UpdateMovementInput,
};
use crate::AppState;

/// List movements matching the filter
pub async fn list_movements(
    State(state): State<AppState>,
    Query(filter): Query<MovementFilter>,
) -> Json<Vec<StockMovement>> {
    let service = MovementService::new(state.repo);
    Json(service.list(filter).await)
}

/// Record a stock movement
pub async fn create_movement(
    State(state): State<AppState>,
    Json(input): Json<CreateMovementInput>,
) -> AppResult<(StatusCode, Json<StockMovement>)> {
    let service = MovementService::new(state.repo);
    let movement = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(movement)))
}

/// Get a movement by id
pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StockMovement>> {
    let service = MovementService::new(state.repo);
    Ok(Json(service.get(id).await?))
}

/// Correct a recorded movement
pub async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateMovementInput>,
) -> AppResult<Json<StockMovement>> {
    let service = MovementService::new(state.repo);
    Ok(Json(service.update(id, input).await?))
}

/// Totals for the stock page stat cards
pub async fn stock_summary(State(state): State<AppState>) -> Json<StockSummary> {
    let service = MovementService::new(state.repo);
    Json(service.summary().await)
}

#[derive(Serialize)]
pub struct MovementReasons {
    pub entry_reasons: Vec<&'static str>,
    pub exit_reasons: Vec<&'static str>,
}

/// The fixed reason lists offered when recording a movement
pub async fn list_reasons() -> Json<MovementReasons> {
    Json(MovementReasons {
        entry_reasons: ENTRY_REASONS.to_vec(),
        exit_reasons: EXIT_REASONS.to_vec(),
    })
}
