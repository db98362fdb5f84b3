//! HTTP handlers for the notification feed endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::notifications::{Notification, NotificationService, UnreadCount};
use crate::AppState;

/// List notifications, newest first
pub async fn list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    let service = NotificationService::new(state.repo);
    Json(service.list().await)
}

/// Number of unread notifications (the bell badge)
pub async fn unread_count(State(state): State<AppState>) -> Json<UnreadCount> {
    let service = NotificationService::new(state.repo);
    Json(service.unread_count().await)
}

/// Mark one notification as read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Notification>> {
    let service = NotificationService::new(state.repo);
    Ok(Json(service.mark_read(id).await?))
}

/// Mark every notification as read
pub async fn mark_all_read(State(state): State<AppState>) -> Json<UnreadCount> {
    let service = NotificationService::new(state.repo);
    Json(service.mark_all_read().await)
}
