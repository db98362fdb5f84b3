//! In-app notification feed
//!
//! Mutating services emit domain events here instead of driving UI feedback
//! inline; the dashboard polls the feed and renders toasts from it. Stock
//! alerts land in the same feed when a product drops to or below its
//! minimum threshold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::repository::{Catalog, Repository};

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    StockAlert,
    ProductEvent,
    MovementEvent,
    StoreEvent,
    TransactionEvent,
}

/// An entry in the notification feed
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Catalog {
    /// Append an event to the notification feed
    pub fn notify(&mut self, kind: NotificationKind, title: &str, body: String) {
        let id = self.next_notification_id();
        self.notifications.push(Notification {
            id,
            kind,
            title: title.to_string(),
            body,
            read: false,
            created_at: Utc::now(),
        });
    }
}

/// Notification service for the in-app feed
#[derive(Clone)]
pub struct NotificationService {
    repo: Repository,
}

/// Unread count response
#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub unread: usize,
}

impl NotificationService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// List notifications, newest first
    pub async fn list(&self) -> Vec<Notification> {
        let catalog = self.repo.read().await;
        let mut notifications = catalog.notifications.clone();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        notifications
    }

    /// Count unread notifications
    pub async fn unread_count(&self) -> UnreadCount {
        let catalog = self.repo.read().await;
        UnreadCount {
            unread: catalog.notifications.iter().filter(|n| !n.read).count(),
        }
    }

    /// Mark a single notification as read
    pub async fn mark_read(&self, id: i64) -> AppResult<Notification> {
        let mut catalog = self.repo.write().await;
        let notification = catalog
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Notification".to_string()))?;
        notification.read = true;
        Ok(notification.clone())
    }

    /// Mark the whole feed as read
    pub async fn mark_all_read(&self) -> UnreadCount {
        let mut catalog = self.repo.write().await;
        for notification in catalog.notifications.iter_mut() {
            notification.read = true;
        }
        UnreadCount { unread: 0 }
    }
}
