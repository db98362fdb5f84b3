//! In-memory repository shared by every page of the dashboard
//!
//! One owned dataset behind a read-write lock, so a mutation made on one
//! page is visible on every other. Nothing is persisted: the dataset lives
//! for the lifetime of the process.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::models::{Product, StockMovement, Store, Transaction};

use crate::services::notifications::Notification;

/// The whole in-memory dataset
///
/// Services take the lock for the duration of a single operation and never
/// hold it across an await point.
#[derive(Debug, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub movements: Vec<StockMovement>,
    pub stores: Vec<Store>,
    pub transactions: Vec<Transaction>,
    pub notifications: Vec<Notification>,
    next_product_id: i64,
    next_movement_id: i64,
    next_store_id: i64,
    next_transaction_seq: u32,
    next_notification_id: i64,
}

impl Catalog {
    pub fn next_product_id(&mut self) -> i64 {
        self.next_product_id += 1;
        self.next_product_id
    }

    pub fn next_movement_id(&mut self) -> i64 {
        self.next_movement_id += 1;
        self.next_movement_id
    }

    pub fn next_store_id(&mut self) -> i64 {
        self.next_store_id += 1;
        self.next_store_id
    }

    pub fn next_transaction_seq(&mut self) -> u32 {
        self.next_transaction_seq += 1;
        self.next_transaction_seq
    }

    pub fn next_notification_id(&mut self) -> i64 {
        self.next_notification_id += 1;
        self.next_notification_id
    }
}

/// Cloneable handle to the shared dataset
#[derive(Clone, Default)]
pub struct Repository {
    inner: Arc<RwLock<Catalog>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().await
    }
}
