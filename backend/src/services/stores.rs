//! Store directory service

use chrono::Utc;
use serde::Deserialize;

use shared::models::{Store, StoreStatus};
use shared::validation::require_field;

use crate::error::{AppError, AppResult};
use crate::repository::Repository;
use crate::services::notifications::NotificationKind;

/// Store directory service
#[derive(Clone)]
pub struct StoreService {
    repo: Repository,
}

/// Input for registering a store
#[derive(Debug, Deserialize)]
pub struct CreateStoreInput {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager: String,
    pub status: Option<StoreStatus>,
    pub photo: Option<String>,
    pub description: Option<String>,
}

/// Input for updating a store; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStoreInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager: Option<String>,
    pub status: Option<StoreStatus>,
    pub photo: Option<String>,
    pub description: Option<String>,
}

impl StoreService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Register a store
    pub async fn create(&self, input: CreateStoreInput) -> AppResult<Store> {
        require_field("name", &input.name)?;
        require_field("address", &input.address)?;
        require_field("phone", &input.phone)?;
        require_field("manager", &input.manager)?;

        let mut catalog = self.repo.write().await;
        if catalog
            .stores
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(&input.name))
        {
            return Err(AppError::DuplicateEntry("store name".to_string()));
        }

        let id = catalog.next_store_id();
        let store = Store {
            id,
            name: input.name,
            address: input.address,
            phone: input.phone,
            manager: input.manager,
            status: input.status.unwrap_or_default(),
            created_at: Utc::now().date_naive(),
            photo: input.photo,
            description: input.description,
        };
        catalog.notify(
            NotificationKind::StoreEvent,
            "Magasin créé",
            format!("{} a été ajouté au réseau", store.name),
        );
        catalog.stores.push(store.clone());
        tracing::info!(store = %store.name, "store registered");
        Ok(store)
    }

    /// Get a store by id
    pub async fn get(&self, id: i64) -> AppResult<Store> {
        let catalog = self.repo.read().await;
        catalog
            .stores
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Store".to_string()))
    }

    /// List stores, optionally filtered by status
    pub async fn list(&self, status: Option<StoreStatus>) -> Vec<Store> {
        let catalog = self.repo.read().await;
        catalog
            .stores
            .iter()
            .filter(|s| status.map_or(true, |wanted| s.status == wanted))
            .cloned()
            .collect()
    }

    /// Update a store in place
    pub async fn update(&self, id: i64, input: UpdateStoreInput) -> AppResult<Store> {
        if let Some(name) = &input.name {
            require_field("name", name)?;
        }

        let mut catalog = self.repo.write().await;
        let position = catalog
            .stores
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Store".to_string()))?;
        {
            let store = &mut catalog.stores[position];
            if let Some(name) = input.name {
                store.name = name;
            }
            if let Some(address) = input.address {
                store.address = address;
            }
            if let Some(phone) = input.phone {
                store.phone = phone;
            }
            if let Some(manager) = input.manager {
                store.manager = manager;
            }
            if let Some(status) = input.status {
                store.status = status;
            }
            if let Some(photo) = input.photo {
                store.photo = Some(photo);
            }
            if let Some(description) = input.description {
                store.description = Some(description);
            }
        }
        let store = catalog.stores[position].clone();
        catalog.notify(
            NotificationKind::StoreEvent,
            "Magasin modifié",
            format!("{} a été mis à jour", store.name),
        );
        tracing::info!(store = %store.name, status = store.status.as_str(), "store updated");
        Ok(store)
    }

    /// Remove a store from the directory
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut catalog = self.repo.write().await;
        let position = catalog
            .stores
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Store".to_string()))?;
        let store = catalog.stores.remove(position);
        catalog.notify(
            NotificationKind::StoreEvent,
            "Magasin supprimé",
            format!("{} a été retiré du réseau", store.name),
        );
        tracing::info!(store = %store.name, "store removed");
        Ok(())
    }
}
