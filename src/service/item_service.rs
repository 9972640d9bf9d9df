//! Item service: orchestrates repository calls for the REST handlers.

use crate::domain::{Item, ItemDraft};
use crate::error::ApiError;
use crate::persistence::SqliteItemStore;

/// Orchestration layer for all item operations.
///
/// Stateless coordinator: owns the [`SqliteItemStore`] and translates its
/// "row absent" results into [`ApiError::ItemNotFound`]. All state lives
/// in the store; nothing is shared across requests in-process.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: SqliteItemStore,
}

impl ItemService {
    /// Creates a new `ItemService`.
    #[must_use]
    pub const fn new(store: SqliteItemStore) -> Self {
        Self { store }
    }

    /// Creates a new item from the given draft.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] if the store fails.
    pub async fn create(&self, draft: ItemDraft) -> Result<Item, ApiError> {
        let item = self.store.insert(&draft).await?;
        tracing::info!(id = item.id, nom = %item.nom, "item created");
        Ok(item)
    }

    /// Returns all items, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] if the store fails.
    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.store.fetch_all().await
    }

    /// Returns the item with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ItemNotFound`] if no item has this id, or an
    /// [`ApiError::PersistenceError`] if the store fails.
    pub async fn get(&self, id: i64) -> Result<Item, ApiError> {
        self.store
            .fetch(id)
            .await?
            .ok_or(ApiError::ItemNotFound(id))
    }

    /// Replaces `nom` and `prix` of the item with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ItemNotFound`] if no item has this id, or an
    /// [`ApiError::PersistenceError`] if the store fails.
    pub async fn update(&self, id: i64, draft: ItemDraft) -> Result<Item, ApiError> {
        let item = self
            .store
            .update(id, &draft)
            .await?
            .ok_or(ApiError::ItemNotFound(id))?;
        tracing::info!(id, nom = %item.nom, "item updated");
        Ok(item)
    }

    /// Deletes the item with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ItemNotFound`] if no item has this id, or an
    /// [`ApiError::PersistenceError`] if the store fails.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if self.store.delete(id).await? {
            tracing::info!(id, "item deleted");
            Ok(())
        } else {
            Err(ApiError::ItemNotFound(id))
        }
    }
}
