//! Item DTOs for create, read, update, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Item, ItemDraft};

/// Request body for `POST /items/` and `PUT /items/{id}`.
///
/// Both fields are required; a missing field is rejected at the boundary
/// with 422 before anything reaches the repository. No id field exists
/// here — a client-supplied id is ignored by construction.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ItemPayload {
    /// Item name.
    pub nom: String,
    /// Item price.
    pub prix: f64,
}

/// A single item as returned by every read and mutation endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemDto {
    /// Store-assigned id.
    pub id: i64,
    /// Item name.
    pub nom: String,
    /// Item price.
    pub prix: f64,
}

impl From<ItemPayload> for ItemDraft {
    fn from(payload: ItemPayload) -> Self {
        Self::new(payload.nom, payload.prix)
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            nom: item.nom,
            prix: item.prix,
        }
    }
}
