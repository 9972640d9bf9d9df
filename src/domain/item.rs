//! The item entity: a named, priced article.

use serde::{Deserialize, Serialize};

/// A persisted item.
///
/// `id` is assigned by the store at creation time and immutable
/// thereafter. `nom` and `prix` are replaced together on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    /// Store-assigned primary key.
    pub id: i64,
    /// Item name. Required, no format constraint beyond presence.
    pub nom: String,
    /// Item price. Required, no range constraint.
    pub prix: f64,
}

/// The client-supplied fields of an item, before an id exists.
///
/// Used for both create and update: both fields are always required and
/// both are always written. Any client-supplied id is ignored — the id
/// never travels through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    /// Item name.
    pub nom: String,
    /// Item price.
    pub prix: f64,
}

impl ItemDraft {
    /// Creates a draft from its two required fields.
    #[must_use]
    pub const fn new(nom: String, prix: f64) -> Self {
        Self { nom, prix }
    }
}
