//! Domain entities for the item resource.

pub mod item;

pub use item::{Item, ItemDraft};
