//! Service layer: orchestration between handlers and the store.

pub mod item_service;

pub use item_service::ItemService;
