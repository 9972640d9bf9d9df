//! Persistence layer: SQLite-backed item storage.
//!
//! The concrete implementation uses `sqlx::SqlitePool` for async SQLite
//! access. The schema is created on startup if absent; there is no
//! migration system.

pub mod sqlite;

pub use sqlite::SqliteItemStore;
