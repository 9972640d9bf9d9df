//! # items-api
//!
//! Minimal CRUD REST API for managing a list of priced items, backed by
//! SQLite. Route handlers delegate to a small service layer which in turn
//! drives the repository — this crate is thin glue around the store.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ItemService (service/)
//!     │
//!     └── SqliteItemStore (persistence/)
//!             │
//!             └── SQLite
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
