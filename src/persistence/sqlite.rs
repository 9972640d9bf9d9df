//! SQLite implementation of the item repository.

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::ServiceConfig;
use crate::domain::{Item, ItemDraft};
use crate::error::ApiError;

/// SQL executed once at startup. `IF NOT EXISTS` makes re-runs a no-op.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS item (\
     id INTEGER PRIMARY KEY AUTOINCREMENT, \
     nom TEXT NOT NULL, \
     prix REAL NOT NULL)";

/// SQLite-backed item repository using `sqlx::SqlitePool`.
///
/// Each call acquires a connection from the pool for the duration of that
/// call only; mutations run inside an explicit transaction, which rolls
/// back automatically when dropped before commit.
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Opens a connection pool against `config.database_url`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] if the database cannot
    /// be opened.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, ApiError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Wraps an existing pool. Used by tests with an in-memory database.
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `item` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] on database failure.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    /// Persists a new item and returns the stored row with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] on database failure.
    pub async fn insert(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO item (nom, prix) VALUES (?1, ?2) RETURNING id, nom, prix",
        )
        .bind(&draft.nom)
        .bind(draft.prix)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        Ok(item)
    }

    /// Returns all stored items, ordered by id ascending (insertion order
    /// under AUTOINCREMENT).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] on database failure.
    pub async fn fetch_all(&self) -> Result<Vec<Item>, ApiError> {
        sqlx::query_as::<_, Item>("SELECT id, nom, prix FROM item ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))
    }

    /// Returns the item with the given id, or `None` if no such row exists.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] on database failure.
    pub async fn fetch(&self, id: i64) -> Result<Option<Item>, ApiError> {
        sqlx::query_as::<_, Item>("SELECT id, nom, prix FROM item WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))
    }

    /// Overwrites `nom` and `prix` of the item with the given id.
    ///
    /// Returns the updated row, or `None` if no such row exists. The id
    /// itself never changes.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] on database failure.
    pub async fn update(&self, id: i64, draft: &ItemDraft) -> Result<Option<Item>, ApiError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        let item = sqlx::query_as::<_, Item>(
            "UPDATE item SET nom = ?1, prix = ?2 WHERE id = ?3 RETURNING id, nom, prix",
        )
        .bind(&draft.nom)
        .bind(draft.prix)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        Ok(item)
    }

    /// Deletes the item with the given id. Returns `true` if a row was
    /// removed, `false` if no such row existed.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::PersistenceError`] on database failure.
    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        let result = sqlx::query("DELETE FROM item WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
