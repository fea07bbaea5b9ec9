//! Storage handle: opens (creating if absent) the SQLite database and runs the
//! pets table DDL before the handle is shared, so first-use initialization
//! cannot be raced by early callers.

use crate::contract;
use crate::error::ProviderError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// Owns the connection pool for the pets database. Read and write sides share
/// the same pool; SQLite serializes writers itself.
#[derive(Clone)]
pub struct PetStore {
    pool: SqlitePool,
}

impl PetStore {
    /// Open (or create) the database file at `path` and ensure the pets table
    /// exists. Open or DDL failure is fatal to the caller.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(ProviderError::UnavailableStorage)?;
        let store = PetStore { pool };
        store.ensure_pets_table().await?;
        tracing::info!(path = %path.as_ref().display(), "opened pets database");
        Ok(store)
    }

    /// In-memory database for tests and demos. Pinned to a single connection:
    /// each SQLite connection gets its own private in-memory database, so the
    /// pool must never hand out a second one.
    pub async fn open_in_memory() -> Result<Self, ProviderError> {
        let options = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(ProviderError::UnavailableStorage)?;
        let store = PetStore { pool };
        store.ensure_pets_table().await?;
        Ok(store)
    }

    async fn ensure_pets_table(&self) -> Result<(), ProviderError> {
        sqlx::query(contract::CREATE_PETS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(ProviderError::UnavailableStorage)?;
        Ok(())
    }

    /// Pool for read statements.
    pub fn read(&self) -> &SqlitePool {
        &self.pool
    }

    /// Pool for write statements. Same pool as `read`; kept separate at the
    /// call sites so the read/write split stays visible.
    pub fn write(&self) -> &SqlitePool {
        &self.pool
    }
}
