//! SQLite-backed key-value store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{KeyValueStore, KvEntry, NewKvEntry, StoreError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Key-value store persisted in a SQLite database.
///
/// The schema is migrated on open. Use `":memory:"` for a database that
/// lives as long as the store (useful for tests).
pub struct SqliteStore {
    db_path: String,
    conn: SqliteConnection,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens (or creates) the database at the given path and applies migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the connection fails or a migration cannot run.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_string();
        info!(path = %db_path, "Opening SqliteStore");

        let mut conn = SqliteConnection::establish(&db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", db_path, e)))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration failed: {}", e)))?;
        debug!(count = applied.len(), "Migrations applied");

        Ok(Self { db_path, conn })
    }

    /// Path this store was opened with.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Reads the full row under `key`, including when it was last written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn entry(&mut self, key: &str) -> Result<Option<KvEntry>, StoreError> {
        let entry = schema::kv_entries::table
            .filter(schema::kv_entries::key.eq(key))
            .select(KvEntry::as_select())
            .first::<KvEntry>(&mut self.conn)
            .optional()?;
        Ok(entry)
    }
}

impl KeyValueStore for SqliteStore {
    #[instrument(skip(self))]
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let value = schema::kv_entries::table
            .filter(schema::kv_entries::key.eq(key))
            .select(schema::kv_entries::value)
            .first::<String>(&mut self.conn)
            .optional()?;

        debug!(found = value.is_some(), "Entry lookup");
        Ok(value)
    }

    #[instrument(skip(self, value))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let entry = NewKvEntry::new(key, value, chrono::Utc::now().naive_utc());

        diesel::replace_into(schema::kv_entries::table)
            .values(&entry)
            .execute(&mut self.conn)?;

        debug!(bytes = value.len(), "Entry stored");
        Ok(())
    }
}
