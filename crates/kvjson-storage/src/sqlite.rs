//! SQLite implementation of [`KeyValueStore`].
//!
//! [`SqliteStore`] persists items in a single `items` table with WAL mode
//! and automatic schema migrations. Each `set` is one upsert statement, so
//! it is atomic without an explicit transaction.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// SQLite-backed implementation of [`KeyValueStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        tracing::debug!(path, "opened sqlite item store");
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn set(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO items (key, value, updated_at)
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            params![key, text],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM items WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}
