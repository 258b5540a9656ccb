//! On-disk layout of the SQLite item store.
//!
//! Items live in one table:
//!
//! ```text
//! items(key TEXT PRIMARY KEY, value TEXT NOT NULL, updated_at TEXT NOT NULL)
//! ```
//!
//! `value` holds exactly the text the caller handed to `set`, including the
//! empty string. `updated_at` is an RFC 3339 UTC timestamp written by SQLite
//! on every upsert. The layout version is tracked in `user_version` by
//! `rusqlite_migration`.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::error::StorageError;

const MIGRATION_STEPS: &[M<'static>] = &[
    // v1: items table.
    M::up(include_str!("migrations/001_initial_schema.sql")),
];

static MIGRATIONS: std::sync::LazyLock<Migrations<'static>> =
    std::sync::LazyLock::new(|| Migrations::new(MIGRATION_STEPS.to_vec()));

/// Opens the item database at `path`, creating it if needed, and brings the
/// `items` table up to date.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    prepare(Connection::open(path)?)
}

/// Opens a private in-memory item database.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    prepare(Connection::open_in_memory()?)
}

fn prepare(mut conn: Connection) -> Result<Connection, StorageError> {
    // Single writer, readers never block it. Ignored for :memory:.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    MIGRATIONS
        .to_latest(&mut conn)
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_valid() {
        assert!(MIGRATIONS.validate().is_ok());
    }

    #[test]
    fn items_table_has_expected_columns() {
        let conn = open_in_memory().unwrap();
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('items')").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, ["key", "value", "updated_at"]);
    }

    #[test]
    fn reopening_does_not_reapply_migrations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");
        let path = path.to_str().unwrap();

        open_database(path)
            .unwrap()
            .execute(
                "INSERT INTO items (key, value, updated_at) VALUES ('k', '1', 'now')",
                [],
            )
            .unwrap();

        let conn = open_database(path).unwrap();
        let version: i64 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1);
        assert_eq!(rows, 1);
    }
}
