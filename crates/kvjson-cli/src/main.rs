//! kvjson command-line tool.
//!
//! Provides the `kvjson` binary with `set` and `get` subcommands that store
//! and read JSON values in a SQLite-backed key-value store, through the same
//! `JsonStorage` accessor library callers use.
//!
//! The database path comes from `--db`, then `KVJSON_DB_PATH`, then
//! `kvjson.db`. Logs go to stderr; stdout carries only JSON.

use std::process;

use clap::{Parser, Subcommand};
use serde_json::Value;

use kvjson_core::JsonStorage;
use kvjson_storage::SqliteStore;

/// JSON values in a key-value store.
#[derive(Parser)]
#[command(name = "kvjson", about = "JSON values in a key-value store")]
struct Cli {
    /// Path to the item database file.
    #[arg(short, long, global = true, env = "KVJSON_DB_PATH", default_value = "kvjson.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Store a JSON value under a key.
    Set {
        /// Item key.
        key: String,

        /// Value as JSON text, e.g. '{"name":"Ann"}' or '[1,2,3]'.
        value: String,
    },
    /// Print the JSON value stored under a key (`null` if absent or unreadable).
    Get {
        /// Item key.
        key: String,
    },
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Set { key, value } => run_set(&cli.db, &key, &value),
        Commands::Get { key } => run_get(&cli.db, &key),
    };
    process::exit(exit_code);
}

/// Execute the set subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid JSON argument,
/// 3 = database could not be opened.
fn run_set(db_path: &str, key: &str, raw_value: &str) -> i32 {
    let value: Value = match serde_json::from_str(raw_value) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: value is not valid JSON: {}", e);
            return 1;
        }
    };

    let Some(mut storage) = open_storage(db_path) else {
        return 3;
    };
    storage.set_item(key, &value);
    tracing::info!(key, db = db_path, "stored item");
    0
}

/// Execute the get subcommand.
///
/// Returns exit code: 0 = success (including a `null` result),
/// 3 = database could not be opened.
fn run_get(db_path: &str, key: &str) -> i32 {
    let Some(storage) = open_storage(db_path) else {
        return 3;
    };
    let value = storage.get_item(key);
    let json = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
    0
}

fn open_storage(db_path: &str) -> Option<JsonStorage<SqliteStore>> {
    match SqliteStore::new(db_path) {
        Ok(store) => Some(JsonStorage::new(store)),
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_db_after_subcommand() {
        let cli = Cli::try_parse_from(["kvjson", "set", "user", "{}", "--db", "x.db"]).unwrap();
        assert_eq!(cli.db, "x.db");
        assert!(matches!(cli.command, Commands::Set { ref key, .. } if key == "user"));
    }

    #[test]
    fn set_rejects_invalid_json_argument() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kv.db");
        assert_eq!(run_set(db.to_str().unwrap(), "k", "{invalid json"), 1);
    }

    #[test]
    fn set_then_get_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kv.db");
        let db = db.to_str().unwrap();

        assert_eq!(run_set(db, "list", "[1,2,3]"), 0);
        assert_eq!(run_get(db, "list"), 0);
        assert_eq!(run_get(db, "missing"), 0);

        let storage = open_storage(db).unwrap();
        assert_eq!(storage.get_item("list"), serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn unopenable_database_exits_3() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("missing/dir/kv.db");
        assert_eq!(run_get(db.to_str().unwrap(), "k"), 3);
    }
}
