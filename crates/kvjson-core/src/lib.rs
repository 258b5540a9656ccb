//! JSON-aware accessors over a text-only key-value store.
//!
//! [`JsonStorage`] wraps any [`KeyValueStore`] and exposes `set_item` /
//! `get_item`, which move structured values in and out of the store as JSON
//! text. Neither operation ever fails: unencodable values are stored as an
//! empty string, and anything that cannot be read back as JSON comes out as
//! `null`.
//!
//! ```
//! use kvjson_core::JsonStorage;
//! use kvjson_storage::InMemoryStore;
//! use serde_json::json;
//!
//! let mut storage = JsonStorage::new(InMemoryStore::new());
//! storage.set_item("user", &json!({ "name": "Ann", "age": 30 }));
//! assert_eq!(storage.get_item("user"), json!({ "name": "Ann", "age": 30 }));
//! assert_eq!(storage.get_item("missing"), serde_json::Value::Null);
//! ```

pub mod accessor;
pub mod convert;

pub use accessor::{JsonStorage, Lookup};
pub use convert::{decode, deserialize, deserialize_as, serialize};
pub use kvjson_storage::{KeyValueStore, StorageError};
