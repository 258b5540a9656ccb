//! The [`KeyValueStore`] trait defining the storage contract.
//!
//! All backends (InMemoryStore, SqliteStore, BrowserStore) implement this
//! trait, so the JSON accessor can be pointed at any of them without
//! changing its logic.

use crate::error::StorageError;

/// A string-to-string store.
///
/// The trait is synchronous (not async): every call is expected to complete
/// immediately, as the host stores it models do. Key semantics (case,
/// allowed characters, emptiness) belong to the backend.
pub trait KeyValueStore {
    /// Persists `text` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, text: &str) -> Result<(), StorageError>;

    /// Returns the text stored under `key`, or `None` if the key is unset.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn set(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        (**self).set(key, text)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }
}
