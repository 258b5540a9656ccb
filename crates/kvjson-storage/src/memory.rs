//! In-memory implementation of [`KeyValueStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, ephemeral sessions,
//! and anywhere persistence isn't needed. It keeps all items in a HashMap
//! with the same overwrite semantics as the SQLite backend.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// In-memory implementation of [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: HashMap<String, String>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            items: HashMap::new(),
        }
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn set(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_unset_key_returns_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut store = InMemoryStore::new();
        store.set("greeting", "\"hello\"").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("\"hello\""));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_overwrites_prior_value() {
        let mut store = InMemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_text_is_stored_not_dropped() {
        let mut store = InMemoryStore::new();
        store.set("blank", "").unwrap();
        assert_eq!(store.get("blank").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(InMemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
