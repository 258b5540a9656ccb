//! The [`JsonStorage`] accessor.
//!
//! Composes the conversions in [`crate::convert`] with an injected
//! [`KeyValueStore`]. Every operation returns a value, never an error:
//! encoding failures store `""`, decoding failures and store failures read
//! as [`Value::Null`], and store write failures are logged and dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use kvjson_storage::KeyValueStore;

use crate::convert::{decode, deserialize, deserialize_as, serialize};

/// JSON get/set over a text-only store.
#[derive(Debug)]
pub struct JsonStorage<S> {
    store: S,
}

/// Outcome of [`JsonStorage::inspect_item`].
///
/// `get_item` collapses all of these except `Found` into `null`; this keeps
/// them apart for callers that need to know which one happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The key is unset.
    Missing,
    /// The stored text decoded to this value (which may itself be `null`).
    Found(Value),
    /// The stored text is not valid JSON.
    Corrupted { raw: String },
    /// The store could not be read.
    Unreadable { reason: String },
}

impl<S: KeyValueStore> JsonStorage<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        JsonStorage { store }
    }

    /// Encodes `value` as JSON and writes it under `key`.
    ///
    /// Values that cannot be encoded are stored as an empty string. If the
    /// store itself rejects the write, the failure is logged and the call
    /// still returns normally.
    pub fn set_item<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let text = serialize(value);
        if let Err(e) = self.store.set(key, &text) {
            tracing::warn!(key, error = %e, "store rejected write");
        }
    }

    /// Reads and decodes the value under `key`.
    ///
    /// Returns [`Value::Null`] if the key is unset, the stored text is not
    /// valid JSON, or the store cannot be read. A value that was stored as
    /// `null` also reads as `null`.
    pub fn get_item(&self, key: &str) -> Value {
        deserialize(self.read_raw(key).as_deref())
    }

    /// Reads and decodes the value under `key` into `T`.
    ///
    /// `None` plays the role `null` plays for [`get_item`](Self::get_item),
    /// and additionally covers JSON that does not match `T`.
    pub fn get_item_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        deserialize_as(self.read_raw(key).as_deref())
    }

    /// Reads the value under `key`, reporting why nothing usable was found.
    pub fn inspect_item(&self, key: &str) -> Lookup {
        match self.store.get(key) {
            Ok(None) => Lookup::Missing,
            Ok(Some(raw)) => match decode(&raw) {
                Ok(value) => Lookup::Found(value),
                Err(_) => Lookup::Corrupted { raw },
            },
            Err(e) => Lookup::Unreadable {
                reason: e.to_string(),
            },
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct access to the backing store, bypassing JSON encoding.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                tracing::debug!(key, "no stored value");
                None
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed");
                None
            }
        }
    }
}
