//! `window.localStorage` implementation of [`KeyValueStore`].
//!
//! Only meaningful when compiled to `wasm32` and run inside a browser. The
//! handle is resolved once in [`BrowserStore::local`] and passed into the
//! accessor explicitly rather than looked up on every call.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Browser `localStorage` adapter.
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// Resolves `window.localStorage`.
    ///
    /// Fails with [`StorageError::Unavailable`] when there is no window (e.g.
    /// inside a worker) or the browser has storage disabled.
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no global window".to_string(),
        })?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(BrowserStore { storage }),
            Ok(None) => Err(StorageError::Unavailable {
                reason: "localStorage is disabled".to_string(),
            }),
            Err(e) => Err(StorageError::Unavailable {
                reason: js_reason(&e),
            }),
        }
    }

    /// Wraps an already-resolved `Storage` (e.g. `sessionStorage`).
    pub fn from_storage(storage: Storage) -> Self {
        BrowserStore { storage }
    }
}

impl KeyValueStore for BrowserStore {
    fn set(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, text)
            .map_err(|e| StorageError::Host {
                reason: js_reason(&e),
            })
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Host {
            reason: js_reason(&e),
        })
    }
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// Run with `wasm-pack test --headless --firefox -- --features web`.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh_store() -> BrowserStore {
        let store = BrowserStore::local().unwrap();
        store.storage.clear().unwrap();
        store
    }

    #[wasm_bindgen_test]
    fn local_storage_resolves() {
        assert!(BrowserStore::local().is_ok());
    }

    #[wasm_bindgen_test]
    fn get_unset_key_returns_none() {
        let store = fresh_store();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn set_then_get_overwrites() {
        let mut store = fresh_store();
        store.set("user", "{\"name\":\"Ann\"}").unwrap();
        store.set("user", "{\"name\":\"Bo\"}").unwrap();
        assert_eq!(
            store.get("user").unwrap().as_deref(),
            Some("{\"name\":\"Bo\"}")
        );
    }

    #[wasm_bindgen_test]
    fn empty_text_is_stored() {
        let mut store = fresh_store();
        store.set("blank", "").unwrap();
        assert_eq!(store.get("blank").unwrap().as_deref(), Some(""));
    }
}
