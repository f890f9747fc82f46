//! Keyed record storage behind the persistence seam.
//!
//! Stores read and write whole JSON records as strings under fixed keys.
//! `LocalStorage` talks to the browser's `localStorage` and requires a
//! browser environment; `MemoryStorage` backs native builds and tests.
//! All operations fail soft: a missing or unreachable backend behaves like
//! an empty one.

use std::collections::HashMap;

/// Persistence seam for string records under fixed keys.
pub trait RecordStorage {
    /// Read the record stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Write (or overwrite) the record under `key`.
    fn write(&mut self, key: &str, value: &str);
    /// Delete the record under `key` if present.
    fn remove(&mut self, key: &str);
}

/// Browser `localStorage` backend. Outside a browser every operation is a
/// silent no-op, so server-rendered output never diverges on storage access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl RecordStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for native builds and unit tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl RecordStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.records.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.records.remove(key);
    }
}
