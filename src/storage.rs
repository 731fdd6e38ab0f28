//! Local Storage
//!
//! Synchronous key-value persistence behind a small trait so the
//! feedback log and theme flag can be exercised without a browser.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::config::{FEEDBACKS_KEY, THEME_KEY};
use crate::error::StorageError;
use crate::models::{FeedbackEntry, Theme};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Typed Accessors
// ========================

pub fn stored_theme(store: &impl KeyValueStore) -> Result<Option<String>, StorageError> {
    store.get(THEME_KEY)
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Saved feedback list. Missing or unreadable JSON counts as empty.
pub fn load_feedbacks(store: &impl KeyValueStore) -> Result<Vec<FeedbackEntry>, StorageError> {
    let raw = store.get(FEEDBACKS_KEY)?;
    Ok(raw
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default())
}

/// Append one entry and write the whole list back
pub fn append_feedback(store: &impl KeyValueStore, entry: FeedbackEntry) -> Result<usize, StorageError> {
    let mut feedbacks = load_feedbacks(store)?;
    feedbacks.push(entry);
    let json = serde_json::to_string(&feedbacks)?;
    store.set(FEEDBACKS_KEY, &json)?;
    Ok(feedbacks.len())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_round_trip() {
        let store = LocalStore::open().unwrap();
        store.set("portfolio-test", "value").unwrap();
        assert_eq!(store.get("portfolio-test").unwrap().as_deref(), Some("value"));
    }
}
