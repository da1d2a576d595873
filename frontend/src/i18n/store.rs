use std::cell::RefCell;
use std::collections::HashMap;

use log::warn;

use super::Language;
use crate::config;
use crate::error::{describe, EnhanceError, Result};

/// Durable key-value storage for the language preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let storage = crate::error::window()?
            .local_storage()
            .map_err(|e| EnhanceError::Storage(describe(&e)))?
            .ok_or_else(|| EnhanceError::Storage("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| EnhanceError::Storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| EnhanceError::Storage(describe(&e)))
    }
}

/// In-memory store, used when `localStorage` is unavailable and in tests.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Opens `localStorage`, degrading to a non-durable store if the browser refuses.
pub fn open_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Language preference will not persist: {}", e);
            Box::new(MemoryStore::default())
        }
    }
}

/// Stored language, or the default when nothing (valid) is stored.
pub fn load_language(store: &dyn PreferenceStore) -> Language {
    match store.get(config::LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => code.parse().unwrap_or_else(|e| {
            warn!("Ignoring stored language: {}", e);
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            warn!("Failed to read language preference: {}", e);
            Language::default()
        }
    }
}

pub fn save_language(store: &dyn PreferenceStore, lang: Language) -> Result<()> {
    store.set(config::LANGUAGE_STORAGE_KEY, lang.code())
}
