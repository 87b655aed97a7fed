//! Key-value storage behind the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build reads and writes `window.localStorage`. SSR and tests
//! use `MemoryStore`, which keeps values for as long as the value lives, so
//! a page reload is modelled by building a fresh controller over the same
//! store.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use std::collections::HashMap;

use crate::error::PageError;

/// Durable string key-value store.
pub trait PreferenceStore {
    /// Read the value for `key`, `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// In-memory store used outside the browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` handle.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the page's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or storage is disabled.
    pub fn open() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::MissingWindow)?;
        let storage = window
            .local_storage()
            .map_err(|e| PageError::Storage(format!("{e:?}")))?
            .ok_or(PageError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage
            .get_item(key)
            .map_err(|e| PageError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PageError::Storage(format!("{e:?}")))
    }
}
