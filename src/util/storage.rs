//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme toggle persists one flag. In the browser that is
//! `localStorage`; when it is unavailable (privacy modes throw on access) an
//! in-memory store keeps the toggle working for the session. Tests use the
//! in-memory store directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::ControllerError;

pub trait PreferenceStore {
    /// Read the stored string for `key`, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ControllerError>;
}

/// Session-only store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ControllerError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Open the window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` when there is no window or storage is disabled.
    pub fn open() -> Result<Self, ControllerError> {
        let window = web_sys::window().ok_or(ControllerError::Unavailable("window"))?;
        let storage = window
            .local_storage()?
            .ok_or(ControllerError::Unavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ControllerError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}

/// `localStorage` when available, otherwise a session-only store.
#[cfg(feature = "hydrate")]
pub fn browser_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            log::warn!("falling back to in-memory preferences: {err}");
            Box::new(MemoryStorage::new())
        }
    }
}
