//! Durable key-value storage capability and best-effort helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser binding backs this with `localStorage`; tests use
//! [`MemoryStorage`]. Callers go through [`load`] / [`save`], which swallow
//! failures so a missing or locked storage area only disables persistence.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StorageError;

/// String key-value storage that survives reloads.
pub trait Storage {
    /// Read `key`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the storage area cannot be used.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the storage area cannot be used.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read `key`, treating any failure as absence.
pub fn load(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            leptos::logging::debug_warn!("storage read {key} failed: {e}");
            None
        }
    }
}

/// Write `key`, ignoring failures.
pub fn save(storage: &dyn Storage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        leptos::logging::debug_warn!("storage write {key} failed: {e}");
    }
}

/// In-process storage; also models an unavailable storage area.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every operation.
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.unavailable.set(true);
        storage
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned())),
        );
        storage
    }

    /// Raw view of a stored value, bypassing availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
