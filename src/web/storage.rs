//! `localStorage`-backed [`Storage`].

use wasm_bindgen::JsValue;

use crate::error::StorageError;
use crate::util::storage::Storage;

/// The window's `localStorage` area, if the browser grants one.
pub struct LocalStorage {
    area: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the storage area. Private browsing modes may refuse it, in which
    /// case every operation reports [`StorageError::Unavailable`].
    pub fn open() -> Self {
        let area = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { area }
    }

    fn area(&self) -> Result<&web_sys::Storage, StorageError> {
        self.area.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn access_error(err: JsValue) -> StorageError {
    StorageError::Access(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.area()?.get_item(key).map_err(access_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.area()?.set_item(key, value).map_err(access_error)
    }
}
