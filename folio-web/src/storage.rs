//! `localStorage`-backed preferences

use folio_core::{PreferenceStore, StorageError};

pub struct LocalPreferenceStore {
    storage: Option<web_sys_x::Storage>,
}

impl LocalPreferenceStore {
    /// `localStorage` can be missing or blocked; every call then fails with
    /// [`StorageError::Unavailable`].
    pub fn new(window: &web_sys_x::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&web_sys_x::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn access_error(key: &str, err: wasm_bindgen_x::JsValue) -> StorageError {
    StorageError::Access {
        key: key.to_string(),
        message: format!("{err:?}"),
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| access_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| access_error(key, e))
    }
}
