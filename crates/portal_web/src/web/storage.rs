use portal::{KeyValueStore, StorageError};

use super::js::js_to_string;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`. Private browsing modes may expose no storage at all;
/// reads then come back empty and writes fail with `Unavailable`.
pub(super) struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let s = local_storage().ok_or(StorageError::Unavailable)?;
        s.set_item(key, value)
            .map_err(|e| StorageError::Rejected(js_to_string(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let s = local_storage().ok_or(StorageError::Unavailable)?;
        s.remove_item(key)
            .map_err(|e| StorageError::Rejected(js_to_string(&e)))
    }
}
