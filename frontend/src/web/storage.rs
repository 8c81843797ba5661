//! LocalStorage wrapper
//!
//! Thin layer over `web_sys::Storage` that plugs the browser's durable storage
//! into the session store.

use blinkbuy_shared::SessionStorage;

/// Browser `localStorage`
///
/// Stateless: every call looks the storage object up again, so the handle is
/// free to copy into closures.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    /// `None` if the key is missing or storage is unavailable (private mode,
    /// disabled cookies).
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
