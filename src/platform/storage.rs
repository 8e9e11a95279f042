//! LocalStorage-backed mode store

use web_sys::Storage;

use crate::store::ModeStore;

/// Origin-scoped LocalStorage. Without storage access (private mode,
/// sandboxed frames) reads miss and writes are dropped.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable - mode will not persist");
        }
        Self { storage }
    }
}

impl ModeStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to save {}: {:?}", key, e);
            }
        }
    }
}
