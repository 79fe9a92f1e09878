//! # Browser localStorage store
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the web
//! platform. It wraps the window's `localStorage` via `web_sys`, which is
//! what makes the admin panel's writes visible to a public page open in
//! another tab of the same origin.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). This keeps both pages resilient: disabled or
//! full storage degrades to "no local data" rather than crashing, and the
//! repository layer already treats a missing slot as an empty collection.

use crate::repository::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
