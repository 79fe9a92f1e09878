//! Shared repository constructor for both applications.
//!
//! Returns a [`store::Repository`] backed by the platform-appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Native** (tests, desktop preview): in-memory via [`store::MemoryStore`]

/// Create a platform-appropriate repository.
pub fn make_repository() -> store::Repository<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Repository::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::Repository::new(store::MemoryStore::new())
    }
}
