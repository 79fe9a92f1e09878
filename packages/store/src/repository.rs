//! # Repository — collection persistence over an abstract key-value store
//!
//! [`Repository`] is the persistence boundary for both record collections.
//! All reads and writes go through the [`KeyValueStore`] trait, so the same
//! logic works against browser `localStorage` ([`crate::LocalStore`]), an
//! in-memory map ([`crate::MemoryStore`]), or any future backend.
//!
//! ## Storage slots
//!
//! | Key | Contents |
//! |-----|----------|
//! | `studentCouncilMembers` | JSON array of [`crate::Member`] records |
//! | `studentCouncilEvents` | JSON array of [`crate::Event`] records |
//! | `studentCouncilRevision` | monotonic save counter (decimal string) |
//! | `studentCouncilConfig` | [`SiteConfig`] as TOML |
//!
//! ## Failure behavior
//!
//! Loads never fail: a missing slot or unparsable text yields an empty
//! collection, and the parse failure is swallowed. Saves overwrite the slot
//! wholesale, with no partial or merge semantics; concurrent writers
//! (separate tabs) resolve as last-writer-wins.
//!
//! ## Change propagation
//!
//! Every successful collection save advances the revision counter. The
//! counter is the advisory cross-view change signal: the public page polls
//! it on a fixed interval and reloads only when it has moved, and discards
//! reload results older than the last one it applied. Delivery is
//! best-effort; a cooperating view is only guaranteed to catch up within
//! one poll interval.

use crate::config::SiteConfig;
use crate::records::Record;

/// Storage key for the monotonic save counter shared by both collections.
pub const REVISION_KEY: &str = "studentCouncilRevision";

const CONFIG_KEY: &str = "studentCouncilConfig";

/// Async trait for the string slots backing the repository.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = ()>;
}

/// The persistence boundary wrapping a key-value store.
pub struct Repository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load a collection from its slot.
    ///
    /// Returns an empty vec (never an error) when nothing is stored or the
    /// stored text is unparsable.
    pub async fn load<R: Record>(&self) -> Vec<R> {
        let Some(raw) = self.store.get(R::STORAGE_KEY).await else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Overwrite a collection's slot wholesale and advance the revision
    /// counter so polling views pick the change up.
    pub async fn save<R: Record>(&self, records: &[R]) {
        let Ok(json) = serde_json::to_string(records) else {
            return;
        };
        self.store.set(R::STORAGE_KEY, &json).await;
        let next = self.revision().await + 1;
        self.store.set(REVISION_KEY, &next.to_string()).await;
    }

    /// Current revision counter. 0 when absent or unparsable.
    pub async fn revision(&self) -> u64 {
        match self.store.get(REVISION_KEY).await {
            Some(raw) => raw.trim().parse().unwrap_or(0),
            None => 0,
        }
    }

    /// Read the site configuration, falling back to [`SiteConfig::default`]
    /// when the slot is missing or malformed.
    pub async fn load_config(&self) -> SiteConfig {
        let Some(raw) = self.store.get(CONFIG_KEY).await else {
            return SiteConfig::default();
        };
        SiteConfig::from_toml(&raw).unwrap_or_default()
    }

    /// Write the site configuration into its slot.
    pub async fn save_config(&self, config: &SiteConfig) {
        let Ok(toml) = config.to_toml() else {
            return;
        };
        self.store.set(CONFIG_KEY, &toml).await;
    }
}
