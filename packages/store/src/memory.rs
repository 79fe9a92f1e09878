use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::repository::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::records::{Event, Member, Record};
    use crate::repository::Repository;

    fn jane() -> Member {
        Member {
            id: 1,
            name: "Jane Doe".to_string(),
            role: "President".to_string(),
            program: None,
            email: "jane@example.com".to_string(),
            bio: None,
            photo: None,
        }
    }

    fn event(id: u32, title: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            date: "2026-09-18".to_string(),
            time: None,
            location: "Main Hall".to_string(),
            description: "".to_string(),
            category: "social".to_string(),
            registration_required: false,
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_load_from_empty_store() {
        let repo = Repository::new(MemoryStore::new());

        let members: Vec<Member> = repo.load().await;
        assert!(members.is_empty());
        assert_eq!(repo.revision().await, 0);
    }

    #[tokio::test]
    async fn test_save_load_roundtrip_preserves_order() {
        let repo = Repository::new(MemoryStore::new());

        let events = vec![event(1, "Welcome Fair"), event(2, "AGM")];
        repo.save(&events).await;

        let loaded: Vec<Event> = repo.load().await;
        assert_eq!(loaded, events);
    }

    #[tokio::test]
    async fn test_malformed_slot_loads_as_empty() {
        let store = MemoryStore::new();
        store.set(Member::STORAGE_KEY, "{not json").await;

        let repo = Repository::new(store);
        let members: Vec<Member> = repo.load().await;
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_collections_are_independent_slots() {
        let repo = Repository::new(MemoryStore::new());

        repo.save(&[jane()]).await;
        let events: Vec<Event> = repo.load().await;
        assert!(events.is_empty());

        let members: Vec<Member> = repo.load().await;
        assert_eq!(members.len(), 1);
    }

    #[tokio::test]
    async fn test_revision_advances_on_every_save() {
        let repo = Repository::new(MemoryStore::new());
        assert_eq!(repo.revision().await, 0);

        repo.save(&[jane()]).await;
        assert_eq!(repo.revision().await, 1);

        repo.save(&[event(1, "AGM")]).await;
        assert_eq!(repo.revision().await, 2);
    }

    #[tokio::test]
    async fn test_stored_member_without_photo_has_null_photo() {
        let store = MemoryStore::new();
        let repo = Repository::new(store.clone());

        repo.save(&[jane()]).await;

        let raw = store.get(Member::STORAGE_KEY).await.unwrap();
        assert!(raw.contains("\"photo\":null"));
    }

    #[tokio::test]
    async fn test_config_roundtrip() {
        let repo = Repository::new(MemoryStore::new());

        // Default config when nothing is stored
        let config = repo.load_config().await;
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.sync.refresh_interval_secs, 30);

        // Write a config and read it back
        let config = SiteConfig::default().with_refresh_interval(5);
        repo.save_config(&config).await;

        let loaded = repo.load_config().await;
        assert_eq!(loaded.sync.refresh_interval_secs, 5);
    }

    #[tokio::test]
    async fn test_garbage_config_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set("studentCouncilConfig", ":::").await;

        let repo = Repository::new(store);
        assert_eq!(repo.load_config().await, SiteConfig::default());
    }
}
