//! # Admin controller
//!
//! [`AdminPanel`] mediates between form submissions and the two record
//! collections: it constructs records from submitted values, assigns ids
//! through the collection, encodes uploaded photos, and persists through
//! the repository before an operation is considered done. The views
//! re-render from [`members`](AdminPanel::members)/[`events`](AdminPanel::events)
//! as soon as a call returns.
//!
//! Deletion confirmation is the view layer's job (a confirm dialog); the
//! controller is only invoked for confirmed deletions, so an unconfirmed
//! delete never reaches it.
//!
//! Photo failures are never fatal: an upload that cannot be read or
//! encoded degrades to "no photo supplied", flagged on the returned
//! [`MutationOutcome`] so the view can surface a warning.

use store::{
    Collection, Event, EventPatch, KeyValueStore, Member, MemberPatch, PhotoRef, Repository,
    StoreError,
};
use ui::{EventFields, MemberFields, PhotoUpload};

/// Counters for the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub members: usize,
    pub events: usize,
    pub photos: usize,
}

/// Result of a successful create or update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationOutcome {
    pub id: u32,
    /// True when an uploaded photo had to be dropped because it could not
    /// be read or encoded.
    pub photo_dropped: bool,
}

/// Application state for the admin panel: the repository plus the
/// in-memory copy of both collections it mutates.
pub struct AdminPanel<S: KeyValueStore> {
    repo: Repository<S>,
    members: Collection<Member>,
    events: Collection<Event>,
}

impl<S: KeyValueStore> AdminPanel<S> {
    /// Load both collections from the repository.
    pub async fn load(repo: Repository<S>) -> Self {
        let members = Collection::from_records(repo.load().await);
        let events = Collection::from_records(repo.load().await);
        Self {
            repo,
            members,
            events,
        }
    }

    pub fn members(&self) -> &[Member] {
        self.members.all()
    }

    pub fn events(&self) -> &[Event] {
        self.events.all()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            members: self.members.len(),
            events: self.events.len(),
            photos: self.members.photo_count() + self.events.photo_count(),
        }
    }

    pub async fn create_member(
        &mut self,
        fields: MemberFields,
        upload: Option<PhotoUpload>,
    ) -> MutationOutcome {
        let (photo, photo_dropped) = encode_photo(upload);
        let member = Member {
            id: 0,
            name: fields.name,
            role: fields.role,
            program: optional(fields.program),
            email: fields.email,
            bio: optional(fields.bio),
            photo,
        };
        let id = self.members.add(member);
        self.repo.save(self.members.all()).await;
        MutationOutcome { id, photo_dropped }
    }

    /// Overwrite a member's fields. An upload-less edit keeps the current
    /// photo.
    pub async fn update_member(
        &mut self,
        id: u32,
        fields: MemberFields,
        upload: Option<PhotoUpload>,
    ) -> Result<MutationOutcome, StoreError> {
        let (photo, photo_dropped) = encode_photo(upload);
        let patch = MemberPatch {
            name: Some(fields.name),
            role: Some(fields.role),
            program: Some(fields.program),
            email: Some(fields.email),
            bio: Some(fields.bio),
            photo,
        };
        self.members.update(id, patch)?;
        self.repo.save(self.members.all()).await;
        Ok(MutationOutcome { id, photo_dropped })
    }

    pub async fn delete_member(&mut self, id: u32) -> Result<(), StoreError> {
        self.members.remove(id)?;
        self.repo.save(self.members.all()).await;
        Ok(())
    }

    pub async fn create_event(
        &mut self,
        fields: EventFields,
        upload: Option<PhotoUpload>,
    ) -> MutationOutcome {
        let (photo, photo_dropped) = encode_photo(upload);
        let event = Event {
            id: 0,
            title: fields.title,
            date: fields.date,
            time: optional(fields.time),
            location: fields.location,
            description: fields.description,
            category: fields.category,
            registration_required: fields.registration_required,
            photo,
        };
        let id = self.events.add(event);
        self.repo.save(self.events.all()).await;
        MutationOutcome { id, photo_dropped }
    }

    pub async fn update_event(
        &mut self,
        id: u32,
        fields: EventFields,
        upload: Option<PhotoUpload>,
    ) -> Result<MutationOutcome, StoreError> {
        let (photo, photo_dropped) = encode_photo(upload);
        let patch = EventPatch {
            title: Some(fields.title),
            date: Some(fields.date),
            time: Some(fields.time),
            location: Some(fields.location),
            description: Some(fields.description),
            category: Some(fields.category),
            registration_required: Some(fields.registration_required),
            photo,
        };
        self.events.update(id, patch)?;
        self.repo.save(self.events.all()).await;
        Ok(MutationOutcome { id, photo_dropped })
    }

    pub async fn delete_event(&mut self, id: u32) -> Result<(), StoreError> {
        self.events.remove(id)?;
        self.repo.save(self.events.all()).await;
        Ok(())
    }
}

/// Encode an upload into an inline photo payload, degrading to no photo
/// when encoding fails.
fn encode_photo(upload: Option<PhotoUpload>) -> (Option<PhotoRef>, bool) {
    match upload {
        None => (None, false),
        Some(upload) => match PhotoRef::encode(&upload.file_name, &upload.bytes) {
            Ok(photo) => (Some(photo), false),
            Err(_) => (None, true),
        },
    }
}

/// Empty form controls become absent fields, not empty strings.
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn jane_fields() -> MemberFields {
        MemberFields {
            name: "Jane Doe".to_string(),
            role: "President".to_string(),
            program: "".to_string(),
            email: "jane@example.com".to_string(),
            bio: "".to_string(),
        }
    }

    fn fair_fields() -> EventFields {
        EventFields {
            title: "Welcome Fair".to_string(),
            date: "2026-09-18".to_string(),
            time: "14:00".to_string(),
            location: "Main Hall".to_string(),
            description: "Kick-off for the new term.".to_string(),
            category: "social".to_string(),
            registration_required: false,
        }
    }

    #[tokio::test]
    async fn test_create_member_assigns_id_and_persists() {
        let store = MemoryStore::new();
        let mut panel = AdminPanel::load(Repository::new(store.clone())).await;

        let outcome = panel.create_member(jane_fields(), None).await;
        assert_eq!(outcome.id, 1);
        assert!(!outcome.photo_dropped);
        assert_eq!(panel.members()[0].photo, None);
        assert_eq!(panel.members()[0].program, None);

        // A fresh panel over the same store sees the persisted record.
        let reloaded = AdminPanel::load(Repository::new(store)).await;
        assert_eq!(reloaded.members().len(), 1);
        assert_eq!(reloaded.members()[0].name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_create_member_with_unreadable_photo_degrades() {
        let mut panel = AdminPanel::load(Repository::new(MemoryStore::new())).await;

        let upload = PhotoUpload {
            file_name: "broken.png".to_string(),
            bytes: Vec::new(),
        };
        let outcome = panel.create_member(jane_fields(), Some(upload)).await;
        assert!(outcome.photo_dropped);
        assert_eq!(panel.members()[0].photo, None);
    }

    #[tokio::test]
    async fn test_update_member_keeps_photo_without_new_upload() {
        let mut panel = AdminPanel::load(Repository::new(MemoryStore::new())).await;

        let upload = PhotoUpload {
            file_name: "jane.png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let id = panel.create_member(jane_fields(), Some(upload)).await.id;
        let photo_before = panel.members()[0].photo.clone();
        assert!(photo_before.is_some());

        let mut edited = jane_fields();
        edited.role = "Chair".to_string();
        panel.update_member(id, edited, None).await.unwrap();

        assert_eq!(panel.members()[0].role, "Chair");
        assert_eq!(panel.members()[0].photo, photo_before);
    }

    #[tokio::test]
    async fn test_update_missing_member_is_not_found() {
        let mut panel = AdminPanel::load(Repository::new(MemoryStore::new())).await;

        let err = panel.update_member(5, jane_fields(), None).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                collection: "member",
                id: 5
            }
        );
        assert!(panel.members().is_empty());
    }

    #[tokio::test]
    async fn test_delete_event_persists_and_keeps_survivor_ids() {
        let store = MemoryStore::new();
        let mut panel = AdminPanel::load(Repository::new(store.clone())).await;

        let first = panel.create_event(fair_fields(), None).await.id;
        let mut second_fields = fair_fields();
        second_fields.title = "AGM".to_string();
        let second = panel.create_event(second_fields, None).await.id;

        panel.delete_event(first).await.unwrap();

        let reloaded = AdminPanel::load(Repository::new(store)).await;
        assert_eq!(reloaded.events().len(), 1);
        assert_eq!(reloaded.events()[0].id, second);
        assert_eq!(reloaded.events()[0].title, "AGM");
    }

    #[tokio::test]
    async fn test_delete_missing_event_is_not_found() {
        let mut panel = AdminPanel::load(Repository::new(MemoryStore::new())).await;
        assert!(panel.delete_event(9).await.is_err());
    }

    #[tokio::test]
    async fn test_stats_counts_photos_across_collections() {
        let mut panel = AdminPanel::load(Repository::new(MemoryStore::new())).await;

        let upload = PhotoUpload {
            file_name: "jane.jpg".to_string(),
            bytes: vec![1],
        };
        panel.create_member(jane_fields(), Some(upload)).await;
        panel.create_event(fair_fields(), None).await;

        assert_eq!(
            panel.stats(),
            DashboardStats {
                members: 1,
                events: 1,
                photos: 1
            }
        );
    }
}
