//! In-memory ordered store for one record collection.

use crate::error::StoreError;
use crate::records::Record;

/// The authoritative in-memory copy of one collection for the lifetime of a
/// page load. Insertion order is display order; nothing here sorts.
///
/// Ids are assigned on [`add`](Collection::add) as `max(existing ids, 0) + 1`,
/// so they are strictly increasing and never reused within a session, even
/// after deletions.
#[derive(Clone, Debug)]
pub struct Collection<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wrap records loaded from the repository, keeping their stored order.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Append a record, assigning the next id. Returns the assigned id.
    pub fn add(&mut self, mut record: R) -> u32 {
        let id = self.records.iter().map(R::id).max().unwrap_or(0) + 1;
        record.assign_id(id);
        self.records.push(record);
        id
    }

    /// Shallow-merge a patch onto the record with the given id.
    pub fn update(&mut self, id: u32, patch: R::Patch) -> Result<(), StoreError> {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply(patch);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: R::LABEL,
                id,
            }),
        }
    }

    /// Remove and return the record with the given id.
    pub fn remove(&mut self, id: u32) -> Result<R, StoreError> {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(StoreError::NotFound {
                collection: R::LABEL,
                id,
            }),
        }
    }

    pub fn get(&self, id: u32) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Read view in insertion order.
    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records carrying a photo.
    pub fn photo_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_photo()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::PhotoRef;
    use crate::records::{Member, MemberPatch};

    fn member(name: &str) -> Member {
        Member {
            id: 0,
            name: name.to_string(),
            role: "Member".to_string(),
            program: None,
            email: format!("{}@example.com", name.to_lowercase()),
            bio: None,
            photo: None,
        }
    }

    #[test]
    fn test_ids_strictly_increasing_from_one() {
        let mut members = Collection::new();
        assert_eq!(members.add(member("Ana")), 1);
        assert_eq!(members.add(member("Ben")), 2);
        assert_eq!(members.add(member("Cleo")), 3);
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let mut members = Collection::new();
        members.add(member("Ana"));
        members.add(member("Ben"));
        members.add(member("Cleo"));

        members.remove(2).unwrap();
        assert_eq!(members.add(member("Dara")), 4);

        members.remove(4).unwrap();
        members.remove(3).unwrap();
        // Max remaining id is 1, so the next id is 2: always the current
        // maximum plus one.
        assert_eq!(members.add(member("Eli")), 2);
    }

    #[test]
    fn test_insertion_order_survives_deletion() {
        let mut members = Collection::new();
        members.add(member("Ana"));
        members.add(member("Ben"));

        members.remove(1).unwrap();
        let remaining: Vec<_> = members.all().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(remaining, ["Ben"]);
        assert_eq!(members.all()[0].id, 2);
    }

    #[test]
    fn test_empty_patch_preserves_photo() {
        let mut members = Collection::new();
        let mut with_photo = member("Ana");
        with_photo.photo = Some(PhotoRef::Asset("ana.jpg".to_string()));
        let id = members.add(with_photo);

        let before = members.get(id).cloned().unwrap();
        members.update(id, MemberPatch::default()).unwrap();
        assert_eq!(members.get(id), Some(&before));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut members = Collection::new();
        members.add(member("Ana"));
        let before: Vec<_> = members.all().to_vec();

        let err = members.update(99, MemberPatch::default()).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                collection: "member",
                id: 99
            }
        );
        assert_eq!(members.all(), before);
    }

    #[test]
    fn test_remove_missing_id_leaves_collection_unchanged() {
        let mut members = Collection::new();
        members.add(member("Ana"));

        assert!(members.remove(7).is_err());
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn test_photo_count() {
        let mut members = Collection::new();
        members.add(member("Ana"));
        let mut ben = member("Ben");
        ben.photo = Some(PhotoRef::Asset("ben.jpg".to_string()));
        members.add(ben);

        assert_eq!(members.photo_count(), 1);
    }
}
