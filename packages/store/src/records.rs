//! # Record types for the two collections
//!
//! [`Member`] and [`Event`] are the entities the admin panel manages and the
//! public site renders. Both collections are independent of each other and
//! serialize as JSON arrays into their own storage slot.
//!
//! The [`Record`] trait ties a record type to its storage key, asset
//! directory, and patch type, so [`crate::Collection`] and
//! [`crate::Repository`] can stay generic over both.
//!
//! Patch structs ([`MemberPatch`], [`EventPatch`]) carry every field as an
//! `Option`; `None` keeps the existing value. A patch without a `photo`
//! always preserves the record's current photo: supplying no file on edit
//! must not drop an existing upload.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::photo::PhotoRef;

/// A record belonging to one of the two managed collections.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Patch type accepted by [`crate::Collection::update`].
    type Patch;

    /// Storage slot holding the serialized collection.
    const STORAGE_KEY: &'static str;
    /// Static asset directory for file-name photo references.
    const ASSET_DIR: &'static str;
    /// Label used in error messages, e.g. `"member"`.
    const LABEL: &'static str;

    fn id(&self) -> u32;
    fn assign_id(&mut self, id: u32);
    fn has_photo(&self) -> bool;

    /// Shallow-merge a patch onto this record.
    fn apply(&mut self, patch: Self::Patch);
}

/// A council member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub program: Option<String>,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo: Option<PhotoRef>,
}

/// Partial update for a [`Member`]. `None` fields keep the current value.
#[derive(Clone, Debug, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub program: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<PhotoRef>,
}

impl Record for Member {
    type Patch = MemberPatch;

    const STORAGE_KEY: &'static str = "studentCouncilMembers";
    const ASSET_DIR: &'static str = "members";
    const LABEL: &'static str = "member";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    fn apply(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(program) = patch.program {
            self.program = Some(program);
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(photo) = patch.photo {
            self.photo = Some(photo);
        }
    }
}

/// A council event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    /// ISO date as entered in the form, e.g. `"2026-09-18"`.
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub category: String,
    /// Stored as the string `"true"`/`"false"` for compatibility with
    /// existing slot data; real booleans are accepted on input.
    #[serde(default, with = "bool_string")]
    pub registration_required: bool,
    #[serde(default)]
    pub photo: Option<PhotoRef>,
}

/// Partial update for an [`Event`]. `None` fields keep the current value.
#[derive(Clone, Debug, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub registration_required: Option<bool>,
    pub photo: Option<PhotoRef>,
}

impl Record for Event {
    type Patch = EventPatch;

    const STORAGE_KEY: &'static str = "studentCouncilEvents";
    const ASSET_DIR: &'static str = "events";
    const LABEL: &'static str = "event";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = Some(time);
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(registration_required) = patch.registration_required {
            self.registration_required = registration_required;
        }
        if let Some(photo) = patch.photo {
            self.photo = Some(photo);
        }
    }
}

mod bool_string {
    use serde::{de, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        struct BoolOrString;

        impl de::Visitor<'_> for BoolOrString {
            type Value = bool;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a boolean or \"true\"/\"false\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
                Ok(v == "true")
            }
        }

        deserializer.deserialize_any(BoolOrString)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_photo_serializes_as_null() {
        let member = Member {
            id: 1,
            name: "Jane Doe".to_string(),
            role: "President".to_string(),
            program: None,
            email: "jane@example.com".to_string(),
            bio: None,
            photo: None,
        };
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("\"photo\":null"));
    }

    #[test]
    fn test_registration_required_string_roundtrip() {
        let event = Event {
            id: 1,
            title: "Welcome Fair".to_string(),
            date: "2026-09-18".to_string(),
            time: Some("14:00".to_string()),
            location: "Main Hall".to_string(),
            description: "Kick-off".to_string(),
            category: "social".to_string(),
            registration_required: true,
            photo: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"registration_required\":\"true\""));

        let back: Event = serde_json::from_str(&json).unwrap();
        assert!(back.registration_required);
    }

    #[test]
    fn test_registration_required_accepts_real_bool() {
        let json = r#"{"id":2,"title":"AGM","date":"2026-10-01","location":"Room 12",
            "description":"Annual meeting","category":"meeting",
            "registration_required":false}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.registration_required);
        assert!(event.photo.is_none());
        assert!(event.time.is_none());
    }

    #[test]
    fn test_patch_without_photo_keeps_existing() {
        let mut member = Member {
            id: 3,
            name: "Sam Lee".to_string(),
            role: "Treasurer".to_string(),
            program: Some("Economics".to_string()),
            email: "sam@example.com".to_string(),
            bio: None,
            photo: Some(PhotoRef::Asset("sam.jpg".to_string())),
        };
        member.apply(MemberPatch {
            role: Some("Secretary".to_string()),
            ..Default::default()
        });
        assert_eq!(member.role, "Secretary");
        assert_eq!(member.photo, Some(PhotoRef::Asset("sam.jpg".to_string())));
    }
}
