//! # Pure data-to-view-model mapping
//!
//! Everything the member and event markup needs, computed from the records
//! alone with no rendering target involved, so the projection is testable
//! on its own. The view layers (admin tables, public grids) only
//! interpolate these values.

use chrono::{Datelike, NaiveDate};
use store::{Event, Member, PhotoRef, Record};

/// Which surface is rendering: the admin tables or the public page.
/// Only the empty-state hint copy differs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Audience {
    Admin,
    Public,
}

/// Copy shown when a collection has zero records. Rendered instead of an
/// empty list, never a bare empty grid.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub fn members_empty_state(audience: Audience) -> EmptyState {
    EmptyState {
        title: "No Council Members Yet",
        hint: match audience {
            Audience::Admin => {
                "Add your first council member using the \"Add Member\" button above."
            }
            Audience::Public => {
                "Council members will appear here once they are added by the administrator."
            }
        },
    }
}

pub fn events_empty_state(audience: Audience) -> EmptyState {
    EmptyState {
        title: "No Events Yet",
        hint: match audience {
            Audience::Admin => "Add your first event using the \"Add Event\" button above.",
            Audience::Public => {
                "Upcoming events will appear here once they are added by the administrator."
            }
        },
    }
}

/// Display projection of a [`Member`].
#[derive(Clone, Debug, PartialEq)]
pub struct MemberCard {
    pub id: u32,
    pub name: String,
    pub role: String,
    /// `"N/A"` when the record has no program.
    pub program: String,
    pub email: String,
    /// Omitted from the markup entirely when absent.
    pub bio: Option<String>,
    /// `None` renders the placeholder icon.
    pub photo_src: Option<String>,
}

pub fn member_card(member: &Member) -> MemberCard {
    MemberCard {
        id: member.id,
        name: member.name.clone(),
        role: member.role.clone(),
        program: non_empty(member.program.as_deref())
            .unwrap_or("N/A")
            .to_string(),
        email: member.email.clone(),
        bio: non_empty(member.bio.as_deref()).map(str::to_string),
        photo_src: photo_src(member.photo.as_ref(), Member::ASSET_DIR),
    }
}

/// Display projection of an [`Event`].
#[derive(Clone, Debug, PartialEq)]
pub struct EventCard {
    pub id: u32,
    pub title: String,
    /// Raw stored date, e.g. `"2026-09-18"` (admin table).
    pub date: String,
    /// Human-readable date, e.g. `"September 18, 2026"` (public page).
    pub display_date: String,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub category: String,
    pub registration_required: bool,
    pub photo_src: Option<String>,
}

pub fn event_card(event: &Event) -> EventCard {
    EventCard {
        id: event.id,
        title: event.title.clone(),
        date: event.date.clone(),
        display_date: format_display_date(&event.date),
        time: non_empty(event.time.as_deref()).map(str::to_string),
        location: event.location.clone(),
        description: event.description.clone(),
        category: event.category.clone(),
        registration_required: event.registration_required,
        photo_src: photo_src(event.photo.as_ref(), Event::ASSET_DIR),
    }
}

/// Format an ISO form date for display: `"2026-09-18"` → `"September 18, 2026"`.
/// Unparsable input falls back to the raw string.
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} {}, {}", d.format("%B"), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}

fn photo_src(photo: Option<&PhotoRef>, asset_dir: &str) -> Option<String> {
    photo.map(|p| p.src(asset_dir))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_member_without_photo_gets_placeholder() {
        let card = member_card(&jane());
        assert_eq!(card.photo_src, None);
        assert_eq!(card.program, "N/A");
        assert_eq!(card.bio, None);
    }

    #[test]
    fn test_member_data_uri_passes_through() {
        let mut member = jane();
        member.photo = Some(PhotoRef::DataUri("data:image/png;base64,AA".to_string()));
        let card = member_card(&member);
        assert_eq!(card.photo_src.as_deref(), Some("data:image/png;base64,AA"));
    }

    #[test]
    fn test_member_asset_photo_resolves_against_members_dir() {
        let mut member = jane();
        member.photo = Some(PhotoRef::Asset("jane.jpg".to_string()));
        let card = member_card(&member);
        assert_eq!(card.photo_src.as_deref(), Some("assets/members/jane.jpg"));
    }

    #[test]
    fn test_blank_program_renders_as_na() {
        let mut member = jane();
        member.program = Some("  ".to_string());
        assert_eq!(member_card(&member).program, "N/A");
    }

    #[test]
    fn test_event_display_date() {
        assert_eq!(format_display_date("2026-09-18"), "September 18, 2026");
        assert_eq!(format_display_date("2026-01-05"), "January 5, 2026");
    }

    #[test]
    fn test_unparsable_date_falls_back_to_raw() {
        assert_eq!(format_display_date("next friday"), "next friday");
    }

    #[test]
    fn test_empty_state_copy() {
        assert_eq!(
            members_empty_state(Audience::Public).title,
            "No Council Members Yet"
        );
        assert_eq!(events_empty_state(Audience::Admin).title, "No Events Yet");
        assert_ne!(
            members_empty_state(Audience::Admin).hint,
            members_empty_state(Audience::Public).hint
        );
    }
}
