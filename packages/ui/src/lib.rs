//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_repository;

mod auth;
pub use auth::{authenticate, use_auth, AdminUser, AuthProvider, AuthState, InvalidCredentials};

pub mod notifications;
pub use notifications::{
    notify, use_notifications, NotificationProvider, Notice, NoticeLevel, Notifications, ToastHost,
};

pub mod view_model;
pub use view_model::{
    event_card, events_empty_state, format_display_date, member_card, members_empty_state,
    Audience, EmptyState, EventCard, MemberCard,
};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod upload;
pub use upload::{read_photo, PhotoUpload};

mod member_form;
pub use member_form::{MemberFields, MemberForm};

mod event_form;
pub use event_form::{EventFields, EventForm};
