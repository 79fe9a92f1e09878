use dioxus::prelude::*;

use store::Event;
use ui::icons::{FaCalendar, FaPenToSquare, FaTrash};
use ui::{
    event_card, events_empty_state, make_repository, notify, use_auth, use_notifications,
    Audience, ConfirmDialog, EventCard, EventFields, EventForm, Icon, ModalOverlay, NoticeLevel,
    PhotoUpload,
};

use crate::controller::AdminPanel;
use crate::views::AdminNav;
use crate::Route;

/// Events table with add/edit/delete.
#[component]
pub fn Events() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut log = use_notifications();
    let mut events = use_signal(Vec::<Event>::new);
    let mut show_add = use_signal(|| false);
    let mut edit_id = use_signal(|| Option::<u32>::None);
    let mut pending_delete = use_signal(|| Option::<u32>::None);

    let _loader = use_resource(move || async move {
        let repo = make_repository();
        events.set(repo.load::<Event>().await);
    });

    if !auth().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_add = move |(fields, upload): (EventFields, Option<PhotoUpload>)| {
        spawn(async move {
            let mut panel = AdminPanel::load(make_repository()).await;
            let outcome = panel.create_event(fields, upload).await;
            events.set(panel.events().to_vec());
            show_add.set(false);
            if outcome.photo_dropped {
                notify(
                    &mut log,
                    NoticeLevel::Warning,
                    "Photo could not be read; the event was saved without one.",
                );
            }
            notify(&mut log, NoticeLevel::Success, "Event added successfully!");
        });
    };

    let handle_edit = move |(fields, upload): (EventFields, Option<PhotoUpload>)| {
        let Some(id) = edit_id() else {
            return;
        };
        spawn(async move {
            let mut panel = AdminPanel::load(make_repository()).await;
            match panel.update_event(id, fields, upload).await {
                Ok(outcome) => {
                    events.set(panel.events().to_vec());
                    if outcome.photo_dropped {
                        notify(
                            &mut log,
                            NoticeLevel::Warning,
                            "Photo could not be read; the existing photo was kept.",
                        );
                    }
                    notify(&mut log, NoticeLevel::Success, "Event updated successfully!");
                }
                Err(err) => {
                    notify(&mut log, NoticeLevel::Error, &err.to_string());
                }
            }
            edit_id.set(None);
        });
    };

    let handle_delete = move |_| {
        let Some(id) = pending_delete() else {
            return;
        };
        spawn(async move {
            let mut panel = AdminPanel::load(make_repository()).await;
            match panel.delete_event(id).await {
                Ok(()) => {
                    events.set(panel.events().to_vec());
                    notify(&mut log, NoticeLevel::Success, "Event deleted successfully!");
                }
                Err(err) => {
                    notify(&mut log, NoticeLevel::Error, &err.to_string());
                }
            }
            pending_delete.set(None);
        });
    };

    let cards: Vec<EventCard> = events().iter().map(event_card).collect();
    let empty = events_empty_state(Audience::Admin);

    let editing: Option<EventFields> = edit_id().and_then(|id| {
        events().iter().find(|e| e.id == id).map(|e| EventFields {
            title: e.title.clone(),
            date: e.date.clone(),
            time: e.time.clone().unwrap_or_default(),
            location: e.location.clone(),
            description: e.description.clone(),
            category: e.category.clone(),
            registration_required: e.registration_required,
        })
    });

    rsx! {
        AdminNav {}

        section {
            class: "admin-section",
            header {
                class: "section-header",
                h1 { "Events" }
                button {
                    class: "primary",
                    onclick: move |_| show_add.set(true),
                    "Add Event"
                }
            }

            if cards.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaCalendar, width: 32, height: 32 }
                    h3 { "{empty.title}" }
                    p { "{empty.hint}" }
                }
            } else {
                table {
                    class: "records-table",
                    thead {
                        tr {
                            th { "Photo" }
                            th { "Title" }
                            th { "Date" }
                            th { "Location" }
                            th { "Category" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for card in cards {
                            tr {
                                key: "{card.id}",
                                td {
                                    if let Some(src) = card.photo_src.clone() {
                                        img {
                                            class: "record-photo",
                                            src: "{src}",
                                            alt: "{card.title}",
                                        }
                                    } else {
                                        div {
                                            class: "record-photo record-photo--placeholder",
                                            Icon { icon: FaCalendar, width: 16, height: 16 }
                                        }
                                    }
                                }
                                td { strong { "{card.title}" } }
                                td { "{card.date}" }
                                td { "{card.location}" }
                                td { span { class: "badge", "{card.category}" } }
                                td {
                                    div {
                                        class: "action-buttons",
                                        button {
                                            class: "icon-button",
                                            onclick: move |_| edit_id.set(Some(card.id)),
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            onclick: move |_| pending_delete.set(Some(card.id)),
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_add() {
                ModalOverlay {
                    on_close: move |_| show_add.set(false),
                    EventForm {
                        title: "Add Event",
                        submit_label: "Add Event",
                        initial: EventFields {
                            category: "social".to_string(),
                            ..Default::default()
                        },
                        on_submit: handle_add,
                        on_cancel: move |_| show_add.set(false),
                    }
                }
            }

            if let Some(initial) = editing {
                ModalOverlay {
                    on_close: move |_| edit_id.set(None),
                    EventForm {
                        title: "Edit Event",
                        submit_label: "Save Changes",
                        initial,
                        on_submit: handle_edit,
                        on_cancel: move |_| edit_id.set(None),
                    }
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Delete event?",
                    message: "Are you sure you want to delete this event?",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
