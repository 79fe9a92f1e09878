use dioxus::prelude::*;

use store::Member;
use ui::icons::{FaPenToSquare, FaTrash, FaUser, FaUsers};
use ui::{
    make_repository, member_card, members_empty_state, notify, use_auth, use_notifications,
    Audience, ConfirmDialog, Icon, MemberCard, MemberFields, MemberForm, ModalOverlay, NoticeLevel,
    PhotoUpload,
};

use crate::controller::AdminPanel;
use crate::views::AdminNav;
use crate::Route;

/// Members table with add/edit/delete.
#[component]
pub fn Members() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut log = use_notifications();
    let mut members = use_signal(Vec::<Member>::new);
    let mut show_add = use_signal(|| false);
    let mut edit_id = use_signal(|| Option::<u32>::None);
    let mut pending_delete = use_signal(|| Option::<u32>::None);

    let _loader = use_resource(move || async move {
        let repo = make_repository();
        members.set(repo.load::<Member>().await);
    });

    if !auth().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_add = move |(fields, upload): (MemberFields, Option<PhotoUpload>)| {
        spawn(async move {
            let mut panel = AdminPanel::load(make_repository()).await;
            let outcome = panel.create_member(fields, upload).await;
            members.set(panel.members().to_vec());
            show_add.set(false);
            if outcome.photo_dropped {
                notify(
                    &mut log,
                    NoticeLevel::Warning,
                    "Photo could not be read; the member was saved without one.",
                );
            }
            notify(&mut log, NoticeLevel::Success, "Member added successfully!");
        });
    };

    let handle_edit = move |(fields, upload): (MemberFields, Option<PhotoUpload>)| {
        let Some(id) = edit_id() else {
            return;
        };
        spawn(async move {
            let mut panel = AdminPanel::load(make_repository()).await;
            match panel.update_member(id, fields, upload).await {
                Ok(outcome) => {
                    members.set(panel.members().to_vec());
                    if outcome.photo_dropped {
                        notify(
                            &mut log,
                            NoticeLevel::Warning,
                            "Photo could not be read; the existing photo was kept.",
                        );
                    }
                    notify(&mut log, NoticeLevel::Success, "Member updated successfully!");
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
            match panel.delete_member(id).await {
                Ok(()) => {
                    members.set(panel.members().to_vec());
                    notify(&mut log, NoticeLevel::Success, "Member deleted successfully!");
                }
                Err(err) => {
                    notify(&mut log, NoticeLevel::Error, &err.to_string());
                }
            }
            pending_delete.set(None);
        });
    };

    let cards: Vec<MemberCard> = members().iter().map(member_card).collect();
    let empty = members_empty_state(Audience::Admin);

    // Prefill for the edit modal from the loaded list.
    let editing: Option<MemberFields> = edit_id().and_then(|id| {
        members().iter().find(|m| m.id == id).map(|m| MemberFields {
            name: m.name.clone(),
            role: m.role.clone(),
            program: m.program.clone().unwrap_or_default(),
            email: m.email.clone(),
            bio: m.bio.clone().unwrap_or_default(),
        })
    });

    rsx! {
        AdminNav {}

        section {
            class: "admin-section",
            header {
                class: "section-header",
                h1 { "Council Members" }
                button {
                    class: "primary",
                    onclick: move |_| show_add.set(true),
                    "Add Member"
                }
            }

            if cards.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaUsers, width: 32, height: 32 }
                    h3 { "{empty.title}" }
                    p { "{empty.hint}" }
                }
            } else {
                table {
                    class: "records-table",
                    thead {
                        tr {
                            th { "Photo" }
                            th { "Name" }
                            th { "Role" }
                            th { "Program" }
                            th { "Email" }
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
                                            alt: "{card.name}",
                                        }
                                    } else {
                                        div {
                                            class: "record-photo record-photo--placeholder",
                                            Icon { icon: FaUser, width: 16, height: 16 }
                                        }
                                    }
                                }
                                td { strong { "{card.name}" } }
                                td { span { class: "badge", "{card.role}" } }
                                td { "{card.program}" }
                                td { "{card.email}" }
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
                    MemberForm {
                        title: "Add Member",
                        submit_label: "Add Member",
                        initial: MemberFields::default(),
                        on_submit: handle_add,
                        on_cancel: move |_| show_add.set(false),
                    }
                }
            }

            if let Some(initial) = editing {
                ModalOverlay {
                    on_close: move |_| edit_id.set(None),
                    MemberForm {
                        title: "Edit Member",
                        submit_label: "Save Changes",
                        initial,
                        on_submit: handle_edit,
                        on_cancel: move |_| edit_id.set(None),
                    }
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Delete member?",
                    message: "Are you sure you want to delete this member?",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
