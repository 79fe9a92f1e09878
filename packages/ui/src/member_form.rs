use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;

use crate::upload::{read_photo, PhotoUpload};

/// Values submitted from the member form. Optional fields arrive as empty
/// strings, matching what an untouched form control produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberFields {
    pub name: String,
    pub role: String,
    pub program: String,
    pub email: String,
    pub bio: String,
}

/// Form for adding or editing a council member.
///
/// `initial` prefills the fields when editing. The photo input is optional;
/// leaving it empty on edit keeps the record's current photo. Submission
/// suspends until a selected file has been read to completion.
#[component]
pub fn MemberForm(
    title: String,
    submit_label: String,
    initial: MemberFields,
    on_submit: EventHandler<(MemberFields, Option<PhotoUpload>)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| initial.name.clone());
    let mut role = use_signal(|| initial.role.clone());
    let mut program = use_signal(|| initial.program.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut bio = use_signal(|| initial.bio.clone());
    let mut photo_file = use_signal(|| Option::<Arc<dyn FileEngine>>::None);

    let handle_submit = move |_| async move {
        let fields = MemberFields {
            name: name().trim().to_string(),
            role: role().trim().to_string(),
            program: program().trim().to_string(),
            email: email().trim().to_string(),
            bio: bio().trim().to_string(),
        };
        if fields.name.is_empty() || fields.role.is_empty() || fields.email.is_empty() {
            return;
        }
        let photo = read_photo(photo_file()).await;
        on_submit.call((fields, photo));
    };

    rsx! {
        div {
            class: "record-form",
            h2 { "{title}" }

            div {
                class: "form-field",
                label { "Name" }
                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Role" }
                input {
                    r#type: "text",
                    placeholder: "e.g. President",
                    value: role(),
                    oninput: move |evt| role.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Program" }
                input {
                    r#type: "text",
                    placeholder: "Program of study (optional)",
                    value: program(),
                    oninput: move |evt| program.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "name@example.com",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Bio" }
                textarea {
                    placeholder: "A short bio (optional)",
                    value: bio(),
                    oninput: move |evt| bio.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Photo" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt| photo_file.set(evt.files()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: handle_submit,
                    "{submit_label}"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
