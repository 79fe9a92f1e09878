use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;

use crate::upload::{read_photo, PhotoUpload};

/// Values submitted from the event form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFields {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub registration_required: bool,
}

/// Form for adding or editing an event. Same contract as
/// [`crate::MemberForm`]: `initial` prefills, an empty photo input keeps
/// the existing photo.
#[component]
pub fn EventForm(
    title: String,
    submit_label: String,
    initial: EventFields,
    on_submit: EventHandler<(EventFields, Option<PhotoUpload>)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut event_title = use_signal(|| initial.title.clone());
    let mut date = use_signal(|| initial.date.clone());
    let mut time = use_signal(|| initial.time.clone());
    let mut location = use_signal(|| initial.location.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut category = use_signal(|| initial.category.clone());
    let mut registration = use_signal(|| initial.registration_required);
    let mut photo_file = use_signal(|| Option::<Arc<dyn FileEngine>>::None);

    let handle_submit = move |_| async move {
        let fields = EventFields {
            title: event_title().trim().to_string(),
            date: date().trim().to_string(),
            time: time().trim().to_string(),
            location: location().trim().to_string(),
            description: description().trim().to_string(),
            category: category(),
            registration_required: registration(),
        };
        if fields.title.is_empty() || fields.date.is_empty() || fields.location.is_empty() {
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
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "Event title",
                    value: event_title(),
                    oninput: move |evt| event_title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Date" }
                input {
                    r#type: "date",
                    value: date(),
                    oninput: move |evt| date.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Time" }
                input {
                    r#type: "time",
                    value: time(),
                    oninput: move |evt| time.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Location" }
                input {
                    r#type: "text",
                    placeholder: "Where it happens",
                    value: location(),
                    oninput: move |evt| location.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    placeholder: "What to expect",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Category" }
                select {
                    value: category(),
                    onchange: move |evt| category.set(evt.value()),
                    option { value: "social", "Social" }
                    option { value: "academic", "Academic" }
                    option { value: "sports", "Sports" }
                    option { value: "fundraiser", "Fundraiser" }
                    option { value: "meeting", "Meeting" }
                    option { value: "other", "Other" }
                }
            }

            div {
                class: "form-field",
                label { "Registration required" }
                select {
                    value: if registration() { "true" } else { "false" },
                    onchange: move |evt| registration.set(evt.value() == "true"),
                    option { value: "false", "No" }
                    option { value: "true", "Yes" }
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
