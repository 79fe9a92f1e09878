use dioxus::prelude::*;

use crate::modal_overlay::ModalOverlay;

/// Confirmation prompt shown before a destructive action.
///
/// The action only proceeds through `on_confirm`; cancelling, or clicking
/// outside the card, is a no-op with no side effects.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "confirm-dialog",
                h2 { "{title}" }
                p { "{message}" }
                div {
                    class: "form-actions",
                    button {
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
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
}
