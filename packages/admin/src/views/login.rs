//! Login screen for the admin panel.
//!
//! The credential check is the in-process demo gate from [`ui::authenticate`];
//! this screen is chrome around it, not an access-control layer.

use dioxus::prelude::*;

use ui::{authenticate, notify, use_auth, use_notifications, AuthState, NoticeLevel};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut log = use_notifications();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in, skip straight to the dashboard.
    if auth().is_logged_in() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_login = move |_| {
        match authenticate(&username(), &password()) {
            Ok(user) => {
                auth.set(AuthState { user: Some(user) });
                error.set(None);
                notify(&mut log, NoticeLevel::Success, "Login successful!");
                nav.push(Route::Dashboard {});
            }
            Err(err) => {
                error.set(Some(err.to_string()));
                notify(&mut log, NoticeLevel::Error, &err.to_string());
            }
        }
    };

    let error_message = error();

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                h1 { "Student Council Admin" }
                p { class: "login-hint", "Sign in to manage members and events." }

                div {
                    class: "form-field",
                    label { "Username" }
                    input {
                        r#type: "text",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if let Some(message) = error_message {
                    p { class: "login-error", "{message}" }
                }

                button {
                    class: "primary",
                    onclick: handle_login,
                    "Sign In"
                }
            }
        }
    }
}
