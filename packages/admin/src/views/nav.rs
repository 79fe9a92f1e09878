use dioxus::prelude::*;

use ui::{notify, use_auth, use_notifications, AuthState, NoticeLevel};

use crate::Route;

/// Top navigation shared by the signed-in admin views.
#[component]
pub fn AdminNav() -> Element {
    let mut auth = use_auth();
    let mut log = use_notifications();
    let nav = use_navigator();

    let handle_logout = move |_| {
        auth.set(AuthState::default());
        notify(&mut log, NoticeLevel::Info, "Logged out successfully.");
        nav.push(Route::Login {});
    };

    rsx! {
        nav {
            class: "admin-nav",
            span { class: "admin-nav__brand", "Student Council Admin" }
            div {
                class: "admin-nav__links",
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Members {}, "Members" }
                Link { to: Route::Events {}, "Events" }
            }
            button {
                class: "secondary",
                onclick: handle_logout,
                "Logout"
            }
        }
    }
}
