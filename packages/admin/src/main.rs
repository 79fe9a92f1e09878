use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, NotificationProvider, ToastHost};
use views::{Dashboard, Events, Login, Members};

mod controller;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/members")]
    Members {},
    #[route("/events")]
    Events {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NotificationProvider {
                Router::<Route> {}
                ToastHost {}
            }
        }
    }
}

/// Redirect `/` to the dashboard, or to the login screen when signed out.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    if auth().is_logged_in() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}
