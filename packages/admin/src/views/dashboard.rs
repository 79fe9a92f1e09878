use dioxus::prelude::*;

use ui::{make_repository, use_auth, Icon};
use ui::icons::{FaCalendar, FaImage, FaUsers};

use crate::controller::{AdminPanel, DashboardStats};
use crate::views::AdminNav;
use crate::Route;

/// Landing view after login: counters over both collections.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut stats = use_signal(DashboardStats::default);

    let _loader = use_resource(move || async move {
        let panel = AdminPanel::load(make_repository()).await;
        stats.set(panel.stats());
    });

    if !auth().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let current = stats();

    rsx! {
        AdminNav {}

        section {
            class: "admin-section",
            h1 { "Dashboard" }

            div {
                class: "stat-cards",
                div {
                    class: "stat-card",
                    Icon { icon: FaUsers, width: 24, height: 24 }
                    span { class: "stat-card__value", "{current.members}" }
                    span { class: "stat-card__label", "Members" }
                }
                div {
                    class: "stat-card",
                    Icon { icon: FaCalendar, width: 24, height: 24 }
                    span { class: "stat-card__value", "{current.events}" }
                    span { class: "stat-card__label", "Events" }
                }
                div {
                    class: "stat-card",
                    Icon { icon: FaImage, width: 24, height: 24 }
                    span { class: "stat-card__value", "{current.photos}" }
                    span { class: "stat-card__label", "Photos" }
                }
            }
        }
    }
}
