//! Public page: read-only projection of both collections.
//!
//! The page re-synchronizes with the repository on a fixed timer. Each tick
//! checks the revision counter first and reloads only when it moved; a
//! reload result older than what is already on screen is discarded, so a
//! slow reload racing a fast one cannot overwrite fresher data.

use dioxus::prelude::*;

use store::{Event, Member};
use ui::icons::{FaCalendar, FaClock, FaLocationDot, FaUser, FaUsers};
use ui::{
    event_card, events_empty_state, make_repository, member_card, members_empty_state, Audience,
    EventCard, Icon, MemberCard,
};

/// Snapshot of both collections plus the revision it was loaded at.
#[derive(Clone, Debug, Default, PartialEq)]
struct Snapshot {
    revision: u64,
    members: Vec<Member>,
    events: Vec<Event>,
}

async fn load_snapshot() -> Snapshot {
    let repo = make_repository();
    Snapshot {
        revision: repo.revision().await,
        members: repo.load::<Member>().await,
        events: repo.load::<Event>().await,
    }
}

#[component]
pub fn Home() -> Element {
    let mut data = use_signal(Snapshot::default);

    // Initial load.
    let _loader = use_resource(move || async move {
        let snapshot = load_snapshot().await;
        data.set(snapshot);
    });

    // Fixed-interval refresh; the poll interval comes from the stored site
    // configuration.
    use_effect(move || {
        spawn(async move {
            let config = make_repository().load_config().await;
            let interval = config.sync.refresh_interval_secs;
            if interval == 0 {
                return;
            }
            loop {
                sleep_secs(interval).await;
                let repo = make_repository();
                if repo.revision().await == data().revision {
                    continue;
                }
                let snapshot = load_snapshot().await;
                // Out-of-order results never replace newer data.
                if snapshot.revision >= data().revision {
                    data.set(snapshot);
                }
            }
        });
    });

    let snapshot = data();
    let members: Vec<MemberCard> = snapshot.members.iter().map(member_card).collect();
    let events: Vec<EventCard> = snapshot.events.iter().map(event_card).collect();
    let members_empty = members_empty_state(Audience::Public);
    let events_empty = events_empty_state(Audience::Public);

    rsx! {
        nav {
            class: "site-nav",
            span { class: "site-nav__brand", "Student Council" }
            div {
                class: "site-nav__links",
                a { href: "#members", "Members" }
                a { href: "#events", "Events" }
            }
        }

        header {
            class: "hero",
            h1 { "Student Council" }
            p { "Your voice on campus. Meet the team and find out what's on." }
        }

        section {
            id: "members",
            class: "section",
            h2 { "Meet the Council" }

            if members.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaUsers, width: 48, height: 48 }
                    h3 { "{members_empty.title}" }
                    p { "{members_empty.hint}" }
                }
            } else {
                div {
                    class: "members-grid",
                    for card in members {
                        div {
                            key: "{card.id}",
                            class: "member-card",
                            div {
                                class: "member-avatar",
                                if let Some(src) = card.photo_src.clone() {
                                    img { src: "{src}", alt: "{card.name}" }
                                } else {
                                    Icon { icon: FaUser, width: 24, height: 24 }
                                }
                            }
                            div { class: "member-name", "{card.name}" }
                            div { class: "member-role", "{card.role}" }
                            div { class: "member-program", "{card.program}" }
                            if let Some(bio) = card.bio.clone() {
                                div { class: "member-bio", "{bio}" }
                            }
                        }
                    }
                }
            }
        }

        section {
            id: "events",
            class: "section",
            h2 { "Upcoming Events" }

            if events.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaCalendar, width: 48, height: 48 }
                    h3 { "{events_empty.title}" }
                    p { "{events_empty.hint}" }
                }
            } else {
                div {
                    class: "events-grid",
                    for card in events {
                        div {
                            key: "{card.id}",
                            class: "event-card",
                            div {
                                class: "event-image",
                                if let Some(src) = card.photo_src.clone() {
                                    img { src: "{src}", alt: "{card.title}" }
                                } else {
                                    Icon { icon: FaCalendar, width: 32, height: 32 }
                                }
                            }
                            div {
                                class: "event-content",
                                div { class: "event-date", "{card.display_date}" }
                                div { class: "event-title", "{card.title}" }
                                div { class: "event-description", "{card.description}" }
                                div {
                                    class: "event-details",
                                    div {
                                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                                        "{card.location}"
                                    }
                                    if let Some(time) = card.time.clone() {
                                        div {
                                            Icon { icon: FaClock, width: 12, height: 12 }
                                            "{time}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        footer {
            class: "site-footer",
            p { "Student Council. Content is managed through the admin panel." }
        }
    }
}

async fn sleep_secs(secs: u32) {
    let duration = std::time::Duration::from_secs(u64::from(secs));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
