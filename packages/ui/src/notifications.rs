//! Transient notification log shared by both applications.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(log: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    let ts = current_time();
    log.write().entries.push(Notice {
        timestamp: ts,
        level,
        message: message.to_string(),
    });
}

/// Provider component owning the notification signal.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let log = use_signal(Notifications::default);
    use_context_provider(|| log);

    rsx! {
        {children}
    }
}

/// Stacked toasts for the most recent notices. Clicking a toast dismisses
/// the stack.
#[component]
pub fn ToastHost() -> Element {
    let mut log = use_notifications();
    let entries = log().entries;
    let start = entries.len().saturating_sub(3);
    let toasts: Vec<(String, String)> = entries[start..]
        .iter()
        .map(|n| (format!("toast toast--{}", n.level.class()), n.message.clone()))
        .collect();

    rsx! {
        div {
            class: "toast-host",
            for (i, (class, message)) in toasts.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "{class}",
                    onclick: move |_| log.write().entries.clear(),
                    "{message}"
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
