use chrono::DateTime;
use dioxus::prelude::*;

/// Renders an RFC 3339 timestamp as e.g. `Sep 21, 2013 09:30`; anything else verbatim.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[component]
pub fn EmptyState(icon: String, title: String) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", "{icon}" }
            p { class: "empty-state-title", "{title}" }
        }
    }
}
