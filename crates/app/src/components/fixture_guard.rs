use dioxus::prelude::*;
use shared_ui::EmptyState;

/// Shown in place of a page when the bundled fixtures cannot be parsed.
#[component]
pub fn FixtureError(message: String) -> Element {
    rsx! {
        EmptyState {
            title: "Data unavailable".to_string(),
            description: Some(message),
        }
    }
}

/// Shown when a route id does not match any record.
#[component]
pub fn RecordNotFound(what: String) -> Element {
    rsx! {
        EmptyState {
            title: format!("{what} not found"),
            description: Some("It may have been removed, or the link is incorrect.".to_string()),
        }
    }
}
