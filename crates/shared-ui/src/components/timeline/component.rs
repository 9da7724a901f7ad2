use dioxus::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStatus {
    Completed,
    Current,
    Upcoming,
}

impl TimelineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "Completed",
            TimelineStatus::Current => "In Progress",
            TimelineStatus::Upcoming => "Upcoming",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "completed",
            TimelineStatus::Current => "current",
            TimelineStatus::Upcoming => "upcoming",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            TimelineStatus::Completed => BadgeVariant::Primary,
            TimelineStatus::Current => BadgeVariant::Secondary,
            TimelineStatus::Upcoming => BadgeVariant::Outline,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub title: String,
    /// Preformatted date text.
    pub date: String,
    pub status: TimelineStatus,
    pub description: Option<String>,
}

/// Vertical list of dated milestones.
#[component]
pub fn Timeline(items: Vec<TimelineItem>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol { class: "timeline",
            for (i, item) in items.into_iter().enumerate() {
                li { key: "{i}", class: format!("timeline-item {}", item.status.class()),
                    h4 { class: "timeline-title", "{item.title}" }
                    div { class: "timeline-meta",
                        time { "{item.date}" }
                        Badge { variant: item.status.badge(), {item.status.label()} }
                    }
                    if let Some(text) = item.description {
                        p { class: "timeline-description", "{text}" }
                    }
                }
            }
        }
    }
}
