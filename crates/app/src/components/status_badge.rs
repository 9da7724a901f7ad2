use dioxus::prelude::*;
use shared_types::{ApplicationStatus, EntryStatus};
use shared_ui::{Badge, BadgeVariant};

pub fn entry_variant(status: EntryStatus) -> BadgeVariant {
    match status {
        EntryStatus::Draft => BadgeVariant::Outline,
        EntryStatus::Submitted => BadgeVariant::Warning,
        EntryStatus::Verified => BadgeVariant::Success,
        EntryStatus::Rejected => BadgeVariant::Destructive,
    }
}

pub fn application_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::NotApplied => BadgeVariant::Outline,
        ApplicationStatus::Applied => BadgeVariant::Secondary,
        ApplicationStatus::InterviewScheduled => BadgeVariant::Success,
    }
}

#[component]
pub fn EntryBadge(status: EntryStatus) -> Element {
    rsx! {
        Badge { variant: entry_variant(status), "{status.label()}" }
    }
}

#[component]
pub fn ApplicationBadge(status: ApplicationStatus) -> Element {
    rsx! {
        Badge { variant: application_variant(status), "{status.label()}" }
    }
}
