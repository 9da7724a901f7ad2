use std::collections::HashMap;

use chrono::Local;
use dioxus::prelude::*;
use shared_types::{catalog, logbook, EntryStatus, LogbookEntry};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader,
    CardTitle, CardTone, EmptyState, PageHeader, Segmented, StatCard, Textarea,
};

use super::parse_student_id;
use crate::components::{EntryBadge, FixtureError, RecordNotFound};
use crate::notify;
use crate::routes::Route;

/// Statuses a reviewer can filter by. Drafts are never shown to mentors.
const REVIEW_FILTERS: [EntryStatus; 3] = [
    EntryStatus::Submitted,
    EntryStatus::Verified,
    EntryStatus::Rejected,
];

#[derive(Clone, Copy, PartialEq)]
enum Review {
    Verify,
    RequestChanges,
}

/// A mentee's logbook with verify / request-changes actions on submitted
/// entries.
#[component]
pub fn TeacherStudentLogbook(id: String) -> Element {
    let toast = use_toast();
    let student_id = parse_student_id(&id);

    let mut entries = use_signal(move || {
        match (catalog(), student_id) {
            (Ok(f), Some(sid)) => f.logbook_for(sid),
            _ => Vec::new(),
        }
    });
    let mut filter = use_signal(|| Option::<EntryStatus>::None);
    let mut comments = use_signal(HashMap::<i64, String>::new);

    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(student) = student_id.and_then(|sid| fixtures.student(sid)) else {
        return rsx! { RecordNotFound { what: "Student".to_string() } };
    };

    let reviewable: Vec<LogbookEntry> = entries
        .read()
        .iter()
        .filter(|e| e.status != EntryStatus::Draft)
        .cloned()
        .collect();
    let pending = logbook::count_by_status(&reviewable, EntryStatus::Submitted);
    let verified = logbook::count_by_status(&reviewable, EntryStatus::Verified);
    let rejected = logbook::count_by_status(&reviewable, EntryStatus::Rejected);
    let hours = logbook::total_hours(&reviewable);

    let sorted = logbook::sorted_recent_first(&reviewable);
    let visible: Vec<LogbookEntry> = logbook::filter(&sorted, "", filter())
        .into_iter()
        .cloned()
        .collect();

    let mut review = move |entry_id: i64, action: Review| {
        let comment = comments.read().get(&entry_id).cloned().unwrap_or_default();
        let today = Local::now().date_naive();
        let result = match entries.write().iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => match action {
                Review::Verify => logbook::verify(entry, &comment, today),
                Review::RequestChanges => logbook::request_changes(entry, &comment, today),
            },
            None => Err(shared_types::AppError::not_found(format!(
                "Entry {entry_id} not found"
            ))),
        };
        match (result, action) {
            (Ok(()), Review::Verify) => {
                comments.write().remove(&entry_id);
                notify::success(toast, "Logbook entry verified successfully!");
            }
            (Ok(()), Review::RequestChanges) => {
                comments.write().remove(&entry_id);
                notify::info(toast, "Requested changes to logbook entry");
            }
            (Err(e), _) => notify::failure(toast, &e),
        }
    };

    let filter_options: Vec<(String, String)> = REVIEW_FILTERS
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let student_name = student.name.clone();
    let back_id = student.id.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            Link { to: Route::TeacherStudentDetail { id: back_id }, class: "text-link",
                "\u{2190} Back to {student_name}"
            }

            PageHeader {
                title: format!("{student_name}'s Logbook"),
                description: Some("Verify submitted entries or send them back with comments.".to_string()),
            }

            div { class: "stat-grid",
                StatCard { title: "Pending".to_string(), value: pending.to_string(), tone: CardTone::Warning }
                StatCard { title: "Verified".to_string(), value: verified.to_string(), tone: CardTone::Success }
                StatCard { title: "Changes Requested".to_string(), value: rejected.to_string(), tone: CardTone::Danger }
                StatCard { title: "Total Hours".to_string(), value: hours.to_string(), tone: CardTone::Plain }
            }

            Segmented {
                options: filter_options,
                value: filter().map(|s| s.as_str().to_string()),
                allow_clear: true,
                on_change: move |key: Option<String>| {
                    let next = key
                        .as_deref()
                        .and_then(|k| REVIEW_FILTERS.into_iter().find(|s| s.as_str() == k));
                    filter.set(next);
                },
            }

            if visible.is_empty() {
                EmptyState {
                    title: "No entries".to_string(),
                    description: Some("Nothing to show for this filter.".to_string()),
                }
            }

            for entry in visible {
                Card { key: "{entry.id}",
                    CardHeader {
                        div { class: "list-row-heading",
                            CardTitle { {entry.date.format("%A, %d %b %Y").to_string()} }
                            EntryBadge { status: entry.status }
                        }
                    }
                    CardContent {
                        p { "{entry.description}" }
                        p { class: "muted", "{entry.hours} hours" }
                        if let Some(artifacts) = entry.artifacts.clone() {
                            p { class: "muted", "Artifacts: {artifacts}" }
                        }
                        if let Some(comment) = entry.verifier_comments.clone() {
                            p { class: "entry-comment", "Your comment: {comment}" }
                        }
                        if entry.status == EntryStatus::Submitted {
                            Textarea {
                                label: "Comment (optional)".to_string(),
                                rows: 2,
                                value: comments.read().get(&entry.id).cloned().unwrap_or_default(),
                                on_input: move |e: FormEvent| {
                                    comments.write().insert(entry.id, e.value());
                                },
                            }
                        }
                    }
                    if entry.status == EntryStatus::Submitted {
                        CardFooter {
                            div { class: "form-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Small,
                                    onclick: move |_| review(entry.id, Review::RequestChanges),
                                    "Request Changes"
                                }
                                Button {
                                    size: ButtonSize::Small,
                                    onclick: move |_| review(entry.id, Review::Verify),
                                    "Verify"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
