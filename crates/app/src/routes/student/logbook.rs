use dioxus::prelude::*;
use shared_types::{catalog, logbook, AppError, EntryStatus, LogbookEntry, NewEntry};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, CardTone, EmptyState, Input, PageHeader, Segmented, StatCard, Textarea,
};

use super::use_student_id;
use crate::components::{EntryBadge, FixtureError};
use crate::notify;

const REPORT_FILE_NAME: &str = "logbook-report.csv";

/// `data:` URL carrying the CSV report, so the browser saves it without a
/// server round trip.
fn report_href(entries: &[LogbookEntry]) -> String {
    use base64::Engine as _;
    let encoded = base64::engine::general_purpose::STANDARD.encode(logbook::report_csv(entries));
    format!("data:text/csv;base64,{encoded}")
}

fn status_from_key(key: &str) -> Option<EntryStatus> {
    EntryStatus::ALL.into_iter().find(|s| s.as_str() == key)
}

fn field_error(errors: &Option<AppError>, field: &str) -> Option<String> {
    errors.as_ref().and_then(|e| e.field(field)).map(String::from)
}

/// Internship logbook: daily entries, drafts and their review status.
#[component]
pub fn StudentLogbook() -> Element {
    let student_id = use_student_id();
    let toast = use_toast();

    let mut entries = use_signal(|| {
        catalog()
            .map(|f| f.logbook.clone())
            .unwrap_or_default()
    });
    let mut form = use_signal(NewEntry::default);
    let mut errors = use_signal(|| Option::<AppError>::None);
    let mut show_form = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| Option::<EntryStatus>::None);

    if let Err(e) = catalog() {
        return rsx! { FixtureError { message: e.friendly_message() } };
    }

    let mine: Vec<LogbookEntry> = entries
        .read()
        .iter()
        .filter(|e| e.student_id == student_id)
        .cloned()
        .collect();
    let total_hours = logbook::total_hours(&mine);
    let verified = logbook::count_by_status(&mine, EntryStatus::Verified);
    let pending = logbook::count_by_status(&mine, EntryStatus::Submitted);
    let drafts = logbook::count_by_status(&mine, EntryStatus::Draft);

    let sorted = logbook::sorted_recent_first(&mine);
    let visible: Vec<LogbookEntry> = logbook::filter(&sorted, &query(), status())
        .into_iter()
        .cloned()
        .collect();

    let mut reset_form = move || {
        form.set(NewEntry::default());
        errors.set(None);
        show_form.set(false);
    };

    let submit_entry = move |_: MouseEvent| {
        let result = logbook::submit(&mut entries.write(), student_id, &form());
        match result {
            Ok(_) => {
                reset_form();
                notify::success(toast, "Logbook entry submitted successfully!");
            }
            Err(e) => {
                notify::failure(toast, &e);
                errors.set(Some(e));
            }
        }
    };

    let save_draft = move |_: MouseEvent| {
        let result = logbook::save_draft(&mut entries.write(), student_id, &form());
        match result {
            Ok(_) => {
                reset_form();
                notify::info(toast, "Logbook entry saved as draft");
            }
            Err(e) => {
                notify::failure(toast, &e);
                errors.set(Some(e));
            }
        }
    };

    let mut submit_existing_draft = move |id: i64| {
        let result = match entries.write().iter_mut().find(|e| e.id == id) {
            Some(entry) => logbook::submit_draft(entry),
            None => Err(AppError::not_found(format!("Entry {id} not found"))),
        };
        match result {
            Ok(()) => notify::success(toast, "Draft submitted for review"),
            Err(e) => notify::failure(toast, &e),
        }
    };

    let status_options: Vec<(String, String)> = EntryStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let current_errors = errors();
    let min_len = logbook::MIN_DESCRIPTION_LEN;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Internship Logbook".to_string(),
                description: Some("Record daily work for your mentor to verify.".to_string()),
                a {
                    class: "button",
                    "data-style": "outline",
                    "data-size": "default",
                    href: report_href(&mine),
                    download: REPORT_FILE_NAME,
                    onclick: move |_| notify::success(toast, "Report downloaded successfully!"),
                    "Download Report"
                }
                Button {
                    onclick: move |_| {
                        let open = show_form();
                        show_form.set(!open);
                    },
                    if show_form() { "Close" } else { "New Entry" }
                }
            }

            div { class: "stat-grid",
                StatCard { title: "Total Hours".to_string(), value: total_hours.to_string() }
                StatCard {
                    title: "Verified".to_string(),
                    value: verified.to_string(),
                    tone: CardTone::Success,
                }
                StatCard {
                    title: "Pending Review".to_string(),
                    value: pending.to_string(),
                    tone: CardTone::Warning,
                }
                StatCard {
                    title: "Drafts".to_string(),
                    value: drafts.to_string(),
                    tone: CardTone::Plain,
                }
            }

            if show_form() {
                Card {
                    CardHeader {
                        CardTitle { "New Logbook Entry" }
                        CardDescription {
                            "Descriptions need at least {min_len} characters before submitting."
                        }
                    }
                    CardContent {
                        div { class: "form-grid",
                            Input {
                                label: "Date".to_string(),
                                input_type: "date".to_string(),
                                value: form().date,
                                error: field_error(&current_errors, "date"),
                                on_input: move |e: FormEvent| form.write().date = e.value(),
                            }
                            Input {
                                label: "Hours Spent".to_string(),
                                input_type: "number".to_string(),
                                placeholder: "e.g. 6".to_string(),
                                value: form().hours,
                                error: field_error(&current_errors, "hours"),
                                on_input: move |e: FormEvent| form.write().hours = e.value(),
                            }
                        }
                        Textarea {
                            label: "Description".to_string(),
                            placeholder: "What did you work on today?".to_string(),
                            value: form().description,
                            error: field_error(&current_errors, "description"),
                            on_input: move |e: FormEvent| form.write().description = e.value(),
                        }
                        Input {
                            label: "Artifacts (optional)".to_string(),
                            placeholder: "Links to code, documents or screenshots".to_string(),
                            value: form().artifacts,
                            on_input: move |e: FormEvent| form.write().artifacts = e.value(),
                        }
                    }
                    CardFooter {
                        div { class: "form-actions",
                            Button { variant: ButtonVariant::Outline, onclick: save_draft, "Save Draft" }
                            Button { onclick: submit_entry, "Submit Entry" }
                        }
                    }
                }
            }

            div { class: "filters-row",
                Input {
                    placeholder: "Search by description or date".to_string(),
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
                Segmented {
                    options: status_options,
                    value: status().map(|s| s.as_str().to_string()),
                    allow_clear: true,
                    on_change: move |key: Option<String>| {
                        status.set(key.as_deref().and_then(status_from_key));
                    },
                }
            }

            if visible.is_empty() {
                EmptyState {
                    title: "No logbook entries".to_string(),
                    description: Some("Nothing matches the current filters.".to_string()),
                }
            }

            ul { class: "list-rows",
                for entry in visible {
                    li { key: "{entry.id}", class: "list-row entry-row",
                        div { class: "list-row-main",
                            div { class: "list-row-heading",
                                span { class: "list-row-title", {entry.date.format("%A, %d %b %Y").to_string()} }
                                EntryBadge { status: entry.status }
                            }
                            p { "{entry.description}" }
                            if let Some(artifacts) = entry.artifacts.clone() {
                                p { class: "muted", "Artifacts: {artifacts}" }
                            }
                            if let Some(comment) = entry.verifier_comments.clone() {
                                p { class: "entry-comment", "Mentor: {comment}" }
                            }
                        }
                        div { class: "list-row-meta",
                            span { class: "muted", "{entry.hours} h" }
                            if entry.status == EntryStatus::Draft {
                                Button {
                                    size: ButtonSize::Small,
                                    onclick: move |_| submit_existing_draft(entry.id),
                                    "Submit"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
