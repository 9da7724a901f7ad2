use dioxus::prelude::*;
use shared_types::{catalog, teacher, AppError, NewPublication, Publication, PublicationSort};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardHeader, CardTitle, EmptyState, FormSelect, Input, PageHeader,
    StatCard,
};

use super::use_teacher_id;
use crate::components::{FixtureError, RecordNotFound};
use crate::notify;

fn field_error(errors: &Option<AppError>, field: &str) -> Option<String> {
    errors.as_ref().and_then(|e| e.field(field)).map(String::from)
}

fn sort_options() -> Vec<(String, String)> {
    PublicationSort::ALL
        .iter()
        .map(|s| (s.key().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn TeacherPublications() -> Element {
    let teacher_id = use_teacher_id();
    let toast = use_toast();

    let mut publications = use_signal(move || {
        catalog()
            .ok()
            .and_then(|f| f.teacher(teacher_id))
            .map(|t| t.publications.clone())
            .unwrap_or_default()
    });
    let mut query = use_signal(String::new);
    let mut sort = use_signal(PublicationSort::default);
    let mut form = use_signal(NewPublication::default);
    let mut errors = use_signal(|| Option::<AppError>::None);
    let mut show_form = use_signal(|| false);

    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    if fixtures.teacher(teacher_id).is_none() {
        return rsx! { RecordNotFound { what: "Teacher".to_string() } };
    }

    let visible: Vec<Publication> = teacher::search_and_sort(&publications.read(), &query(), sort());
    let total_citations: u32 = publications.read().iter().map(|p| p.citations).sum();
    let count = publications.read().len();
    let current_errors = errors();

    let add_publication = move |_: MouseEvent| {
        let result = teacher::add(&mut publications.write(), &form());
        match result {
            Ok(_) => {
                form.set(NewPublication::default());
                errors.set(None);
                show_form.set(false);
                notify::success(toast, "Publication added successfully!");
            }
            Err(e) => {
                notify::failure(toast, &e);
                errors.set(Some(e));
            }
        }
    };

    let mut delete = move |id: i64| match teacher::remove(&mut publications.write(), id) {
        Ok(_) => notify::success(toast, "Publication deleted successfully!"),
        Err(e) => notify::failure(toast, &e),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Publications".to_string(),
                description: Some("Research output listed on your APAR record.".to_string()),
                Button {
                    onclick: move |_| {
                        let open = show_form();
                        show_form.set(!open);
                        errors.set(None);
                    },
                    if show_form() { "Cancel" } else { "Add Publication" }
                }
            }

            div { class: "stat-grid",
                StatCard { title: "Publications".to_string(), value: count.to_string() }
                StatCard { title: "Total Citations".to_string(), value: total_citations.to_string() }
            }

            if show_form() {
                Card {
                    CardHeader {
                        CardTitle { "Add Publication" }
                        CardDescription { "Title, journal and year are required." }
                    }
                    CardContent {
                        div { class: "form-grid",
                            Input {
                                label: "Title".to_string(),
                                value: form().title,
                                error: field_error(&current_errors, "title"),
                                on_input: move |e: FormEvent| form.write().title = e.value(),
                            }
                            Input {
                                label: "Journal".to_string(),
                                value: form().journal,
                                error: field_error(&current_errors, "journal"),
                                on_input: move |e: FormEvent| form.write().journal = e.value(),
                            }
                            Input {
                                label: "Year".to_string(),
                                input_type: "number".to_string(),
                                value: form().year,
                                error: field_error(&current_errors, "year"),
                                on_input: move |e: FormEvent| form.write().year = e.value(),
                            }
                            Input {
                                label: "Link (optional)".to_string(),
                                placeholder: "https://".to_string(),
                                value: form().link,
                                on_input: move |e: FormEvent| form.write().link = e.value(),
                            }
                        }
                        Input {
                            label: "Co-authors".to_string(),
                            placeholder: "Comma separated".to_string(),
                            value: form().co_authors,
                            on_input: move |e: FormEvent| form.write().co_authors = e.value(),
                        }
                    }
                    CardFooter {
                        div { class: "form-actions",
                            Button { onclick: add_publication, "Save Publication" }
                        }
                    }
                }
            }

            div { class: "filters-row",
                Input {
                    placeholder: "Search by title or journal".to_string(),
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
                FormSelect {
                    value: sort().key().to_string(),
                    options: sort_options(),
                    onchange: move |key: String| sort.set(PublicationSort::from_key(&key)),
                }
            }

            if visible.is_empty() {
                EmptyState {
                    title: "No publications".to_string(),
                    description: Some("Add one or adjust your search.".to_string()),
                }
            }

            ul { class: "list-rows",
                for publication in visible {
                    li { key: "{publication.id}", class: "list-row",
                        div { class: "list-row-main",
                            span { class: "list-row-title", "{publication.title}" }
                            span { class: "muted", "{publication.journal} · {publication.year}" }
                            if !publication.co_authors.is_empty() {
                                span { class: "muted", {format!("With {}", publication.co_authors.join(", "))} }
                            }
                            if let Some(link) = publication.link.clone() {
                                a { class: "text-link", href: "{link}", target: "_blank", "View" }
                            }
                        }
                        div { class: "list-row-meta",
                            Badge { variant: BadgeVariant::Secondary, "{publication.citations} citations" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                onclick: move |_| delete(publication.id),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
