use dioxus::prelude::*;
use shared_types::{catalog, student, Student};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, EmptyState, Input, PageHeader, ProgressBar,
    UserAvatar,
};

use super::use_teacher_id;
use crate::components::{FixtureError, RecordNotFound};
use crate::routes::Route;

/// Mentee list with search and a CGPA distribution.
#[component]
pub fn TeacherStudents() -> Element {
    let teacher_id = use_teacher_id();
    let mut query = use_signal(String::new);

    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(teacher) = fixtures.teacher(teacher_id) else {
        return rsx! { RecordNotFound { what: "Teacher".to_string() } };
    };

    let mentees: Vec<Student> = fixtures.mentees(teacher).into_iter().cloned().collect();
    let bands = student::cgpa_bands(&mentees);
    let visible: Vec<Student> = student::search(&mentees, &query())
        .into_iter()
        .cloned()
        .collect();

    let band_rows = [
        ("Outstanding (9.0+)", bands.outstanding),
        ("Excellent (8.0 to 9.0)", bands.excellent),
        ("Good (7.0 to 8.0)", bands.good),
        ("Below 7.0", bands.below),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "My Students".to_string(),
                description: Some(format!("{} mentees", mentees.len())),
            }

            Card {
                CardHeader {
                    CardTitle { "CGPA Distribution" }
                }
                CardContent {
                    for (label, count) in band_rows {
                        ProgressBar {
                            key: "{label}",
                            value: f64::from(bands.percent(count)),
                            label: Some(format!("{label}: {count}")),
                        }
                    }
                }
            }

            div { class: "filters-row",
                Input {
                    placeholder: "Search by name or department".to_string(),
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
            }

            if visible.is_empty() {
                EmptyState {
                    title: "No students found".to_string(),
                    description: Some("Try a different name or department.".to_string()),
                }
            }

            div { class: "card-grid",
                for s in visible {
                    Link { key: "{s.id}", to: Route::TeacherStudentDetail { id: s.id.to_string() },
                        Card { class: "clickable-card",
                            CardContent {
                                div { class: "person-row",
                                    UserAvatar { initials: s.initial() }
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", "{s.name}" }
                                        span { class: "muted", "{s.department} · Year {s.year}" }
                                    }
                                }
                                dl { class: "detail-grid",
                                    dt { "CGPA" }
                                    dd { {format!("{:.2}", s.cgpa)} }
                                    dt { "Attendance" }
                                    dd { {format!("{:.0}%", s.attendance)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
