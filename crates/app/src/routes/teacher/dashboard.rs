use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdClock, LdFileText, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{catalog, logbook, student, Fixtures, Teacher};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone, EmptyState, PageHeader,
    StatCard, Timeline, TimelineItem, TimelineStatus,
};

use super::use_teacher_id;
use crate::components::{FixtureError, RecordNotFound};
use crate::routes::Route;

const PENDING_PREVIEW: usize = 5;

/// A submitted entry in the review queue preview.
#[derive(Debug, Clone, PartialEq)]
struct PendingRow {
    entry_id: i64,
    student_id: i64,
    name: String,
    date: String,
    hours: u32,
}

fn pending_preview(fixtures: &Fixtures, teacher: &Teacher) -> Vec<PendingRow> {
    logbook::pending_for(&fixtures.logbook, &teacher.students)
        .into_iter()
        .take(PENDING_PREVIEW)
        .map(|e| PendingRow {
            entry_id: e.id,
            student_id: e.student_id,
            name: fixtures
                .student(e.student_id)
                .map_or_else(|| format!("Student {}", e.student_id), |s| s.name.clone()),
            date: e.date.format("%d %b %Y").to_string(),
            hours: e.hours,
        })
        .collect()
}

#[component]
pub fn TeacherDashboard() -> Element {
    let teacher_id = use_teacher_id();

    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(teacher) = fixtures.teacher(teacher_id) else {
        return rsx! { RecordNotFound { what: "Teacher".to_string() } };
    };

    let mentees = fixtures.mentees(teacher);
    let attention = student::needs_attention(mentees.iter().copied());
    let pending_count = logbook::pending_for(&fixtures.logbook, &teacher.students).len();
    let preview = pending_preview(fixtures, teacher);

    let today = Local::now().date_naive();
    let meetings: Vec<TimelineItem> = student::upcoming_meetings(mentees.iter().copied(), today)
        .into_iter()
        .map(|(s, date)| TimelineItem {
            title: format!("Meeting with {}", s.name),
            date: date.format("%d %b %Y").to_string(),
            status: if date == today {
                TimelineStatus::Current
            } else {
                TimelineStatus::Upcoming
            },
            description: s
                .mentorship
                .as_ref()
                .map(|m| m.notes.clone())
                .filter(|n| !n.is_empty()),
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: format!("Welcome, {}", teacher.name),
                description: Some(format!("{} · {}", teacher.position, teacher.department)),
            }

            div { class: "stat-grid",
                StatCard {
                    title: "My Students".to_string(),
                    value: mentees.len().to_string(),
                    description: Some(format!("{} mentored in total", teacher.students_mentored)),
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Pending Verifications".to_string(),
                    value: pending_count.to_string(),
                    tone: if pending_count > 0 { CardTone::Warning } else { CardTone::Success },
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Publications".to_string(),
                    value: teacher.publications.len().to_string(),
                    description: Some(format!("{} citations", teacher.total_citations())),
                    tone: CardTone::Secondary,
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Average Feedback".to_string(),
                    value: format!("{:.1} / 5", teacher.avg_feedback),
                    description: Some(format!("{attention} students need attention")),
                    tone: CardTone::Plain,
                    icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        CardTitle { "Logbooks Awaiting Review" }
                        CardDescription { "Submitted entries from your mentees" }
                    }
                    CardContent {
                        if preview.is_empty() {
                            EmptyState { title: "All caught up".to_string() }
                        }
                        ul { class: "list-rows",
                            for row in preview {
                                li { key: "{row.entry_id}", class: "list-row",
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", "{row.name}" }
                                        span { class: "muted", "{row.date} · {row.hours} h" }
                                    }
                                    Link {
                                        to: Route::TeacherStudentLogbook { id: row.student_id.to_string() },
                                        class: "text-link",
                                        "Review"
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Upcoming Mentorship Meetings" }
                    }
                    CardContent {
                        if meetings.is_empty() {
                            p { class: "muted", "No meetings scheduled." }
                        } else {
                            Timeline { items: meetings }
                        }
                    }
                }
            }
        }
    }
}
