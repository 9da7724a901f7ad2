use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdBriefcase, LdCalendar, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{catalog, logbook, EntryStatus, SemesterProgress};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, CardTone, EmptyState, PageHeader, ProgressBar, StatCard, Timeline, TimelineItem,
    TimelineStatus, Trend,
};

use super::use_student_id;
use crate::components::{EntryBadge, FixtureError, RecordNotFound};
use crate::routes::Route;

/// Change between the last two semesters, in percent of the earlier CGPA.
fn semester_trend(progress: &[SemesterProgress]) -> Option<Trend> {
    let [.., previous, latest] = progress else {
        return None;
    };
    if previous.cgpa <= 0.0 {
        return None;
    }
    let value = (latest.cgpa - previous.cgpa) / previous.cgpa * 100.0;
    Some(Trend {
        value,
        is_positive: value >= 0.0,
    })
}

#[component]
pub fn StudentDashboard() -> Element {
    let student_id = use_student_id();

    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(student) = fixtures.student(student_id) else {
        return rsx! { RecordNotFound { what: "Student".to_string() } };
    };

    let entries = fixtures.logbook_for(student_id);
    let hours = logbook::total_hours(&entries);
    let verified = logbook::count_by_status(&entries, EntryStatus::Verified);
    let recent: Vec<_> = logbook::sorted_recent_first(&entries)
        .into_iter()
        .take(3)
        .collect();
    let trend = semester_trend(&student.progress);

    let today = Local::now().date_naive();
    let mentor = student.mentorship.as_ref().map(|m| {
        let name = fixtures
            .teacher(m.mentor_id)
            .map_or_else(|| "Your mentor".to_string(), |t| t.name.clone());
        let status = if m.next_meeting < today {
            TimelineStatus::Completed
        } else if m.next_meeting == today {
            TimelineStatus::Current
        } else {
            TimelineStatus::Upcoming
        };
        TimelineItem {
            title: format!("Mentorship meeting with {name}"),
            date: m.next_meeting.format("%d %b %Y").to_string(),
            status,
            description: (!m.notes.is_empty()).then(|| m.notes.clone()),
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: format!("Welcome back, {}", student.name),
                description: Some(format!("{} · Year {}", student.department, student.year)),
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::StudentLogbook {});
                    },
                    "Open Logbook"
                }
            }

            div { class: "stat-grid",
                StatCard {
                    title: "CGPA".to_string(),
                    value: format!("{:.2}", student.cgpa),
                    description: Some(format!("Class rank: {}", student.class_rank_label())),
                    trend: trend,
                    icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Attendance".to_string(),
                    value: format!("{:.0}%", student.attendance),
                    tone: if student.attendance >= 75.0 { CardTone::Success } else { CardTone::Warning },
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Active Internships".to_string(),
                    value: student.active_internships.to_string(),
                    tone: CardTone::Secondary,
                    icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Logged Hours".to_string(),
                    value: hours.to_string(),
                    description: Some(format!("{verified} entries verified")),
                    tone: CardTone::Plain,
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        CardTitle { "Academic Progress" }
                        CardDescription { "CGPA by semester" }
                    }
                    CardContent {
                        for point in student.progress.iter() {
                            ProgressBar {
                                key: "{point.semester}",
                                value: point.cgpa * 10.0,
                                label: Some(format!("{} · {:.2}", point.semester, point.cgpa)),
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Skills" }
                        CardDescription { "Self-assessed proficiency" }
                    }
                    CardContent {
                        for skill in student.skills.iter() {
                            ProgressBar {
                                key: "{skill.name}",
                                value: f64::from(skill.level),
                                label: Some(skill.name.clone()),
                            }
                        }
                    }
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        CardTitle { "Recent Logbook Entries" }
                    }
                    CardContent {
                        if recent.is_empty() {
                            EmptyState {
                                title: "No entries yet".to_string(),
                                description: Some("Log your first internship day from the Logbook page.".to_string()),
                            }
                        }
                        ul { class: "list-rows",
                            for entry in recent {
                                li { key: "{entry.id}", class: "list-row",
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", {entry.date.format("%d %b %Y").to_string()} }
                                        span { class: "muted", "{entry.description}" }
                                    }
                                    div { class: "list-row-meta",
                                        span { class: "muted", "{entry.hours} h" }
                                        EntryBadge { status: entry.status }
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Badges & Mentorship" }
                    }
                    CardContent {
                        div { class: "chip-row",
                            for badge in student.badges_earned.iter() {
                                div { key: "{badge.id}", class: "badge-tile", title: "{badge.description}",
                                    Badge { variant: BadgeVariant::Secondary, "{badge.name}" }
                                    span { class: "muted", {badge.date_earned.format("%b %Y").to_string()} }
                                }
                            }
                        }
                        match mentor {
                            Some(item) => rsx! { Timeline { items: vec![item] } },
                            None => rsx! { p { class: "muted", "No mentor assigned yet." } },
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(semester: &str, cgpa: f64) -> SemesterProgress {
        SemesterProgress {
            semester: semester.into(),
            cgpa,
        }
    }

    #[test]
    fn trend_compares_last_two_semesters() {
        let trend = semester_trend(&[point("Sem 1", 7.0), point("Sem 2", 8.0), point("Sem 3", 7.6)])
            .unwrap();
        assert!(!trend.is_positive);
        assert!((trend.value + 5.0).abs() < 1e-9);
    }

    #[test]
    fn trend_needs_two_points() {
        assert_eq!(semester_trend(&[point("Sem 1", 8.0)]), None);
        assert_eq!(semester_trend(&[]), None);
    }
}
