use dioxus::prelude::*;
use shared_types::{catalog, logbook, student, AppError, EntryStatus, Student};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Input, PageHeader, ProgressBar, StatCard, Textarea,
    UserAvatar,
};

use super::{parse_student_id, use_teacher_id};
use crate::components::{FixtureError, RecordNotFound};
use crate::notify;
use crate::routes::Route;

/// `YYYY-MM-DD` value for the meeting date picker, empty without a mentorship.
fn meeting_input_value(student: &Student) -> String {
    student
        .mentorship
        .as_ref()
        .map(|m| m.next_meeting.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn mentorship_notes(student: &Student) -> String {
    student
        .mentorship
        .as_ref()
        .map(|m| m.notes.clone())
        .unwrap_or_default()
}

#[component]
pub fn TeacherStudentDetail(id: String) -> Element {
    let teacher_id = use_teacher_id();
    let toast = use_toast();

    let sid = parse_student_id(&id);
    let mut record = use_signal(move || {
        catalog()
            .ok()
            .zip(sid)
            .and_then(|(f, sid)| f.student(sid).cloned())
    });
    let mut notes = use_signal(|| record.peek().as_ref().map(mentorship_notes).unwrap_or_default());
    let mut meeting_date =
        use_signal(|| record.peek().as_ref().map(meeting_input_value).unwrap_or_default());
    let mut meeting_error = use_signal(|| Option::<AppError>::None);

    let save_notes = move |_: MouseEvent| {
        let result = record
            .write()
            .as_mut()
            .map(|s| student::update_notes(s, &notes()));
        match result {
            Some(Ok(())) => notify::success(toast, "Mentorship notes updated successfully"),
            Some(Err(e)) => notify::failure(toast, &e),
            None => {}
        }
    };

    let schedule = move |_: MouseEvent| {
        let result = record
            .write()
            .as_mut()
            .map(|s| student::schedule_meeting(s, teacher_id, &meeting_date()));
        match result {
            Some(Ok(_)) => {
                meeting_error.set(None);
                notify::success(toast, "Mentorship meeting scheduled successfully");
            }
            Some(Err(e)) => {
                notify::failure(toast, &e);
                meeting_error.set(Some(e));
            }
            None => {}
        }
    };

    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(student) = record.read().clone() else {
        return rsx! { RecordNotFound { what: "Student".to_string() } };
    };
    let meeting_field_error = meeting_error
        .read()
        .as_ref()
        .and_then(|e| e.field("meeting_date"))
        .map(String::from);
    let meeting_summary = match student.mentorship.as_ref() {
        Some(m) => format!("Next meeting {}", m.next_meeting.format("%d %b %Y")),
        None => "No meeting scheduled".to_string(),
    };

    let entries = fixtures.logbook_for(student.id);
    let hours = logbook::total_hours(&entries);
    let pending = logbook::count_by_status(&entries, EntryStatus::Submitted);
    let student_id = student.id;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            Link { to: Route::TeacherStudents {}, class: "text-link", "\u{2190} Back to My Students" }

            PageHeader {
                title: student.name.clone(),
                description: Some(format!("{} · Year {}", student.department, student.year)),
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::TeacherStudentLogbook { id: student_id.to_string() });
                    },
                    "View Logbook"
                }
            }

            div { class: "stat-grid",
                StatCard { title: "CGPA".to_string(), value: format!("{:.2}", student.cgpa) }
                StatCard { title: "Attendance".to_string(), value: format!("{:.0}%", student.attendance) }
                StatCard { title: "Class Rank".to_string(), value: student.class_rank_label() }
                StatCard {
                    title: "Logbook Hours".to_string(),
                    value: hours.to_string(),
                    description: Some(format!("{pending} awaiting your review")),
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        div { class: "person-row",
                            UserAvatar { initials: student.initial(), large: true }
                            div {
                                CardTitle { "Profile" }
                                CardDescription { "Aadhaar {student.aadhar_masked}" }
                            }
                        }
                    }
                    CardContent {
                        dl { class: "detail-grid",
                            dt { "Department" }
                            dd { "{student.department}" }
                            dt { "Year" }
                            dd { "{student.year}" }
                            dt { "Active internships" }
                            dd { "{student.active_internships}" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Academic Progress" }
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
            }

            Card {
                CardHeader {
                    CardTitle { "Mentorship" }
                    CardDescription { "{meeting_summary}" }
                }
                CardContent {
                    div { class: "page-grid-2",
                        div { class: "form-stack",
                            Textarea {
                                label: "Mentorship notes".to_string(),
                                placeholder: "Goals, progress and follow-ups".to_string(),
                                value: notes(),
                                disabled: student.mentorship.is_none(),
                                on_input: move |e: FormEvent| notes.set(e.value()),
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: student.mentorship.is_none(),
                                onclick: save_notes,
                                "Save Notes"
                            }
                        }
                        div { class: "form-stack",
                            Input {
                                label: "Next meeting".to_string(),
                                input_type: "date".to_string(),
                                value: meeting_date(),
                                error: meeting_field_error,
                                on_input: move |e: FormEvent| meeting_date.set(e.value()),
                            }
                            Button { onclick: schedule, "Schedule Meeting" }
                        }
                    }
                }
                CardFooter {
                    span { class: "muted",
                        "Changes are kept for this session only."
                    }
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        CardTitle { "Skills" }
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

                Card {
                    CardHeader {
                        CardTitle { "Badges" }
                    }
                    CardContent {
                        if student.badges_earned.is_empty() {
                            p { class: "muted", "No badges yet." }
                        }
                        ul { class: "list-rows",
                            for badge in student.badges_earned.iter() {
                                li { key: "{badge.id}", class: "list-row",
                                    div { class: "list-row-main",
                                        Badge { variant: BadgeVariant::Secondary, "{badge.name}" }
                                        span { class: "muted", "{badge.description}" }
                                    }
                                    span { class: "muted", {badge.date_earned.format("%d %b %Y").to_string()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
