use dioxus::prelude::*;
use shared_types::{catalog, AppError, PortalSettings, ProfileForm, Role};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Input, PageHeader, Textarea, UserAvatar,
};

use crate::auth::use_session;
use crate::components::{FixtureError, RecordNotFound};
use crate::notify;

/// Label/value pairs rendered as a definition list.
#[component]
fn DetailList(rows: Vec<(&'static str, String)>) -> Element {
    rsx! {
        dl { class: "detail-grid",
            for (label, value) in rows {
                dt { "{label}" }
                dd { "{value}" }
            }
        }
    }
}

fn field_error(errors: &Option<AppError>, field: &str) -> Option<String> {
    errors.as_ref().and_then(|e| e.field(field)).map(String::from)
}

#[component]
pub fn StudentProfile() -> Element {
    rsx! { MyProfile {} }
}

#[component]
pub fn TeacherProfile() -> Element {
    rsx! { MyProfile {} }
}

#[component]
pub fn InstitutionProfile() -> Element {
    rsx! { MyProfile {} }
}

/// Profile of whoever is signed in. Every profile route opens this page, so
/// the record shown follows the session role rather than the URL.
#[component]
fn MyProfile() -> Element {
    let Some(session) = use_session() else {
        return rsx! {};
    };
    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let initial = ProfileForm::for_session(&session, fixtures);
    let role_key = session.role.as_str();
    let record = match session.role {
        Role::Student => rsx! { StudentRecord { user_id: session.user_id } },
        Role::Teacher => rsx! { TeacherRecord { user_id: session.user_id } },
        Role::Institution => rsx! { InstitutionRecord {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Your Profile".to_string(),
                description: Some("Manage your personal information and account settings".to_string()),
            }

            EditProfile { key: "{role_key}", initial }

            {record}
        }
    }
}

/// Editable personal details. Saved values stay in page state.
#[component]
fn EditProfile(initial: ProfileForm) -> Element {
    let toast = use_toast();
    let seed = initial.clone();
    let mut form = use_signal(|| initial);
    let mut errors = use_signal(|| Option::<AppError>::None);

    let save = move |_: MouseEvent| match form().validate() {
        Ok(cleaned) => {
            form.set(cleaned);
            errors.set(None);
            notify::success(toast, "Profile updated successfully!");
        }
        Err(e) => {
            notify::failure(toast, &e);
            errors.set(Some(e));
        }
    };

    let reset = move |_: MouseEvent| {
        form.set(seed.clone());
        errors.set(None);
    };

    let current = form();
    let current_errors = errors();
    let initial_letter = current.name.chars().next().map(String::from).unwrap_or_default();

    rsx! {
        Card {
            CardHeader {
                div { class: "person-row",
                    UserAvatar { initials: initial_letter, large: true }
                    div {
                        CardTitle { "Personal Information" }
                        CardDescription { "{current.email}" }
                    }
                }
            }
            CardContent {
                div { class: "form-grid",
                    Input {
                        label: "Full Name".to_string(),
                        value: current.name.clone(),
                        error: field_error(&current_errors, "name"),
                        on_input: move |e: FormEvent| form.write().name = e.value(),
                    }
                    Input {
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        value: current.email.clone(),
                        error: field_error(&current_errors, "email"),
                        on_input: move |e: FormEvent| form.write().email = e.value(),
                    }
                    Input {
                        label: "Phone".to_string(),
                        input_type: "tel".to_string(),
                        value: current.phone.clone(),
                        error: field_error(&current_errors, "phone"),
                        on_input: move |e: FormEvent| form.write().phone = e.value(),
                    }
                    Input {
                        label: "Address".to_string(),
                        value: current.address.clone(),
                        on_input: move |e: FormEvent| form.write().address = e.value(),
                    }
                }
                Textarea {
                    label: "Bio".to_string(),
                    value: current.bio.clone(),
                    on_input: move |e: FormEvent| form.write().bio = e.value(),
                }
            }
            CardFooter {
                div { class: "form-actions",
                    Button { variant: ButtonVariant::Outline, onclick: reset, "Reset" }
                    Button { onclick: save, "Save Changes" }
                }
            }
        }
    }
}

#[component]
fn StudentRecord(user_id: i64) -> Element {
    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(student) = fixtures.student(user_id) else {
        return rsx! { RecordNotFound { what: "Student".to_string() } };
    };

    let identity = vec![
        ("Aadhaar", student.aadhar_masked.clone()),
        ("Department", student.department.clone()),
        ("Year", student.year.to_string()),
    ];
    let academic = vec![
        ("CGPA", format!("{:.2}", student.cgpa)),
        ("Attendance", format!("{:.0}%", student.attendance)),
        ("Class rank", student.class_rank_label()),
        ("Active internships", student.active_internships.to_string()),
    ];
    let mentor = student
        .mentorship
        .as_ref()
        .and_then(|m| fixtures.teacher(m.mentor_id))
        .map(|t| t.name.clone());

    rsx! {
        div { class: "page-grid-2",
            Card {
                CardHeader { CardTitle { "Identity" } }
                CardContent { DetailList { rows: identity } }
            }
            Card {
                CardHeader { CardTitle { "Academic Record" } }
                CardContent {
                    DetailList { rows: academic }
                    if let Some(name) = mentor {
                        p { class: "muted", "Mentor: {name}" }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Skills & Badges" } }
            CardContent {
                div { class: "chip-row",
                    for skill in student.skills.iter() {
                        Badge { key: "{skill.name}", variant: BadgeVariant::Outline,
                            "{skill.name} · {skill.level}%"
                        }
                    }
                }
                div { class: "chip-row",
                    for badge in student.badges_earned.iter() {
                        Badge { key: "{badge.id}", variant: BadgeVariant::Secondary, "{badge.name}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TeacherRecord(user_id: i64) -> Element {
    let fixtures = match catalog() {
        Ok(f) => f,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };
    let Some(teacher) = fixtures.teacher(user_id) else {
        return rsx! { RecordNotFound { what: "Teacher".to_string() } };
    };

    let appointment = vec![
        ("APAR ID", teacher.apar_id.clone()),
        ("Position", teacher.position.clone()),
        ("Department", teacher.department.clone()),
    ];
    let record = vec![
        ("Current mentees", teacher.students.len().to_string()),
        ("Students mentored", teacher.students_mentored.to_string()),
        ("Average feedback", format!("{:.1} / 5", teacher.avg_feedback)),
        ("Publications", teacher.publications.len().to_string()),
        ("Citations", teacher.total_citations().to_string()),
    ];

    rsx! {
        div { class: "page-grid-2",
            Card {
                CardHeader { CardTitle { "Appointment" } }
                CardContent { DetailList { rows: appointment } }
            }
            Card {
                CardHeader { CardTitle { "Teaching Record" } }
                CardContent { DetailList { rows: record } }
            }
        }
    }
}

#[component]
fn InstitutionRecord() -> Element {
    let portal: PortalSettings = use_context();
    let institution = match catalog() {
        Ok(f) => &f.institution,
        Err(e) => return rsx! { FixtureError { message: e.friendly_message() } },
    };

    let overview = vec![
        ("Code", portal.institution_code.clone()),
        ("Name", institution.full_name.clone()),
        ("Location", institution.location.clone()),
        ("NIRF rank", institution.nirf_rank.to_string()),
    ];
    let strength = vec![
        ("Students", institution.total_students.to_string()),
        ("Faculty", institution.total_teachers.to_string()),
        ("Departments", institution.departments.len().to_string()),
        ("Placement rate", format!("{:.1}%", institution.placement_rate)),
    ];

    rsx! {
        div { class: "page-grid-2",
            Card {
                CardHeader { CardTitle { "Overview" } }
                CardContent { DetailList { rows: overview } }
            }
            Card {
                CardHeader { CardTitle { "Strength" } }
                CardContent { DetailList { rows: strength } }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Government Schemes" }
                CardDescription { "{institution.active_govt_schemes} active" }
            }
            CardContent {
                div { class: "chip-row",
                    for scheme in institution.schemes.iter() {
                        Badge { key: "{scheme.id}", variant: BadgeVariant::Outline, "{scheme.name}" }
                    }
                }
            }
        }
    }
}
