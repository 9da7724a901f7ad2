use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdScale, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{
    catalog, enrollment_growth, Institution, PortalSettings, ReportKind, DOWNLOAD_COMPLETE,
};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone,
    PageHeader, ProgressBar, StatCard, Trend,
};

use super::refresh::{use_live_institution, RefreshButton};
use crate::components::FixtureError;
use crate::notify;
use crate::timer::sleep_ms;

/// Format of the one-click NIRF export in the page header.
const QUICK_EXPORT_FORMAT: &str = "CSV";

fn growth_trend(institution: &Institution) -> Option<Trend> {
    enrollment_growth(institution).map(|value| Trend {
        value,
        is_positive: value >= 0.0,
    })
}

/// Largest yearly enrollment, used to scale the trend bars.
fn peak_enrollment(institution: &Institution) -> u32 {
    institution
        .enrollment_trend
        .iter()
        .map(|p| p.students)
        .max()
        .unwrap_or(0)
}

#[component]
pub fn InstitutionDashboard() -> Element {
    let live = use_live_institution();
    let toast = use_toast();
    let portal: PortalSettings = use_context();
    let download_delay = portal.download_delay_ms;

    let export_nirf = move |_: MouseEvent| {
        notify::success(toast, ReportKind::Nirf.export_message(QUICK_EXPORT_FORMAT));
        spawn(async move {
            sleep_ms(download_delay).await;
            notify::info(toast, DOWNLOAD_COMPLETE);
        });
    };

    if let Err(e) = catalog() {
        return rsx! { FixtureError { message: e.friendly_message() } };
    }
    let Some(current) = live.data.read().clone() else {
        return rsx! {};
    };
    let institution = &current;

    let peak = peak_enrollment(institution).max(1);
    let ratio = if institution.total_teachers == 0 {
        0.0
    } else {
        f64::from(institution.total_students) / f64::from(institution.total_teachers)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: institution.full_name.clone(),
                description: Some(format!("{} · NIRF rank {}", institution.location, institution.nirf_rank)),
                RefreshButton { live }
                Button { onclick: export_nirf, "Generate NIRF Report" }
            }

            div { class: "stat-grid",
                StatCard {
                    title: "Total Students".to_string(),
                    value: institution.total_students.to_string(),
                    trend: growth_trend(institution),
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Faculty".to_string(),
                    value: institution.total_teachers.to_string(),
                    description: Some(format!("{ratio:.1} students per teacher")),
                    tone: CardTone::Secondary,
                    icon: rsx! { Icon::<LdScale> { icon: LdScale, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Placement Rate".to_string(),
                    value: format!("{:.1}%", institution.placement_rate),
                    tone: CardTone::Success,
                    icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 } },
                }
                StatCard {
                    title: "Active Govt. Schemes".to_string(),
                    value: institution.active_govt_schemes.to_string(),
                    tone: CardTone::Plain,
                    icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 20, height: 20 } },
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        CardTitle { "Departments" }
                        CardDescription { "Strength and placement by department" }
                    }
                    CardContent {
                        ul { class: "list-rows",
                            for dept in institution.departments.iter() {
                                li { key: "{dept.name}", class: "list-row",
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", "{dept.name}" }
                                        span { class: "muted",
                                            {format!("{} students · {} faculty · {:.1}:1", dept.students, dept.teachers, dept.student_teacher_ratio())}
                                        }
                                    }
                                    span { class: "list-row-meta", {format!("{:.1}% placed", dept.placement_rate)} }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Enrollment Trend" }
                        CardDescription { "Students enrolled per academic year" }
                    }
                    CardContent {
                        for point in institution.enrollment_trend.iter() {
                            ProgressBar {
                                key: "{point.year}",
                                value: f64::from(point.students) / f64::from(peak) * 100.0,
                                label: Some(format!("{} · {} students", point.year, point.students)),
                            }
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

    #[test]
    fn fixture_enrollment_is_growing() {
        let institution = &catalog().unwrap().institution;
        let trend = growth_trend(institution).unwrap();
        assert!(trend.is_positive);
        assert_eq!(peak_enrollment(institution), 2450);
    }

    #[test]
    fn empty_trend_has_no_growth() {
        let mut institution = catalog().unwrap().institution.clone();
        institution.enrollment_trend.clear();
        assert!(growth_trend(&institution).is_none());
        assert_eq!(peak_enrollment(&institution), 0);
    }
}
