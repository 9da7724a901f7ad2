use dioxus::prelude::*;
use shared_types::{
    average_completion_rate, catalog, placement_delta, scheme_intensity, Institution,
};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    ProgressBar, StatCard,
};

use super::refresh::{use_live_institution, RefreshButton};
use crate::components::FixtureError;

fn delta_badge(delta: f64) -> (BadgeVariant, String) {
    if delta >= 0.0 {
        (BadgeVariant::Success, format!("+{delta:.1} pts"))
    } else {
        (BadgeVariant::Destructive, format!("{delta:.1} pts"))
    }
}

/// Heatmap cell class for a 0..=1 intensity.
fn heat_level(intensity: f64) -> &'static str {
    match intensity {
        i if i <= 0.0 => "heat-cell heat-0",
        i if i < 0.35 => "heat-cell heat-1",
        i if i < 0.65 => "heat-cell heat-2",
        _ => "heat-cell heat-3",
    }
}

/// Rows of (scheme, per-department intensities) in department order.
fn heatmap_rows(institution: &Institution) -> Vec<(String, Vec<f64>)> {
    institution
        .schemes
        .iter()
        .map(|scheme| {
            let cells = institution
                .departments
                .iter()
                .map(|d| scheme_intensity(institution, &scheme.name, &d.name))
                .collect();
            (scheme.name.clone(), cells)
        })
        .collect()
}

#[component]
pub fn InstitutionAnalytics() -> Element {
    let live = use_live_institution();

    if let Err(e) = catalog() {
        return rsx! { FixtureError { message: e.friendly_message() } };
    }
    let Some(current) = live.data.read().clone() else {
        return rsx! {};
    };
    let institution = &current;

    let average = average_completion_rate(institution);
    let rows = heatmap_rows(institution);
    let departments: Vec<String> = institution.departments.iter().map(|d| d.name.clone()).collect();
    let deltas: Vec<(String, f64, BadgeVariant, String)> = institution
        .departments
        .iter()
        .map(|d| {
            let (variant, label) = delta_badge(placement_delta(d, institution));
            (d.name.clone(), d.placement_rate, variant, label)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Analytics".to_string(),
                description: Some("Completion, placement and scheme utilisation across departments.".to_string()),
                RefreshButton { live }
            }

            div { class: "stat-grid",
                StatCard {
                    title: "Average Completion".to_string(),
                    value: format!("{average}%"),
                }
                StatCard {
                    title: "Institution Placement".to_string(),
                    value: format!("{:.1}%", institution.placement_rate),
                }
                StatCard {
                    title: "Schemes Tracked".to_string(),
                    value: institution.schemes.len().to_string(),
                }
            }

            div { class: "page-grid-2",
                Card {
                    CardHeader {
                        CardTitle { "Course Completion" }
                        CardDescription { "Share of students completing on time" }
                    }
                    CardContent {
                        for rate in institution.completion_rate_by_dept.iter() {
                            ProgressBar {
                                key: "{rate.department}",
                                value: rate.rate,
                                label: Some(format!("{} · {:.0}%", rate.department, rate.rate)),
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Placement vs. Institution" }
                        CardDescription { "Difference from the institution-wide rate" }
                    }
                    CardContent {
                        ul { class: "list-rows",
                            for (name, rate, variant, label) in deltas {
                                li { key: "{name}", class: "list-row",
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", "{name}" }
                                        span { class: "muted", {format!("{rate:.1}% placed")} }
                                    }
                                    Badge { variant, "{label}" }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Scheme Utilisation" }
                    CardDescription { "How heavily each department draws on government schemes" }
                }
                CardContent {
                    table { class: "heatmap",
                        thead {
                            tr {
                                th { "Scheme" }
                                for dept in departments.iter() {
                                    th { key: "{dept}", "{dept}" }
                                }
                            }
                        }
                        tbody {
                            for (scheme, cells) in rows {
                                tr { key: "{scheme}",
                                    th { scope: "row", "{scheme}" }
                                    for (i, intensity) in cells.into_iter().enumerate() {
                                        td { key: "{i}", class: heat_level(intensity),
                                            {format!("{:.0}%", intensity * 100.0)}
                                        }
                                    }
                                }
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
    use pretty_assertions::assert_eq;

    #[test]
    fn deltas_are_signed() {
        assert_eq!(delta_badge(8.7), (BadgeVariant::Success, "+8.7 pts".to_string()));
        assert_eq!(delta_badge(-12.4), (BadgeVariant::Destructive, "-12.4 pts".to_string()));
    }

    #[test]
    fn heat_levels_bucket_intensity() {
        assert_eq!(heat_level(0.0), "heat-cell heat-0");
        assert_eq!(heat_level(0.3), "heat-cell heat-1");
        assert_eq!(heat_level(0.5), "heat-cell heat-2");
        assert_eq!(heat_level(0.9), "heat-cell heat-3");
    }

    #[test]
    fn heatmap_fills_unrecorded_cells_with_zero() {
        let institution = &catalog().unwrap().institution;
        let rows = heatmap_rows(institution);
        assert_eq!(rows.len(), institution.schemes.len());
        let (scheme, cells) = &rows[1];
        assert_eq!(scheme, "AICTE Pragati");
        assert_eq!(cells.len(), institution.departments.len());
        assert_eq!(cells[3], 0.0);
    }
}
