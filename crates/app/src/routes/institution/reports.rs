use dioxus::prelude::*;
use shared_types::{PortalSettings, ReportJob, ReportKind, REPORT_FORMATS};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, FormSelect, PageHeader, ProgressBar, Segmented,
};

use crate::notify;
use crate::timer::sleep_ms;

fn status_variant(status: &str) -> BadgeVariant {
    if status == "Complete" {
        BadgeVariant::Success
    } else {
        BadgeVariant::Warning
    }
}

fn download_message(kind: ReportKind) -> String {
    format!("{} downloaded successfully!", kind.name())
}

/// Compliance report generation. One report generates at a time; progress
/// advances on a fixed tick until the job completes.
#[component]
pub fn InstitutionReports() -> Element {
    let toast = use_toast();
    let portal: PortalSettings = use_context();

    let mut selected = use_signal(|| ReportKind::Nirf);
    let mut file_format = use_signal(|| REPORT_FORMATS[0].to_string());
    let mut job = use_signal(ReportJob::default);

    let tick_ms = portal.report_tick_ms;
    let step = portal.report_progress_step;

    let generate = move |_: MouseEvent| {
        if job.read().is_generating() {
            return;
        }
        let kind = selected();
        job.set(ReportJob::start(kind));
        spawn(async move {
            loop {
                sleep_ms(tick_ms).await;
                let next = job().tick(step);
                job.set(next);
                match next {
                    ReportJob::Generating { .. } => continue,
                    ReportJob::Complete(done) => {
                        notify::success(toast, done.generated_message());
                        break;
                    }
                    ReportJob::Idle => break,
                }
            }
        });
    };

    let kind = selected();
    let current = job();
    let generating_this = matches!(current, ReportJob::Generating { kind: k, .. } if k == kind);
    let last_generated = kind
        .last_generated()
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "Never".to_string());
    let report_options: Vec<(String, String)> = ReportKind::ALL
        .iter()
        .map(|k| (k.key().to_string(), k.name().to_string()))
        .collect();
    let format_options: Vec<(String, String)> = REPORT_FORMATS
        .iter()
        .map(|f| (f.to_string(), f.to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Reports".to_string(),
                description: Some("Generate and download regulatory submissions.".to_string()),
            }

            div { class: "card-grid",
                for report in ReportKind::ALL {
                    div {
                        key: "{report.key()}",
                        class: if report == kind { "clickable-card selected" } else { "clickable-card" },
                        onclick: move |_| selected.set(report),
                        Card {
                            CardHeader {
                                div { class: "list-row-heading",
                                    CardTitle { "{report.name()}" }
                                    Badge { variant: status_variant(report.status()), "{report.status()}" }
                                }
                                CardDescription { "{report.description()}" }
                            }
                        }
                    }
                }
            }

            Segmented {
                options: report_options,
                value: Some(kind.key().to_string()),
                on_change: move |key: Option<String>| {
                    if let Some(next) = key.as_deref().and_then(ReportKind::from_key) {
                        selected.set(next);
                    }
                },
            }

            Card {
                CardHeader {
                    CardTitle { "{kind.name()}" }
                    CardDescription { "Last generated: {last_generated}" }
                }
                CardContent {
                    div { class: "form-grid",
                        FormSelect {
                            label: "Format".to_string(),
                            value: file_format(),
                            options: format_options,
                            onchange: move |value: String| file_format.set(value),
                        }
                    }
                    if generating_this {
                        ProgressBar {
                            value: f64::from(current.progress()),
                            label: Some(format!("Generating... {}%", current.progress())),
                        }
                    }
                    h4 { "Report Sections" }
                    ul { class: "section-list",
                        for section in kind.sections().iter() {
                            li { key: "{section}", "{section}" }
                        }
                    }
                }
                CardFooter {
                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| notify::success(toast, download_message(kind)),
                            {format!("Download {}", file_format())}
                        }
                        Button {
                            disabled: current.is_generating(),
                            onclick: generate,
                            if generating_this { "Generating..." } else { "Generate Report" }
                        }
                    }
                }
            }
        }
    }
}
