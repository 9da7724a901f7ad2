use dioxus::prelude::*;
use shared_types::{catalog, internship, Internship, InternshipTab};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, EmptyState, FormSelect, Input, PageHeader, Segmented,
};

use crate::components::{ApplicationBadge, FixtureError};
use crate::notify;

const ALL_LOCATIONS: &str = "all";

fn tab_from_key(key: &str) -> InternshipTab {
    InternshipTab::ALL
        .into_iter()
        .find(|t| t.label() == key)
        .unwrap_or_default()
}

/// Open internships with search, location and application-state filters.
#[component]
pub fn StudentInternships() -> Element {
    let toast = use_toast();

    let mut listings = use_signal(|| {
        catalog()
            .map(|f| f.internships.clone())
            .unwrap_or_default()
    });
    let mut query = use_signal(String::new);
    let mut location = use_signal(|| ALL_LOCATIONS.to_string());
    let mut tab = use_signal(InternshipTab::default);

    if let Err(e) = catalog() {
        return rsx! { FixtureError { message: e.friendly_message() } };
    }

    let mut location_options = vec![(ALL_LOCATIONS.to_string(), "All locations".to_string())];
    location_options.extend(
        internship::locations(&listings.read())
            .into_iter()
            .map(|l| (l.clone(), l)),
    );

    let selected_location = location();
    let location_filter = (selected_location != ALL_LOCATIONS).then_some(selected_location.as_str());
    let visible: Vec<Internship> =
        internship::filter(&listings.read(), &query(), location_filter, tab())
            .into_iter()
            .cloned()
            .collect();

    let mut apply = move |id: i64| {
        let result = internship::apply(&mut listings.write(), id).map(|_| ());
        match result {
            Ok(_) => notify::success(toast, "Application submitted successfully!"),
            Err(e) => notify::failure(toast, &e),
        }
    };

    let tab_options: Vec<(String, String)> = InternshipTab::ALL
        .iter()
        .map(|t| (t.label().to_string(), t.label().to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Internships".to_string(),
                description: Some("Browse openings and track your applications.".to_string()),
            }

            div { class: "filters-row",
                Input {
                    placeholder: "Search by title or company".to_string(),
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
                FormSelect {
                    value: location(),
                    options: location_options,
                    onchange: move |value: String| location.set(value),
                }
                Segmented {
                    options: tab_options,
                    value: Some(tab().label().to_string()),
                    on_change: move |key: Option<String>| {
                        if let Some(key) = key {
                            tab.set(tab_from_key(&key));
                        }
                    },
                }
            }

            if visible.is_empty() {
                EmptyState {
                    title: "No internships found".to_string(),
                    description: Some("Try a different search or location.".to_string()),
                }
            }

            div { class: "card-grid",
                for item in visible {
                    Card { key: "{item.id}",
                        CardHeader {
                            div { class: "list-row-heading",
                                CardTitle { "{item.title}" }
                                ApplicationBadge { status: item.status }
                            }
                            CardDescription { "{item.company} · {item.location}" }
                        }
                        CardContent {
                            p { "{item.description}" }
                            dl { class: "detail-grid",
                                dt { "Duration" }
                                dd { "{item.duration}" }
                                dt { "Stipend" }
                                dd { "{item.stipend}" }
                                dt { "Apply by" }
                                dd { {item.deadline.format("%d %b %Y").to_string()} }
                            }
                            div { class: "chip-row",
                                for skill in item.skills.iter() {
                                    Badge { key: "{skill}", variant: BadgeVariant::Outline, "{skill}" }
                                }
                            }
                        }
                        CardFooter {
                            Button {
                                disabled: item.status.has_applied(),
                                onclick: move |_| apply(item.id),
                                if item.status.has_applied() { "{item.status.label()}" } else { "Apply Now" }
                            }
                        }
                    }
                }
            }
        }
    }
}
