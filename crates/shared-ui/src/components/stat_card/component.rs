use dioxus::prelude::*;

use crate::components::card::{Card, CardContent, CardTone};

/// Percentage change shown under a statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

impl Trend {
    pub fn label(&self) -> String {
        let arrow = if self.is_positive { "↑" } else { "↓" };
        format!("{arrow} {:.1}%", self.value.abs())
    }
}

/// Headline number with a title, optional icon and trend.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] description: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default)] trend: Option<Trend>,
    #[props(default = CardTone::Primary)] tone: CardTone,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { tone: tone, class: "stat-card",
            CardContent { class: "stat-card-content",
                div { class: "stat-card-text",
                    p { class: "stat-card-title", "{title}" }
                    h3 { class: "stat-card-value", "{value}" }
                    if let Some(text) = description {
                        p { class: "stat-card-description", "{text}" }
                    }
                    if let Some(trend) = trend {
                        span {
                            class: if trend.is_positive { "stat-card-trend up" } else { "stat-card-trend down" },
                            {trend.label()}
                        }
                    }
                }
                if let Some(icon) = icon {
                    div { class: "stat-card-icon", {icon} }
                }
            }
        }
    }
}
