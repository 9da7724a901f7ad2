use dioxus::prelude::*;

/// Clamp a percentage to 0..=100 for rendering.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let percent = clamp_percent(value);
    let base = vec![
        Attribute::new("class", "progress", None, false),
        Attribute::new("role", "progressbar", None, false),
        Attribute::new("aria-valuemin", "0", None, false),
        Attribute::new("aria-valuemax", "100", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if let Some(text) = label {
            div { class: "progress-label",
                span { "{text}" }
                span { class: "progress-value", "{percent:.0}%" }
            }
        }
        div {
            "aria-valuenow": "{percent:.0}",
            ..merged,
            div {
                class: "progress-indicator",
                style: "width: {percent}%",
            }
        }
    }
}
