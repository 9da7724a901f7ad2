use dioxus::prelude::*;

/// Row of mutually exclusive toggle buttons, used for tabs and filters.
///
/// `options` are `(value, label)` pairs. Clicking the active option again
/// reports `None` when `allow_clear` is set.
#[component]
pub fn Segmented(
    options: Vec<(String, String)>,
    value: Option<String>,
    on_change: EventHandler<Option<String>>,
    #[props(default = false)] allow_clear: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "segmented", role: "tablist",
            for (option_value, option_label) in options {
                {
                    let active = value.as_deref() == Some(option_value.as_str());
                    rsx! {
                        button {
                            key: "{option_value}",
                            r#type: "button",
                            role: "tab",
                            class: "segmented-option",
                            "data-active": if active { "true" } else { "false" },
                            "aria-selected": if active { "true" } else { "false" },
                            onclick: move |_| {
                                if active && allow_clear {
                                    on_change.call(None);
                                } else {
                                    on_change.call(Some(option_value.clone()));
                                }
                            },
                            "{option_label}"
                        }
                    }
                }
            }
        }
    }
}
