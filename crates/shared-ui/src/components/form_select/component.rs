use dioxus::prelude::*;

/// Native `<select>` styled to match the inputs.
///
/// `options` are `(value, label)` pairs rendered in order.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<String>>,
    #[props(default)] label: String,
    options: Vec<(String, String)>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    }
}
