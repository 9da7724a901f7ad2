use dioxus::prelude::*;

/// Centered placeholder for lists with nothing to show.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            if let Some(icon) = icon {
                div { class: "empty-state-icon", {icon} }
            }
            h3 { class: "empty-state-title", "{title}" }
            if let Some(text) = description {
                p { class: "empty-state-description", "{text}" }
            }
            {children}
        }
    }
}
