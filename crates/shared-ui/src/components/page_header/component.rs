use dioxus::prelude::*;

/// Page heading with an optional subtitle. Children render as the action
/// area on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if let Some(text) = description {
                    p { class: "page-description", "{text}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
