use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Button, ButtonSize, ButtonVariant};

use crate::auth::use_auth;
use crate::routes::Route;

/// Public landing page. Logout returns here.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let role = auth.role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/login.css") }

        div { class: "landing-page",
            div { class: "landing-hero",
                span { class: "landing-kicker", "Unified Interface Platform" }
                h1 { class: "landing-title", "One portal for students, teachers and institutions" }
                p { class: "landing-subtitle",
                    "Track academic progress, verify internship logbooks and prepare compliance reports in one place."
                }
                div { class: "landing-actions",
                    match role {
                        Some(role) => rsx! {
                            Button {
                                size: ButtonSize::Large,
                                onclick: move |_| {
                                    navigator().push(Route::dashboard(role));
                                },
                                "Go to {role.portal_label()}"
                            }
                        },
                        None => rsx! {
                            Button {
                                size: ButtonSize::Large,
                                onclick: move |_| {
                                    navigator().push(Route::Login {});
                                },
                                "Get Started"
                            }
                        },
                    }
                }
            }

            div { class: "landing-roles",
                for role in Role::ALL {
                    div { key: "{role}", class: "landing-role",
                        h3 { "{role.display_name()}" }
                        p { "{role.tagline()}" }
                    }
                }
            }

            if role.is_none() {
                div { class: "landing-footer",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            navigator().push(Route::Login {});
                        },
                        "Already registered? Sign in"
                    }
                }
            }
        }
    }
}
