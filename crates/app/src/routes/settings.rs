use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, FormSelect, PageHeader, Separator, UserAvatar,
};

use crate::auth::use_session;
use crate::notify;

const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("hi", "Hindi"), ("bn", "Bengali")];

fn flag_label(enabled: bool) -> (BadgeVariant, &'static str) {
    if enabled {
        (BadgeVariant::Success, "On")
    } else {
        (BadgeVariant::Outline, "Off")
    }
}

/// Settings for whichever role is signed in. Preferences live only for the
/// current page session.
#[component]
pub fn Settings() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }

        div { class: "page-stack",
            PageHeader {
                title: "Settings".to_string(),
                description: Some("Account details and portal preferences.".to_string()),
            }
            AccountSection {}
            PreferencesSection {}
            FeaturesSection {}
        }
    }
}

#[component]
fn AccountSection() -> Element {
    let Some(session) = use_session() else {
        return rsx! {};
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Account" }
            }
            CardContent {
                div { class: "person-row",
                    UserAvatar { initials: session.initials(), large: true }
                    div { class: "list-row-main",
                        span { class: "list-row-title", "{session.display_name}" }
                        span { class: "muted", "{session.role.portal_label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PreferencesSection() -> Element {
    let toast = use_toast();

    let mut email_updates = use_signal(|| true);
    let mut sms_alerts = use_signal(|| false);
    let mut weekly_digest = use_signal(|| true);
    let mut language = use_signal(|| LANGUAGES[0].0.to_string());

    let save = move |_: MouseEvent| {
        tracing::info!(
            email = email_updates(),
            sms = sms_alerts(),
            digest = weekly_digest(),
            language = %language(),
            "preferences saved"
        );
        notify::success(toast, "Settings saved successfully!");
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Preferences" }
                CardDescription { "How the portal keeps you informed." }
            }
            CardContent {
                div { class: "settings-section",
                    label { class: "settings-toggle-row",
                        span { "Email updates" }
                        input {
                            r#type: "checkbox",
                            checked: email_updates(),
                            onchange: move |e: FormEvent| email_updates.set(e.checked()),
                        }
                    }
                    label { class: "settings-toggle-row",
                        span { "SMS alerts" }
                        input {
                            r#type: "checkbox",
                            checked: sms_alerts(),
                            onchange: move |e: FormEvent| sms_alerts.set(e.checked()),
                        }
                    }
                    label { class: "settings-toggle-row",
                        span { "Weekly digest" }
                        input {
                            r#type: "checkbox",
                            checked: weekly_digest(),
                            onchange: move |e: FormEvent| weekly_digest.set(e.checked()),
                        }
                    }
                    Separator {}
                    FormSelect {
                        label: "Language".to_string(),
                        value: language(),
                        options: LANGUAGES
                            .iter()
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .collect::<Vec<_>>(),
                        onchange: move |value: String| language.set(value),
                    }
                }
            }
            CardFooter {
                div { class: "form-actions",
                    Button { onclick: save, "Save Preferences" }
                }
            }
        }
    }
}

#[component]
fn FeaturesSection() -> Element {
    let flags: FeatureFlags = use_context();
    let rows = [
        ("Notifications", flags.notifications),
        ("QR identity login", flags.qr_login),
        ("Skip login", flags.skip_login),
    ];

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Portal Features" }
                CardDescription { "Enabled for this deployment in config.toml." }
            }
            CardContent {
                ul { class: "list-rows",
                    for (name, enabled) in rows {
                        li { key: "{name}", class: "list-row",
                            span { "{name}" }
                            {
                                let (variant, text) = flag_label(enabled);
                                rsx! { Badge { variant, "{text}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
