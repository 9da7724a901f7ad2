use crate::auth::use_auth;
use crate::notify;
use crate::routes::{follow, Route};
use crate::timer::sleep_ms;
use dioxus::prelude::*;
use shared_types::{
    AppError, FeatureFlags, IdKind, PortalSettings, Registration, Role, REGISTRATION_ID_KINDS,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormSelect, Input, Segmented, Separator,
};

/// Tabs across the top of the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginStep {
    SelectRole,
    Login,
    Register,
}

impl LoginStep {
    const ALL: [LoginStep; 3] = [LoginStep::SelectRole, LoginStep::Login, LoginStep::Register];

    fn key(&self) -> &'static str {
        match self {
            LoginStep::SelectRole => "select-role",
            LoginStep::Login => "login",
            LoginStep::Register => "register",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    fn label(&self) -> &'static str {
        match self {
            LoginStep::SelectRole => "Select Role",
            LoginStep::Login => "Login",
            LoginStep::Register => "Register",
        }
    }

    /// Registering wins over the role choice; without a role the login
    /// form has nothing to sign in as.
    fn current(selected: Option<Role>, registering: bool) -> Self {
        match (registering, selected) {
            (true, _) => LoginStep::Register,
            (false, Some(_)) => LoginStep::Login,
            (false, None) => LoginStep::SelectRole,
        }
    }
}

fn field_error(errors: &Option<AppError>, field: &str) -> Option<String> {
    errors.as_ref().and_then(|e| e.field(field)).map(String::from)
}

/// Sign in: pick a role, then confirm with an identity document. A third
/// tab registers a new account.
///
/// Credentials are not checked. "Sign In", a completed QR scan and "Skip
/// Login" all start a mock session for the chosen role.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let portal: PortalSettings = use_context();
    let toast = use_toast();

    let mut selected = use_signal(|| Option::<Role>::None);
    let mut id_kind = use_signal(|| IdKind::Aadhaar);
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut scanning = use_signal(|| false);
    let mut registering = use_signal(|| false);

    // Already signed in: straight to the portal.
    if let Some(role) = auth.role() {
        navigator().replace(Route::dashboard(role));
    }

    let mut choose_role = move |role: Role| {
        selected.set(Some(role));
        id_kind.set(role.login_id_kind());
    };

    let mut sign_in = move |role: Role| {
        notify::success(toast, "Login successful!");
        let transition = auth.login(role);
        follow(transition, toast);
    };

    let delay_ms = portal.qr_scan_delay_ms;
    let mut start_scan = move |role: Role| {
        scanning.set(true);
        spawn(async move {
            sleep_ms(delay_ms).await;
            scanning.set(false);
            notify::success(toast, "Identity verified successfully!");
            sign_in(role);
        });
    };

    let step = LoginStep::current(selected(), registering());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/login.css") }

        div { class: "auth-page",
            div { class: "auth-heading",
                Link { to: Route::Home {}, class: "auth-logo", "UIP" }
                h1 { "Welcome to the Unified Interface Platform" }
                p { "Select your role to access the platform" }
            }

            Segmented {
                options: LoginStep::ALL
                    .iter()
                    .map(|s| (s.key().to_string(), s.label().to_string()))
                    .collect::<Vec<_>>(),
                value: Some(step.key().to_string()),
                on_change: move |next: Option<String>| {
                    match next.as_deref().and_then(LoginStep::from_key) {
                        Some(LoginStep::SelectRole) => {
                            registering.set(false);
                            selected.set(None);
                        }
                        Some(LoginStep::Login) => registering.set(false),
                        Some(LoginStep::Register) => registering.set(true),
                        None => {}
                    }
                },
            }

            if registering() {
                RegisterCard {
                    preselected: selected(),
                    on_registered: move |role: Role| {
                        registering.set(false);
                        choose_role(role);
                    },
                    on_cancel: move |_| registering.set(false),
                }
            } else {
                match selected() {
                    None => rsx! {
                        div { class: "role-picker",
                            for role in Role::ALL {
                                button {
                                    key: "{role}",
                                    r#type: "button",
                                    class: "role-card",
                                    onclick: move |_| choose_role(role),
                                    span { class: "role-card-title", "{role.display_name()}" }
                                    span { class: "role-card-tagline", "{role.tagline()}" }
                                }
                            }
                            p { class: "auth-demo-note",
                                "Demo environment. No real authentication is performed."
                            }
                        }
                    },
                    Some(role) => rsx! {
                        Card { class: "auth-card",
                            CardHeader {
                                CardTitle { "Login to your account" }
                                CardDescription {
                                    "Enter your {role.login_id_kind().label()} and password to access your {role.portal_label()}"
                                }
                            }

                            CardContent {
                                if scanning() {
                                    div { class: "qr-scanner",
                                        div { class: "qr-frame" }
                                        p { "Scanning QR code..." }
                                    }
                                } else {
                                    div { class: "auth-form",
                                        FormSelect {
                                            label: "ID Type".to_string(),
                                            value: id_kind().key().to_string(),
                                            options: role
                                                .id_kinds()
                                                .iter()
                                                .map(|k| (k.key().to_string(), k.label().to_string()))
                                                .collect::<Vec<_>>(),
                                            onchange: move |key: String| {
                                                if let Some(kind) = IdKind::from_key(&key) {
                                                    id_kind.set(kind);
                                                }
                                            },
                                        }
                                        Input {
                                            label: id_kind().label().to_string(),
                                            placeholder: format!("Enter your {}", id_kind().label()),
                                            value: identifier(),
                                            on_input: move |e: FormEvent| identifier.set(e.value()),
                                        }
                                        Input {
                                            label: "Password".to_string(),
                                            input_type: "password".to_string(),
                                            value: password(),
                                            on_input: move |e: FormEvent| password.set(e.value()),
                                        }
                                        Button {
                                            onclick: move |_| sign_in(role),
                                            "Sign In"
                                        }
                                    }
                                }
                            }

                            CardFooter {
                                div { class: "auth-alternatives",
                                    if flags.qr_login {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            disabled: scanning(),
                                            onclick: move |_| start_scan(role),
                                            "Scan QR"
                                        }
                                    }
                                    if flags.skip_login {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            disabled: scanning(),
                                            onclick: move |_| {
                                                let transition = auth.login(role);
                                                follow(transition, toast);
                                            },
                                            "Skip Login"
                                        }
                                    }
                                }
                                Separator {}
                                div { class: "auth-alternatives",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        disabled: scanning(),
                                        onclick: move |_| selected.set(None),
                                        "Choose a different role"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        disabled: scanning(),
                                        onclick: move |_| registering.set(true),
                                        "Register here"
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

/// "Create an account" form. A valid submission shows the verification
/// notice and hands the chosen role back so the login step can open.
#[component]
fn RegisterCard(
    preselected: Option<Role>,
    on_registered: EventHandler<Role>,
    on_cancel: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut form = use_signal(|| Registration::for_role(preselected));
    let mut errors = use_signal(|| Option::<AppError>::None);

    let submit = move |_: MouseEvent| {
        let current = form();
        match current.submit() {
            Ok(notice) => {
                errors.set(None);
                notify::show(toast, &notice);
                if let Some(role) = current.role {
                    on_registered.call(role);
                }
            }
            Err(e) => {
                notify::failure(toast, &e);
                errors.set(Some(e));
            }
        }
    };

    let current = form();
    let current_errors = errors();
    let role_options: Vec<(String, String)> = Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name().to_string()))
        .collect();
    let id_options: Vec<(String, String)> = REGISTRATION_ID_KINDS
        .iter()
        .map(|k| (k.key().to_string(), k.label().to_string()))
        .collect();
    let terms_error = field_error(&current_errors, "terms");
    let role_error = field_error(&current_errors, "role");

    rsx! {
        Card { class: "auth-card",
            CardHeader {
                CardTitle { "Create an account" }
                CardDescription { "Register to access the Unified Interface Platform" }
            }
            CardContent {
                div { class: "auth-form",
                    div { class: "auth-alternatives",
                        Input {
                            label: "First name".to_string(),
                            placeholder: "Enter your first name".to_string(),
                            value: current.first_name.clone(),
                            error: field_error(&current_errors, "first_name"),
                            on_input: move |e: FormEvent| form.write().first_name = e.value(),
                        }
                        Input {
                            label: "Last name".to_string(),
                            placeholder: "Enter your last name".to_string(),
                            value: current.last_name.clone(),
                            error: field_error(&current_errors, "last_name"),
                            on_input: move |e: FormEvent| form.write().last_name = e.value(),
                        }
                    }
                    Input {
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        placeholder: "Enter your email address".to_string(),
                        value: current.email.clone(),
                        error: field_error(&current_errors, "email"),
                        on_input: move |e: FormEvent| form.write().email = e.value(),
                    }
                    FormSelect {
                        label: "Role".to_string(),
                        value: current.role.map(|r| r.as_str().to_string()).unwrap_or_default(),
                        options: role_options,
                        onchange: move |key: String| {
                            if let Some(role) = Role::parse(&key) {
                                let mut f = form.write();
                                f.role = Some(role);
                                f.id_kind = role.login_id_kind();
                            }
                        },
                    }
                    if let Some(message) = role_error {
                        p { class: "field-error", "{message}" }
                    }
                    FormSelect {
                        label: "Identity Verification".to_string(),
                        value: current.id_kind.key().to_string(),
                        options: id_options,
                        onchange: move |key: String| {
                            if let Some(kind) = IdKind::from_key(&key) {
                                form.write().id_kind = kind;
                            }
                        },
                    }
                    Input {
                        label: "ID Number".to_string(),
                        placeholder: "Enter your ID number".to_string(),
                        value: current.id_number.clone(),
                        error: field_error(&current_errors, "id_number"),
                        on_input: move |e: FormEvent| form.write().id_number = e.value(),
                    }
                    Input {
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                        placeholder: "Create a password".to_string(),
                        value: current.password.clone(),
                        error: field_error(&current_errors, "password"),
                        on_input: move |e: FormEvent| form.write().password = e.value(),
                    }
                    Input {
                        label: "Confirm Password".to_string(),
                        input_type: "password".to_string(),
                        placeholder: "Confirm your password".to_string(),
                        value: current.confirm_password.clone(),
                        error: field_error(&current_errors, "confirm_password"),
                        on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                    }
                    label { class: "auth-terms",
                        input {
                            r#type: "checkbox",
                            checked: current.accepted_terms,
                            onchange: move |e: FormEvent| form.write().accepted_terms = e.checked(),
                        }
                        span { "I agree to the Terms of Service and Privacy Policy" }
                    }
                    if let Some(message) = terms_error {
                        p { class: "field-error", "{message}" }
                    }
                    Button { onclick: submit, "Create Account" }
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_cancel.call(()),
                    "Already have an account? Login"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn step_keys_round_trip() {
        for step in LoginStep::ALL {
            assert_eq!(LoginStep::from_key(step.key()), Some(step));
        }
        assert_eq!(LoginStep::from_key("forgot-password"), None);
    }

    #[test]
    fn registering_takes_over_the_page() {
        assert_eq!(LoginStep::current(None, false), LoginStep::SelectRole);
        assert_eq!(LoginStep::current(Some(Role::Teacher), false), LoginStep::Login);
        assert_eq!(LoginStep::current(None, true), LoginStep::Register);
        assert_eq!(LoginStep::current(Some(Role::Student), true), LoginStep::Register);
    }

    #[test]
    fn successful_registration_returns_to_login_step() {
        let form = Registration {
            first_name: "Meera".into(),
            last_name: "Pillai".into(),
            email: "meera.pillai@niamt.ac.in".into(),
            role: Some(Role::Teacher),
            id_kind: IdKind::Apar,
            id_number: "APAR-2231".into(),
            password: "mentorship".into(),
            confirm_password: "mentorship".into(),
            accepted_terms: true,
        };
        assert!(form.submit().is_ok());
        assert_eq!(LoginStep::current(form.role, false), LoginStep::Login);
    }
}
