use crate::error::{AppError, FieldErrors};
use crate::notice::Notice;
use crate::profile::looks_like_email;
use crate::role::{IdKind, Role};

/// Shortest password the register form accepts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Identity documents a new account can be verified with.
pub const REGISTRATION_ID_KINDS: [IdKind; 3] = [IdKind::Aadhaar, IdKind::Apar, IdKind::Aishe];

/// Raw input of the "Create an account" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<Role>,
    pub id_kind: IdKind,
    pub id_number: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

impl Registration {
    /// Empty form with the role picked on the first login step, if any.
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role,
            id_kind: role.map_or(IdKind::Aadhaar, |r| r.login_id_kind()),
            id_number: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            accepted_terms: false,
        }
    }

    /// Check the form and produce the confirmation notice. No account is
    /// created anywhere; the user is expected to sign in with the mock flow.
    pub fn submit(&self) -> Result<Notice, AppError> {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");
        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !looks_like_email(email) {
            errors.add("email", "Enter a valid email address");
        }
        if self.role.is_none() {
            errors.add("role", "Select your role");
        }
        errors.require("id_number", &self.id_number, "ID number is required");
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self.confirm_password != self.password {
            errors.add("confirm_password", "Passwords do not match");
        }
        if !self.accepted_terms {
            errors.add("terms", "Accept the terms to continue");
        }
        errors.into_result("Registration form is incomplete")?;

        tracing::info!(
            role = self.role.map(|r| r.as_str()),
            id_kind = self.id_kind.key(),
            "registration submitted"
        );
        Ok(Notice::success(
            "Registration successful! Please check your email to verify your account.",
        ))
    }
}
