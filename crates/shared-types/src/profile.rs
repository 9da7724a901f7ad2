use crate::error::{AppError, FieldErrors};
use crate::fixtures::Fixtures;
use crate::role::Role;
use crate::session::Session;

/// Editable personal details on the profile page.
///
/// Edits live only as long as the page state; nothing is written back to the
/// fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
}

impl ProfileForm {
    /// Starting values for the signed-in user. Students and teachers take
    /// their name (and teachers their contact details) from the fixtures.
    pub fn for_session(session: &Session, fixtures: &Fixtures) -> Self {
        match session.role {
            Role::Student => Self {
                name: fixtures
                    .student(session.user_id)
                    .map_or_else(|| session.display_name.clone(), |s| s.name.clone()),
                email: "aditi.sharma@niamt.ac.in".into(),
                phone: "+91 9876543210".into(),
                address: "Hostel C, Room 304, NIAMT Campus, Ranchi".into(),
                bio: "Computer Science student with interests in machine learning, web \
                      development, and data visualization."
                    .into(),
            },
            Role::Teacher => {
                let teacher = fixtures.teacher(session.user_id);
                Self {
                    name: teacher
                        .map_or_else(|| session.display_name.clone(), |t| t.name.clone()),
                    email: teacher.map(|t| t.email.clone()).unwrap_or_default(),
                    phone: teacher.map(|t| t.phone.clone()).unwrap_or_default(),
                    address: "Faculty Quarters, Block B, NIAMT Campus, Ranchi".into(),
                    bio: "Associate Professor specializing in machine learning and \
                          educational data mining."
                        .into(),
                }
            }
            Role::Institution => Self {
                name: "Admin User".into(),
                email: "admin@niamt.ac.in".into(),
                phone: "+91 9876543200".into(),
                address: "Administrative Block, NIAMT Ranchi".into(),
                bio: "Institution administrator responsible for data management and \
                      compliance reporting."
                    .into(),
            },
        }
    }

    /// Trimmed copy of the form, or the field errors that block saving.
    pub fn validate(&self) -> Result<ProfileForm, AppError> {
        let cleaned = ProfileForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            bio: self.bio.trim().to_string(),
        };

        let mut errors = FieldErrors::new();
        errors.require("name", &cleaned.name, "Full name is required");
        if cleaned.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !looks_like_email(&cleaned.email) {
            errors.add("email", "Enter a valid email address");
        }
        if !cleaned.phone.is_empty() && !looks_like_phone(&cleaned.phone) {
            errors.add("phone", "Enter a valid phone number");
        }
        errors.into_result("Profile has invalid fields")?;
        Ok(cleaned)
    }
}

pub(crate) fn looks_like_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn looks_like_phone(raw: &str) -> bool {
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    digits >= 7
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use crate::fixtures::catalog;

    fn form() -> ProfileForm {
        ProfileForm {
            name: "Aditi Sharma".into(),
            email: "aditi.sharma@niamt.ac.in".into(),
            phone: "+91 9876543210".into(),
            address: String::new(),
            bio: String::new(),
        }
    }

    #[test]
    fn seeds_each_role_from_session_and_fixtures() {
        let fixtures = catalog().unwrap();
        let student = ProfileForm::for_session(&Session::mock(Role::Student), fixtures);
        assert_eq!(student.name, "Aditi Sharma");

        let teacher = ProfileForm::for_session(&Session::mock(Role::Teacher), fixtures);
        let fixture_teacher = fixtures.teacher(1).unwrap();
        assert_eq!(teacher.email, fixture_teacher.email);
        assert_eq!(teacher.phone, fixture_teacher.phone);

        let admin = ProfileForm::for_session(&Session::mock(Role::Institution), fixtures);
        assert_eq!(admin.email, "admin@niamt.ac.in");
    }

    #[test]
    fn seeded_forms_are_valid() {
        let fixtures = catalog().unwrap();
        for role in Role::ALL {
            let seeded = ProfileForm::for_session(&Session::mock(role), fixtures);
            assert!(seeded.validate().is_ok(), "{role:?} profile should validate");
        }
    }

    #[test]
    fn validate_trims_fields() {
        let mut f = form();
        f.name = "  Aditi  ".into();
        f.bio = " Hello \n".into();
        let cleaned = f.validate().unwrap();
        assert_eq!(cleaned.name, "Aditi");
        assert_eq!(cleaned.bio, "Hello");
    }

    #[test]
    fn blank_name_and_bad_email_are_field_errors() {
        let mut f = form();
        f.name = "   ".into();
        f.email = "aditi.at.niamt".into();
        let err = f.validate().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field("name").is_some());
        assert_eq!(err.field("email"), Some("Enter a valid email address"));
    }

    #[test]
    fn phone_is_optional_but_checked() {
        let mut f = form();
        f.phone = String::new();
        assert!(f.validate().is_ok());
        f.phone = "call me".into();
        assert!(f.validate().unwrap_err().field("phone").is_some());
    }
}
