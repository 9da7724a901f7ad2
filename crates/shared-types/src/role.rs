use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role controlling which views a session may open.
///
/// - `Student`: own dashboard, logbook and internship applications.
/// - `Teacher`: mentees, logbook verification and publications.
/// - `Institution`: institution-wide analytics and compliance reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Institution,
}

/// Identity document a role signs in with on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Aadhaar,
    Apar,
    Aishe,
    DigiLocker,
}

impl IdKind {
    pub const ALL: [IdKind; 4] = [IdKind::Aadhaar, IdKind::Apar, IdKind::Aishe, IdKind::DigiLocker];

    pub fn key(&self) -> &'static str {
        match self {
            IdKind::Aadhaar => "aadhaar",
            IdKind::Apar => "apar",
            IdKind::Aishe => "aishe",
            IdKind::DigiLocker => "digilocker",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdKind::Aadhaar => "Aadhaar ID",
            IdKind::Apar => "APAR ID",
            IdKind::Aishe => "AISHE Code",
            IdKind::DigiLocker => "DigiLocker",
        }
    }
}

impl Role {
    /// All roles in login-screen order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Institution];

    /// Parse a role key. Unknown values yield `None`; there is no fallback role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "institution" => Some(Role::Institution),
            _ => None,
        }
    }

    /// Lowercase key, also the first path segment of the role's portal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Institution => "institution",
        }
    }

    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }

    pub fn portal_label(&self) -> &'static str {
        match self {
            Role::Student => "Student Portal",
            Role::Teacher => "Teacher Portal",
            Role::Institution => "Admin Portal",
        }
    }

    /// Title shown on the role-selection card.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Institution => "Institution Admin",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Student => "Track your academic journey and achievements",
            Role::Teacher => "Monitor student progress and manage your classes",
            Role::Institution => "Manage your institution's data and analytics",
        }
    }

    /// Default identity document preselected when this role is chosen.
    pub fn login_id_kind(&self) -> IdKind {
        match self {
            Role::Student => IdKind::Aadhaar,
            Role::Teacher => IdKind::Apar,
            Role::Institution => IdKind::Aishe,
        }
    }

    /// Identity documents offered on the login form for this role.
    pub fn id_kinds(&self) -> &'static [IdKind] {
        match self {
            Role::Student => &[IdKind::Aadhaar, IdKind::DigiLocker],
            Role::Teacher => &[IdKind::Apar, IdKind::DigiLocker],
            Role::Institution => &[IdKind::Aishe],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_roles_case_insensitively() {
        assert_eq!(Role::parse("student"), Some(Role::Student));
        assert_eq!(Role::parse("Teacher"), Some(Role::Teacher));
        assert_eq!(Role::parse(" INSTITUTION "), Some(Role::Institution));
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn as_str_parses_back() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn dashboard_paths() {
        assert_eq!(Role::Student.dashboard_path(), "/student/dashboard");
        assert_eq!(Role::Teacher.dashboard_path(), "/teacher/dashboard");
        assert_eq!(Role::Institution.dashboard_path(), "/institution/dashboard");
    }

    #[test]
    fn institution_portal_is_labelled_admin() {
        assert_eq!(Role::Institution.portal_label(), "Admin Portal");
    }

    #[test]
    fn default_id_kind_per_role() {
        assert_eq!(Role::Student.login_id_kind(), IdKind::Aadhaar);
        assert_eq!(Role::Teacher.login_id_kind(), IdKind::Apar);
        assert_eq!(Role::Institution.login_id_kind(), IdKind::Aishe);
    }

    #[test]
    fn default_id_kind_is_offered() {
        for role in Role::ALL {
            assert_eq!(role.id_kinds()[0], role.login_id_kind());
        }
    }

    #[test]
    fn id_kind_keys_round_trip() {
        for kind in IdKind::ALL {
            assert_eq!(IdKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(IdKind::from_key("passport"), None);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
        let role: Role = serde_json::from_str("\"institution\"").unwrap();
        assert_eq!(role, Role::Institution);
    }
}
