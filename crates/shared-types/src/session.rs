use serde::{Deserialize, Serialize};

use crate::notice::Notice;
use crate::role::Role;

/// Path of the public landing view.
pub const LANDING_PATH: &str = "/";

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

/// The signed-in user's role and display identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub role: Role,
    pub display_name: String,
    pub avatar: String,
}

impl Session {
    /// Fixed mock identity for a role. No credentials are checked.
    pub fn mock(role: Role) -> Self {
        let (display_name, avatar) = match role {
            Role::Student => ("Aditi Sharma", "/student-avatar.png"),
            Role::Teacher => ("Dr. Ravi Kumar", "/teacher-avatar.png"),
            Role::Institution => ("Admin", "/admin-avatar.png"),
        };
        Self {
            user_id: 1,
            role,
            display_name: display_name.to_string(),
            avatar: avatar.to_string(),
        }
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter(|w| w.chars().next().is_some_and(char::is_alphabetic))
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Where the shell should go next and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub navigate_to: String,
    pub notice: Notice,
}

/// In-memory session state machine: `Anonymous` or `Authenticated(role)`.
///
/// Owned by whoever renders the portal and passed down explicitly; nothing
/// here is global, and nothing survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn current(&self) -> Option<&Session> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(session) => Some(session),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Sign in as `role`. Always succeeds and replaces any existing session.
    pub fn login(&mut self, role: Role) -> Transition {
        let session = Session::mock(role);
        tracing::info!(role = %role, user = %session.display_name, "session started");
        let notice = Notice::success(format!("Welcome, {}!", session.display_name));
        *self = SessionState::Authenticated(session);
        Transition {
            navigate_to: role.dashboard_path(),
            notice,
        }
    }

    /// Clear the session and return to the public landing view.
    pub fn logout(&mut self) -> Transition {
        if let Some(role) = self.role() {
            tracing::info!(role = %role, "session ended");
        }
        *self = SessionState::Anonymous;
        Transition {
            navigate_to: LANDING_PATH.to_string(),
            notice: Notice::info("You have been logged out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    #[test]
    fn default_state_is_anonymous() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.current(), None);
        assert_eq!(state.role(), None);
    }

    #[test]
    fn login_sets_mock_identity_and_navigates_to_dashboard() {
        let mut state = SessionState::default();
        let transition = state.login(Role::Teacher);

        let session = state.current().unwrap();
        assert_eq!(session.display_name, "Dr. Ravi Kumar");
        assert_eq!(session.avatar, "/teacher-avatar.png");
        assert_eq!(session.role, Role::Teacher);
        assert_eq!(transition.navigate_to, "/teacher/dashboard");
        assert_eq!(transition.notice.kind, NoticeKind::Success);
        assert_eq!(transition.notice.message, "Welcome, Dr. Ravi Kumar!");
    }

    #[test]
    fn login_replaces_existing_session() {
        let mut state = SessionState::default();
        state.login(Role::Student);
        state.login(Role::Institution);
        assert_eq!(state.role(), Some(Role::Institution));
        assert_eq!(state.current().unwrap().display_name, "Admin");
    }

    #[test]
    fn logout_clears_session_and_returns_to_landing() {
        let mut state = SessionState::default();
        state.login(Role::Student);
        let transition = state.logout();

        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(transition.navigate_to, LANDING_PATH);
        assert_eq!(transition.notice, Notice::info("You have been logged out"));
    }

    #[test]
    fn logout_while_anonymous_is_harmless() {
        let mut state = SessionState::default();
        let transition = state.logout();
        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(transition.navigate_to, LANDING_PATH);
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(Session::mock(Role::Student).initials(), "AS");
        assert_eq!(Session::mock(Role::Institution).initials(), "A");
        // "Dr." counts as a word
        assert_eq!(Session::mock(Role::Teacher).initials(), "DR");
    }
}
