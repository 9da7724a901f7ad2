use crate::role::Role;
use crate::session::{Session, LOGIN_PATH};

/// Access requirement attached to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Any signed-in role.
    Authenticated,
    /// Only sessions holding exactly this role.
    Role(Role),
}

/// Outcome of checking a session against a view's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    /// Signed in, but the view belongs to another role.
    RedirectToDashboard(Role),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Target path for a redirect, `None` when rendering is allowed.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH.to_string()),
            GuardDecision::RedirectToDashboard(role) => Some(role.dashboard_path()),
        }
    }
}

/// Gate a role-scoped view.
///
/// No session redirects to login; a session of another role is sent to its
/// own dashboard, never to login.
pub fn guard(session: Option<&Session>, required: Role) -> GuardDecision {
    match session {
        None => GuardDecision::RedirectToLogin,
        Some(s) if s.role != required => GuardDecision::RedirectToDashboard(s.role),
        Some(_) => GuardDecision::Allow,
    }
}

/// Evaluate any access requirement against the current session.
pub fn evaluate(session: Option<&Session>, access: Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Allow,
        Access::Authenticated => match session {
            Some(_) => GuardDecision::Allow,
            None => GuardDecision::RedirectToLogin,
        },
        Access::Role(required) => guard(session, required),
    }
}
