use dioxus::prelude::*;
use shared_types::{Role, Session, SessionState, Transition};

/// Global session state. Lives for the life of the page; a reload starts
/// anonymous again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionState::default()),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read().current().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn login(&mut self, role: Role) -> Transition {
        self.session.write().login(role)
    }

    pub fn logout(&mut self) -> Transition {
        self.session.write().logout()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Session of the signed-in user. Portal pages sit behind the route guard, so
/// `None` only shows up for a single frame after logout.
pub fn use_session() -> Option<Session> {
    use_auth().current()
}
