use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{evaluate, guard, Access, GuardDecision, NoticeKind, Role, SessionState};

#[test]
fn student_visiting_teacher_portal_lands_on_student_dashboard() {
    let state = signed_in(Role::Student);
    let decision = guard(state.current(), Role::Teacher);
    assert_eq!(decision, GuardDecision::RedirectToDashboard(Role::Student));
    assert_eq!(decision.redirect_path().as_deref(), Some("/student/dashboard"));
}

#[test]
fn anonymous_visitor_is_sent_to_login() {
    let state = SessionState::default();
    let decision = guard(state.current(), Role::Institution);
    assert_eq!(decision.redirect_path().as_deref(), Some("/login"));
}

#[test]
fn logout_drops_portal_access() {
    for signed in Role::ALL {
        let mut state = signed_in(signed);
        assert!(guard(state.current(), signed).is_allowed());

        let transition = state.logout();
        assert_eq!(transition.navigate_to, "/");
        assert_eq!(transition.notice.kind, NoticeKind::Info);
        assert_eq!(state, SessionState::Anonymous);

        for required in Role::ALL {
            assert_eq!(
                guard(state.current(), required).redirect_path().as_deref(),
                Some("/login"),
                "{signed:?} still reaches the {required:?} portal after logout"
            );
        }
        assert_eq!(
            evaluate(state.current(), Access::Authenticated),
            GuardDecision::RedirectToLogin
        );
    }
}

#[test]
fn login_always_targets_own_dashboard() {
    for role in Role::ALL {
        let mut state = SessionState::default();
        let transition = state.login(role);
        assert_eq!(transition.navigate_to, format!("/{}/dashboard", role.as_str()));
        assert_eq!(transition.notice.kind, NoticeKind::Success);
        assert_eq!(state.role(), Some(role));
    }
}

#[test]
fn every_role_is_allowed_only_into_its_own_portal() {
    for signed in Role::ALL {
        let state = signed_in(signed);
        for required in Role::ALL {
            let decision = guard(state.current(), required);
            if signed == required {
                assert_eq!(decision, GuardDecision::Allow);
            } else {
                assert_eq!(decision, GuardDecision::RedirectToDashboard(signed));
            }
        }
    }
}

#[test]
fn wrong_role_is_never_sent_to_login() {
    for signed in Role::ALL {
        let state = signed_in(signed);
        for required in Role::ALL {
            assert_ne!(
                guard(state.current(), required),
                GuardDecision::RedirectToLogin
            );
        }
    }
}

#[test]
fn switching_role_replaces_the_session() {
    let mut state = signed_in(Role::Student);
    state.login(Role::Institution);
    assert_eq!(state.role(), Some(Role::Institution));
    assert!(guard(state.current(), Role::Institution).is_allowed());
    assert!(!guard(state.current(), Role::Student).is_allowed());
}

#[test]
fn settings_need_any_session() {
    let anonymous = SessionState::default();
    assert_eq!(
        evaluate(anonymous.current(), Access::Authenticated),
        GuardDecision::RedirectToLogin
    );
    for role in Role::ALL {
        let state = signed_in(role);
        assert!(evaluate(state.current(), Access::Authenticated).is_allowed());
    }
}

#[test]
fn public_views_ignore_the_session() {
    assert!(evaluate(None, Access::Public).is_allowed());
    let state = signed_in(Role::Teacher);
    assert!(evaluate(state.current(), Access::Public).is_allowed());
}
