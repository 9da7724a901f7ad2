use chrono::NaiveDate;
use shared_types::{catalog, Fixtures, NewEntry, Role, SessionState};

/// Fixture catalog; every scenario starts from the embedded mock data.
pub fn fixtures() -> &'static Fixtures {
    catalog().expect("embedded fixtures must parse")
}

/// Session state after signing in as `role`.
pub fn signed_in(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.login(role);
    state
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// A form that passes every submit check.
pub fn valid_entry(day: &str) -> NewEntry {
    NewEntry {
        date: day.to_string(),
        hours: "6".to_string(),
        description: "Wrote integration tests for the attendance sync job.".to_string(),
        artifacts: String::new(),
    }
}
