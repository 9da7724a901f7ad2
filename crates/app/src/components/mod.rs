pub mod fixture_guard;
pub mod status_badge;

pub use fixture_guard::{FixtureError, RecordNotFound};
pub use status_badge::{ApplicationBadge, EntryBadge};
