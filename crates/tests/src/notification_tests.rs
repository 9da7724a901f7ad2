use crate::common::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{mark_all_read, mark_read, relative_time, unread_count};

#[test]
fn reading_notifications_clears_the_badge() {
    let mut items = fixtures().notifications.clone();
    assert_eq!(unread_count(&items), 3);

    assert!(mark_read(&mut items, 1));
    assert_eq!(unread_count(&items), 2);

    mark_all_read(&mut items);
    assert_eq!(unread_count(&items), 0);
}

#[test]
fn relative_time_uses_the_fixture_timestamps() {
    let items = &fixtures().notifications;
    let now = Utc.with_ymd_and_hms(2024, 10, 5, 18, 20, 0).unwrap();
    assert_eq!(relative_time(items[4].timestamp, now), "2 hours ago");
    assert_eq!(relative_time(items[3].timestamp, now), "2 days ago");
    assert_eq!(relative_time(items[0].timestamp, now), "24 days ago");
}
