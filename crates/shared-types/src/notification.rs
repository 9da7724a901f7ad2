use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Returns `false` when no notification has that id.
pub fn mark_read(notifications: &mut [Notification], id: i64) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(n) => {
            n.read = true;
            true
        }
        None => false,
    }
}

pub fn mark_all_read(notifications: &mut [Notification]) {
    notifications.iter_mut().for_each(|n| n.read = true);
}

/// Coarse "time ago" text, e.g. `"3 hours ago"`.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed.num_days() < 30 {
        plural(elapsed.num_days(), "day")
    } else {
        timestamp.format("%d %b %Y").to_string()
    }
}
