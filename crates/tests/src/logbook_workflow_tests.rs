use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{logbook, AppErrorKind, EntryStatus, NewEntry};

#[test]
fn submitted_entry_is_verified_by_mentor() {
    let mut entries = fixtures().logbook.clone();
    let created = logbook::submit(&mut entries, 1, &valid_entry("2024-10-07")).unwrap();
    assert_eq!(created.status, EntryStatus::Submitted);
    assert_eq!(created.id, 12);

    let entry = entries.iter_mut().find(|e| e.id == created.id).unwrap();
    logbook::verify(entry, "Nice coverage", date(2024, 10, 8)).unwrap();
    assert_eq!(entry.status, EntryStatus::Verified);
    assert_eq!(entry.verifier_comments.as_deref(), Some("Nice coverage"));
    assert_eq!(entry.verification_date, Some(date(2024, 10, 8)));
}

#[test]
fn draft_moves_through_submission_to_rejection() {
    let mut entries = Vec::new();
    let draft = NewEntry {
        date: "2024-10-01".to_string(),
        description: "Outline only".to_string(),
        ..NewEntry::default()
    };
    let saved = logbook::save_draft(&mut entries, 1, &draft).unwrap();
    assert_eq!(saved.status, EntryStatus::Draft);
    assert_eq!(saved.hours, 0);

    let entry = &mut entries[0];
    logbook::submit_draft(entry).unwrap();
    assert_eq!(entry.status, EntryStatus::Submitted);

    logbook::request_changes(entry, "", date(2024, 10, 2)).unwrap();
    assert_eq!(entry.status, EntryStatus::Rejected);
    assert_eq!(entry.verifier_comments, None);
}

#[test]
fn reviewed_entries_cannot_be_reviewed_again() {
    let mut entries = fixtures().logbook.clone();
    let verified = entries.iter_mut().find(|e| e.id == 1).unwrap();
    let err = logbook::verify(verified, "again", date(2024, 10, 1)).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(verified.status, EntryStatus::Verified);
}

#[test]
fn invalid_form_adds_nothing() {
    let mut entries = fixtures().logbook.clone();
    let before = entries.len();
    let form = NewEntry {
        date: "2024-10-07".to_string(),
        hours: "0".to_string(),
        description: "short".to_string(),
        artifacts: String::new(),
    };
    let err = logbook::submit(&mut entries, 1, &form).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("hours").is_some());
    assert!(err.field("description").is_some());
    assert!(err.field("date").is_none());
    assert_eq!(entries.len(), before);
}

#[test]
fn student_stats_follow_their_own_entries() {
    let data = fixtures();
    let mine = data.logbook_for(1);
    assert_eq!(logbook::total_hours(&mine), 29);
    assert_eq!(logbook::count_by_status(&mine, EntryStatus::Verified), 2);
    assert_eq!(logbook::count_by_status(&mine, EntryStatus::Submitted), 2);
    assert_eq!(logbook::count_by_status(&mine, EntryStatus::Draft), 1);
}

#[test]
fn newest_entries_come_first_and_filter_by_status() {
    let mine = fixtures().logbook_for(1);
    let sorted = logbook::sorted_recent_first(&mine);
    let ids: Vec<i64> = sorted.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);

    let submitted: Vec<i64> = logbook::filter(&sorted, "", Some(EntryStatus::Submitted))
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(submitted, vec![4, 3]);

    let by_date: Vec<i64> = logbook::filter(&sorted, "2024-09-09", None)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(by_date, vec![2]);
}
