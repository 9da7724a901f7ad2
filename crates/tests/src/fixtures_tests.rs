use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{logbook, Role, Session};

#[test]
fn mock_sessions_resolve_to_fixture_records() {
    let data = fixtures();
    let student = Session::mock(Role::Student);
    let teacher = Session::mock(Role::Teacher);
    assert_eq!(
        data.student(student.user_id).map(|s| s.name.as_str()),
        Some(student.display_name.as_str())
    );
    assert_eq!(
        data.teacher(teacher.user_id).map(|t| t.name.as_str()),
        Some(teacher.display_name.as_str())
    );
}

#[test]
fn mentees_follow_the_teacher_roster() {
    let data = fixtures();
    let teacher = data.teacher(1).unwrap();
    let ids: Vec<i64> = data.mentees(teacher).iter().map(|s| s.id).collect();
    assert_eq!(ids, teacher.students);
}

#[test]
fn logbook_references_known_students() {
    let data = fixtures();
    for entry in &data.logbook {
        assert!(
            data.student(entry.student_id).is_some(),
            "entry {} points at unknown student {}",
            entry.id,
            entry.student_id
        );
    }
}

#[test]
fn entry_ids_are_unique() {
    let data = fixtures();
    let mut ids: Vec<i64> = data.logbook.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), data.logbook.len());
}

#[test]
fn teacher_pending_queue_matches_fixture_data() {
    let data = fixtures();
    let teacher = data.teacher(1).unwrap();
    let pending: Vec<i64> = logbook::pending_for(&data.logbook, &teacher.students)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(pending, vec![3, 4, 6, 9, 10]);
}

#[test]
fn unknown_ids_resolve_to_nothing() {
    let data = fixtures();
    assert!(data.student(999).is_none());
    assert!(data.teacher(999).is_none());
    assert!(data.logbook_for(999).is_empty());
}
