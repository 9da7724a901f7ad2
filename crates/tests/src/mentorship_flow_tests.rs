use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{student, AppErrorKind};

#[test]
fn mentor_reschedules_and_meeting_moves_in_upcoming_list() {
    let fixtures = fixtures();
    let teacher = fixtures.teacher(1).unwrap();
    let mut mentees: Vec<_> = fixtures.mentees(teacher).into_iter().cloned().collect();
    let today = date(2024, 10, 1);
    let first_before = student::upcoming_meetings(&mentees, today)[0].0.id;

    let target = mentees.iter_mut().find(|s| s.id != first_before).unwrap();
    let target_id = target.id;
    student::schedule_meeting(target, teacher.id, "2024-10-02").unwrap();

    let upcoming = student::upcoming_meetings(&mentees, today);
    assert_eq!(upcoming[0].0.id, target_id);
    assert_eq!(upcoming[0].1, date(2024, 10, 2));
}

#[test]
fn saved_notes_show_up_on_the_mentee_record() {
    let mut mentee = fixtures()
        .students
        .iter()
        .find(|s| s.mentorship.is_some())
        .unwrap()
        .clone();
    student::update_notes(&mut mentee, "Review internship report draft").unwrap();
    assert_eq!(
        mentee.mentorship.as_ref().map(|m| m.notes.as_str()),
        Some("Review internship report draft")
    );
}

#[test]
fn invalid_meeting_date_leaves_schedule_untouched() {
    let mut mentee = fixtures()
        .students
        .iter()
        .find(|s| s.mentorship.is_some())
        .unwrap()
        .clone();
    let before = mentee.mentorship.clone();
    let err = student::schedule_meeting(&mut mentee, 1, "next friday").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(mentee.mentorship, before);
}
