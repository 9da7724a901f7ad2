use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{internship, AppErrorKind, ApplicationStatus, InternshipTab};

fn ids(found: &[&shared_types::Internship]) -> Vec<i64> {
    found.iter().map(|i| i.id).collect()
}

#[test]
fn applying_moves_a_listing_between_tabs() {
    let mut listings = fixtures().internships.clone();
    let available = internship::filter(&listings, "", None, InternshipTab::Available);
    assert_eq!(ids(&available), vec![1, 4, 5, 6]);

    let applied = internship::apply(&mut listings, 4).unwrap();
    assert_eq!(applied.status, ApplicationStatus::Applied);

    let available = internship::filter(&listings, "", None, InternshipTab::Available);
    assert_eq!(ids(&available), vec![1, 5, 6]);
    let applied = internship::filter(&listings, "", None, InternshipTab::Applied);
    assert_eq!(ids(&applied), vec![2, 3, 4]);
}

#[test]
fn second_application_conflicts() {
    let mut listings = fixtures().internships.clone();
    let err = internship::apply(&mut listings, 3).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(listings[2].status, ApplicationStatus::InterviewScheduled);
}

#[test]
fn unknown_listing_is_not_found() {
    let mut listings = fixtures().internships.clone();
    let err = internship::apply(&mut listings, 42).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn search_and_location_combine() {
    let listings = &fixtures().internships;
    let found = internship::filter(listings, "intern", Some("Bangalore"), InternshipTab::All);
    assert_eq!(ids(&found), vec![1, 3]);
    let found = internship::filter(listings, "zoho", None, InternshipTab::All);
    assert_eq!(ids(&found), vec![4]);
    let locations = internship::locations(listings);
    assert_eq!(locations.first().map(String::as_str), Some("Bangalore"));
    assert_eq!(locations.len(), 5);
}
