use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{teacher, AppErrorKind, NewPublication, PublicationSort};

fn titles(sort: PublicationSort, pubs: &[shared_types::Publication]) -> Vec<i64> {
    teacher::search_and_sort(pubs, "", sort).iter().map(|p| p.id).collect()
}

#[test]
fn sort_orders_follow_the_selected_key() {
    let pubs = &fixtures().teacher(1).unwrap().publications;
    assert_eq!(titles(PublicationSort::Year, pubs), vec![1, 2, 3]);
    assert_eq!(titles(PublicationSort::Citations, pubs), vec![3, 2, 1]);
    assert_eq!(titles(PublicationSort::Title, pubs), vec![3, 1, 2]);
}

#[test]
fn added_publication_shows_up_and_can_be_removed() {
    let mut pubs = fixtures().teacher(1).unwrap().publications.clone();
    let form = NewPublication {
        title: "Mentor Feedback Loops in Internship Programmes".to_string(),
        journal: "Journal of Engineering Education".to_string(),
        year: "2024".to_string(),
        link: String::new(),
        co_authors: "Aditi Sharma, , Rahul Verma".to_string(),
    };
    let added = teacher::add(&mut pubs, &form).unwrap();
    assert_eq!(added.id, 4);
    assert_eq!(added.citations, 0);
    assert_eq!(added.link, None);
    assert_eq!(added.co_authors, vec!["Aditi Sharma", "Rahul Verma"]);
    assert_eq!(titles(PublicationSort::Year, &pubs)[0], 4);

    let found = teacher::search_and_sort(&pubs, "feedback", PublicationSort::Year);
    assert_eq!(found.len(), 1);

    teacher::remove(&mut pubs, 4).unwrap();
    assert_eq!(pubs.len(), 3);
    let err = teacher::remove(&mut pubs, 4).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn year_must_be_numeric() {
    let mut pubs = Vec::new();
    let form = NewPublication {
        title: "Title".to_string(),
        journal: "Journal".to_string(),
        year: "next year".to_string(),
        ..NewPublication::default()
    };
    let err = teacher::add(&mut pubs, &form).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("year").is_some());
    assert!(err.field("title").is_none());
}

#[test]
fn total_citations_sum_the_list() {
    let teacher = fixtures().teacher(1).unwrap();
    assert_eq!(teacher.total_citations(), 221);
}
