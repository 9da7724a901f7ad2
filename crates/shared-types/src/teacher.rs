use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldErrors};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub apar_id: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    /// Ids of mentored students.
    #[serde(default)]
    pub students: Vec<i64>,
    #[serde(default)]
    pub students_mentored: u32,
    #[serde(default)]
    pub avg_feedback: f64,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub journal: String,
    pub year: i32,
    #[serde(default)]
    pub citations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub co_authors: Vec<String>,
}

impl Teacher {
    pub fn total_citations(&self) -> u32 {
        self.publications.iter().map(|p| p.citations).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublicationSort {
    #[default]
    Year,
    Citations,
    Title,
}

impl PublicationSort {
    pub const ALL: [PublicationSort; 3] = [
        PublicationSort::Year,
        PublicationSort::Citations,
        PublicationSort::Title,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PublicationSort::Year => "Year (Newest first)",
            PublicationSort::Citations => "Citations (Highest first)",
            PublicationSort::Title => "Title (A-Z)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PublicationSort::Year => "year",
            PublicationSort::Citations => "citations",
            PublicationSort::Title => "title",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

pub fn search_and_sort(pubs: &[Publication], query: &str, sort: PublicationSort) -> Vec<Publication> {
    let needle = query.trim().to_lowercase();
    let mut found: Vec<Publication> = pubs
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.journal.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    match sort {
        PublicationSort::Year => found.sort_by(|a, b| b.year.cmp(&a.year)),
        PublicationSort::Citations => found.sort_by(|a, b| b.citations.cmp(&a.citations)),
        PublicationSort::Title => found.sort_by_key(|p| p.title.to_lowercase()),
    }
    found
}

/// Raw form input for a new publication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPublication {
    pub title: String,
    pub journal: String,
    pub year: String,
    pub link: String,
    pub co_authors: String,
}

pub fn add(pubs: &mut Vec<Publication>, form: &NewPublication) -> Result<Publication, AppError> {
    let mut errors = FieldErrors::new();
    errors.require("title", &form.title, "Title is required");
    errors.require("journal", &form.journal, "Journal is required");
    let year = form.year.trim().parse::<i32>().ok().filter(|y| *y > 0);
    if year.is_none() {
        errors.add("year", "Enter a valid year");
    }
    errors.into_result("Please fill in all required fields")?;
    let Some(year) = year else {
        return Err(AppError::internal("validated publication lost its year"));
    };

    let link = form.link.trim();
    let publication = Publication {
        id: pubs.iter().map(|p| p.id).max().unwrap_or(0) + 1,
        title: form.title.trim().to_string(),
        journal: form.journal.trim().to_string(),
        year,
        citations: 0,
        link: (!link.is_empty()).then(|| link.to_string()),
        co_authors: form
            .co_authors
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect(),
    };
    tracing::info!(publication_id = publication.id, "publication added");
    pubs.push(publication.clone());
    Ok(publication)
}

pub fn remove(pubs: &mut Vec<Publication>, id: i64) -> Result<Publication, AppError> {
    let index = pubs
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| AppError::not_found(format!("Publication {id} not found")))?;
    tracing::info!(publication_id = id, "publication removed");
    Ok(pubs.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    fn publication(id: i64, title: &str, journal: &str, year: i32, citations: u32) -> Publication {
        Publication {
            id,
            title: title.into(),
            journal: journal.into(),
            year,
            citations,
            link: None,
            co_authors: vec![],
        }
    }

    fn sample() -> Vec<Publication> {
        vec![
            publication(1, "Graph Neural Networks", "IEEE Transactions", 2021, 40),
            publication(2, "adaptive Learning Systems", "Springer Education", 2023, 12),
            publication(3, "Cloud Scheduling", "IEEE Cloud", 2019, 88),
        ]
    }

    fn ids(pubs: &[Publication]) -> Vec<i64> {
        pubs.iter().map(|p| p.id).collect()
    }

    #[test]
    fn sorts_by_year_citations_and_title() {
        let pubs = sample();
        assert_eq!(ids(&search_and_sort(&pubs, "", PublicationSort::Year)), vec![2, 1, 3]);
        assert_eq!(ids(&search_and_sort(&pubs, "", PublicationSort::Citations)), vec![3, 1, 2]);
        assert_eq!(ids(&search_and_sort(&pubs, "", PublicationSort::Title)), vec![2, 3, 1]);
    }

    #[test]
    fn search_matches_journal() {
        let pubs = sample();
        assert_eq!(ids(&search_and_sort(&pubs, "ieee", PublicationSort::Year)), vec![1, 3]);
    }

    #[test]
    fn add_splits_co_authors_and_starts_at_zero_citations() {
        let mut pubs = sample();
        let created = add(
            &mut pubs,
            &NewPublication {
                title: "Peer Review at Scale".into(),
                journal: "ACM".into(),
                year: "2024".into(),
                link: String::new(),
                co_authors: " Anita Rao, , Vikram Singh ".into(),
            },
        )
        .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.citations, 0);
        assert_eq!(created.link, None);
        assert_eq!(created.co_authors, vec!["Anita Rao", "Vikram Singh"]);
        assert_eq!(pubs.len(), 4);
    }

    #[test]
    fn add_requires_title_journal_year() {
        let mut pubs = vec![];
        let err = add(&mut pubs, &NewPublication::default()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field("title").is_some());
        assert!(err.field("journal").is_some());
        assert!(err.field("year").is_some());
    }

    #[test]
    fn remove_by_id() {
        let mut pubs = sample();
        assert_eq!(remove(&mut pubs, 2).unwrap().id, 2);
        assert_eq!(ids(&pubs), vec![1, 3]);
        assert_eq!(remove(&mut pubs, 2).unwrap_err().kind, AppErrorKind::NotFound);
    }

    #[test]
    fn sort_keys_round_trip_with_year_fallback() {
        assert_eq!(PublicationSort::from_key("citations"), PublicationSort::Citations);
        assert_eq!(PublicationSort::from_key("bogus"), PublicationSort::Year);
    }
}
