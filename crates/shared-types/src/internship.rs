use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApplicationStatus {
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::NotApplied => "Not Applied",
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
        }
    }

    pub fn has_applied(&self) -> bool {
        !matches!(self, ApplicationStatus::NotApplied)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub description: String,
    pub deadline: NaiveDate,
    pub status: ApplicationStatus,
}

/// Tabs on the internship listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InternshipTab {
    #[default]
    Available,
    Applied,
    All,
}

impl InternshipTab {
    pub const ALL: [InternshipTab; 3] = [
        InternshipTab::Available,
        InternshipTab::Applied,
        InternshipTab::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InternshipTab::Available => "Available",
            InternshipTab::Applied => "Applied",
            InternshipTab::All => "All",
        }
    }

    fn accepts(&self, status: ApplicationStatus) -> bool {
        match self {
            InternshipTab::Available => !status.has_applied(),
            InternshipTab::Applied => status.has_applied(),
            InternshipTab::All => true,
        }
    }
}

/// Apply search, location and tab filters. `location` of `None` keeps every
/// location.
pub fn filter<'a>(
    internships: &'a [Internship],
    query: &str,
    location: Option<&str>,
    tab: InternshipTab,
) -> Vec<&'a Internship> {
    let needle = query.trim().to_lowercase();
    internships
        .iter()
        .filter(|i| {
            needle.is_empty()
                || i.title.to_lowercase().contains(&needle)
                || i.company.to_lowercase().contains(&needle)
        })
        .filter(|i| location.map_or(true, |loc| i.location == loc))
        .filter(|i| tab.accepts(i.status))
        .collect()
}

/// Distinct locations in first-seen order.
pub fn locations(internships: &[Internship]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for internship in internships {
        if !seen.contains(&internship.location) {
            seen.push(internship.location.clone());
        }
    }
    seen
}

/// Submit an application for the internship with `id`.
pub fn apply(internships: &mut [Internship], id: i64) -> Result<&Internship, AppError> {
    let internship = internships
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| AppError::not_found(format!("Internship {id} not found")))?;
    if internship.status.has_applied() {
        return Err(AppError::conflict(format!(
            "Already applied to {}",
            internship.title
        )));
    }
    internship.status = ApplicationStatus::Applied;
    tracing::info!(internship_id = id, company = %internship.company, "internship application submitted");
    Ok(&*internship)
}
