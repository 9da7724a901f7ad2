use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldErrors};

/// A student record from the read-only fixtures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub year: u8,
    pub cgpa: f64,
    /// Attendance percentage.
    pub attendance: f64,
    pub aadhar_masked: String,
    #[serde(default)]
    pub active_internships: u32,
    #[serde(default)]
    pub badges_earned: Vec<Badge>,
    #[serde(default)]
    pub progress: Vec<SemesterProgress>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentorship: Option<Mentorship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_earned: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemesterProgress {
    pub semester: String,
    pub cgpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Proficiency out of 100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mentorship {
    pub mentor_id: i64,
    pub next_meeting: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

impl Student {
    pub fn class_rank_label(&self) -> String {
        self.class_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// First letter of the name for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Case-insensitive match on name or department. An empty query keeps everyone.
pub fn search<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    let needle = query.trim().to_lowercase();
    students
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.department.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Head counts per CGPA band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CgpaBands {
    /// 9.0 and above.
    pub outstanding: usize,
    /// 8.0 up to 9.0.
    pub excellent: usize,
    /// 7.0 up to 8.0.
    pub good: usize,
    /// Below 7.0.
    pub below: usize,
}

impl CgpaBands {
    pub fn total(&self) -> usize {
        self.outstanding + self.excellent + self.good + self.below
    }

    /// Share of a band as a whole percentage of the total, 0 when empty.
    pub fn percent(&self, count: usize) -> u32 {
        match self.total() {
            0 => 0,
            total => ((count as f64 / total as f64) * 100.0).round() as u32,
        }
    }
}

pub fn cgpa_bands<'a>(students: impl IntoIterator<Item = &'a Student>) -> CgpaBands {
    students
        .into_iter()
        .fold(CgpaBands::default(), |mut bands, s| {
            if s.cgpa >= 9.0 {
                bands.outstanding += 1;
            } else if s.cgpa >= 8.0 {
                bands.excellent += 1;
            } else if s.cgpa >= 7.0 {
                bands.good += 1;
            } else {
                bands.below += 1;
            }
            bands
        })
}

/// Students whose CGPA calls for academic support.
pub fn needs_attention<'a>(students: impl IntoIterator<Item = &'a Student>) -> usize {
    students.into_iter().filter(|s| s.cgpa < 7.5).count()
}

/// Mentees with a meeting on or after `today`, soonest first.
pub fn upcoming_meetings<'a>(
    students: impl IntoIterator<Item = &'a Student>,
    today: NaiveDate,
) -> Vec<(&'a Student, NaiveDate)> {
    let mut meetings: Vec<_> = students
        .into_iter()
        .filter_map(|s| s.mentorship.as_ref().map(|m| (s, m.next_meeting)))
        .filter(|(_, date)| *date >= today)
        .collect();
    meetings.sort_by_key(|(_, date)| *date);
    meetings
}

/// Replace the mentorship notes. Students without a mentor have nowhere to
/// keep them.
pub fn update_notes(student: &mut Student, notes: &str) -> Result<(), AppError> {
    let Some(mentorship) = student.mentorship.as_mut() else {
        return Err(AppError::bad_request(format!(
            "{} has no mentor assigned",
            student.name
        )));
    };
    mentorship.notes = notes.trim().to_string();
    tracing::info!(student_id = student.id, "mentorship notes updated");
    Ok(())
}

/// Set the next mentorship meeting from a `YYYY-MM-DD` form value. A student
/// without a mentorship gets one with `mentor_id`.
pub fn schedule_meeting(
    student: &mut Student,
    mentor_id: i64,
    raw_date: &str,
) -> Result<NaiveDate, AppError> {
    let mut errors = FieldErrors::new();
    let parsed = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d").ok();
    if parsed.is_none() {
        errors.add("meeting_date", "Choose a valid meeting date");
    }
    errors.into_result("Meeting could not be scheduled")?;
    let Some(date) = parsed else {
        return Err(AppError::internal("validated meeting lost its date"));
    };

    match student.mentorship.as_mut() {
        Some(m) => m.next_meeting = date,
        None => {
            student.mentorship = Some(Mentorship {
                mentor_id,
                next_meeting: date,
                notes: String::new(),
            })
        }
    }
    tracing::info!(student_id = student.id, %date, "mentorship meeting scheduled");
    Ok(date)
}
