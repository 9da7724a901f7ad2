use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldErrors};

/// Minimum description length for a submitted entry.
pub const MIN_DESCRIPTION_LEN: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    Draft,
    Submitted,
    Verified,
    Rejected,
}

impl EntryStatus {
    pub const ALL: [EntryStatus; 4] = [
        EntryStatus::Draft,
        EntryStatus::Submitted,
        EntryStatus::Verified,
        EntryStatus::Rejected,
    ];

    /// Label shown on status badges.
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Draft => "Draft",
            EntryStatus::Submitted => "Pending",
            EntryStatus::Verified => "Verified",
            EntryStatus::Rejected => "Changes Requested",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Draft => "Draft",
            EntryStatus::Submitted => "Submitted",
            EntryStatus::Verified => "Verified",
            EntryStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogbookEntry {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub hours: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<String>,
    pub status: EntryStatus,
    #[serde(
        default,
        alias = "supervisorComments",
        skip_serializing_if = "Option::is_none"
    )]
    pub verifier_comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_date: Option<NaiveDate>,
}

/// Raw form input for a new logbook entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntry {
    pub date: String,
    pub hours: String,
    pub description: String,
    pub artifacts: String,
}

fn next_id(entries: &[LogbookEntry]) -> i64 {
    entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validate the form and append a `Submitted` entry.
pub fn submit(
    entries: &mut Vec<LogbookEntry>,
    student_id: i64,
    form: &NewEntry,
) -> Result<LogbookEntry, AppError> {
    let mut errors = FieldErrors::new();
    let date = parse_date(&form.date);
    if date.is_none() {
        errors.add("date", "Date is required");
    }
    let hours = match form.hours.trim() {
        "" => {
            errors.add("hours", "Hours spent is required");
            None
        }
        raw => match raw.parse::<u32>() {
            Ok(h) if h > 0 => Some(h),
            _ => {
                errors.add("hours", "Hours must be a positive whole number");
                None
            }
        },
    };
    if form.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        errors.add(
            "description",
            format!("Description must be at least {MIN_DESCRIPTION_LEN} characters"),
        );
    }
    errors.into_result("Logbook entry is incomplete")?;

    let (Some(date), Some(hours)) = (date, hours) else {
        return Err(AppError::internal("validated entry lost its fields"));
    };
    let entry = LogbookEntry {
        id: next_id(entries),
        student_id,
        date,
        hours,
        description: form.description.trim().to_string(),
        artifacts: optional(&form.artifacts),
        status: EntryStatus::Submitted,
        verifier_comments: None,
        verification_date: None,
    };
    tracing::info!(entry_id = entry.id, student_id, "logbook entry submitted");
    entries.push(entry.clone());
    Ok(entry)
}

/// Append a `Draft` entry. Only date and description are required.
pub fn save_draft(
    entries: &mut Vec<LogbookEntry>,
    student_id: i64,
    form: &NewEntry,
) -> Result<LogbookEntry, AppError> {
    let date = parse_date(&form.date);
    if date.is_none() || form.description.trim().is_empty() {
        return Err(AppError::bad_request(
            "Date and description are required for drafts",
        ));
    }
    let Some(date) = date else {
        return Err(AppError::internal("validated draft lost its date"));
    };
    let entry = LogbookEntry {
        id: next_id(entries),
        student_id,
        date,
        hours: form.hours.trim().parse().unwrap_or(0),
        description: form.description.trim().to_string(),
        artifacts: optional(&form.artifacts),
        status: EntryStatus::Draft,
        verifier_comments: None,
        verification_date: None,
    };
    tracing::debug!(entry_id = entry.id, student_id, "logbook draft saved");
    entries.push(entry.clone());
    Ok(entry)
}

/// Move a draft to `Submitted`.
pub fn submit_draft(entry: &mut LogbookEntry) -> Result<(), AppError> {
    if entry.status != EntryStatus::Draft {
        return Err(AppError::bad_request(format!(
            "Entry {} is not a draft",
            entry.id
        )));
    }
    entry.status = EntryStatus::Submitted;
    Ok(())
}

fn review(
    entry: &mut LogbookEntry,
    outcome: EntryStatus,
    comment: &str,
    today: NaiveDate,
) -> Result<(), AppError> {
    if entry.status != EntryStatus::Submitted {
        return Err(AppError::bad_request(format!(
            "Entry {} is {} and cannot be reviewed",
            entry.id,
            entry.status.as_str()
        )));
    }
    entry.status = outcome;
    entry.verifier_comments = optional(comment);
    entry.verification_date = Some(today);
    tracing::info!(entry_id = entry.id, status = outcome.as_str(), "logbook entry reviewed");
    Ok(())
}

/// Mark a submitted entry as verified.
pub fn verify(entry: &mut LogbookEntry, comment: &str, today: NaiveDate) -> Result<(), AppError> {
    review(entry, EntryStatus::Verified, comment, today)
}

/// Send a submitted entry back to the student.
pub fn request_changes(
    entry: &mut LogbookEntry,
    comment: &str,
    today: NaiveDate,
) -> Result<(), AppError> {
    review(entry, EntryStatus::Rejected, comment, today)
}

pub fn sorted_recent_first(entries: &[LogbookEntry]) -> Vec<LogbookEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted
}

/// Entries whose description or ISO date contains `query`, optionally
/// restricted to one status.
pub fn filter<'a>(
    entries: &'a [LogbookEntry],
    query: &str,
    status: Option<EntryStatus>,
) -> Vec<&'a LogbookEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| status.map_or(true, |s| e.status == s))
        .filter(|e| {
            needle.is_empty()
                || e.description.to_lowercase().contains(&needle)
                || e.date.to_string().contains(&needle)
        })
        .collect()
}

/// Submitted entries awaiting review from the given mentees.
pub fn pending_for<'a>(entries: &'a [LogbookEntry], mentee_ids: &[i64]) -> Vec<&'a LogbookEntry> {
    entries
        .iter()
        .filter(|e| e.status == EntryStatus::Submitted && mentee_ids.contains(&e.student_id))
        .collect()
}

pub fn total_hours<'a>(entries: impl IntoIterator<Item = &'a LogbookEntry>) -> u32 {
    entries.into_iter().map(|e| e.hours).sum()
}

pub fn count_by_status(entries: &[LogbookEntry], status: EntryStatus) -> usize {
    entries.iter().filter(|e| e.status == status).count()
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Logbook report as CSV, oldest entry first, with a trailing total row.
pub fn report_csv(entries: &[LogbookEntry]) -> String {
    let mut ordered: Vec<&LogbookEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| (e.date, e.id));

    let mut out = String::from("Date,Hours,Status,Description,Artifacts,Verifier comments\n");
    for e in &ordered {
        let row = [
            e.date.format("%Y-%m-%d").to_string(),
            e.hours.to_string(),
            e.status.as_str().to_string(),
            csv_field(&e.description),
            csv_field(e.artifacts.as_deref().unwrap_or_default()),
            csv_field(e.verifier_comments.as_deref().unwrap_or_default()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out.push_str(&format!("Total,{},,,,\n", total_hours(ordered.iter().copied())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(id: i64, student_id: i64, day: &str, status: EntryStatus) -> LogbookEntry {
        LogbookEntry {
            id,
            student_id,
            date: date(day),
            hours: 4,
            description: format!("Worked on task {id}"),
            artifacts: None,
            status,
            verifier_comments: None,
            verification_date: None,
        }
    }

    fn form(date: &str, hours: &str, description: &str) -> NewEntry {
        NewEntry {
            date: date.into(),
            hours: hours.into(),
            description: description.into(),
            artifacts: String::new(),
        }
    }

    #[test]
    fn submit_appends_with_next_id() {
        let mut entries = vec![entry(3, 1, "2024-09-01", EntryStatus::Verified)];
        let created = submit(
            &mut entries,
            1,
            &form("2024-09-05", "6", "Implemented the login flow"),
        )
        .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.status, EntryStatus::Submitted);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn submit_reports_every_invalid_field() {
        let mut entries = vec![];
        let err = submit(&mut entries, 1, &form("", "zero", "short")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("date"), Some("Date is required"));
        assert_eq!(
            err.field("hours"),
            Some("Hours must be a positive whole number")
        );
        assert_eq!(
            err.field("description"),
            Some("Description must be at least 10 characters")
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn submit_rejects_zero_hours() {
        let mut entries = vec![];
        let err = submit(&mut entries, 1, &form("2024-09-05", "0", "A long enough text")).unwrap_err();
        assert!(err.field("hours").is_some());
    }

    #[test]
    fn draft_needs_only_date_and_description() {
        let mut entries = vec![];
        let draft = save_draft(&mut entries, 1, &form("2024-09-05", "", "notes")).unwrap();
        assert_eq!(draft.hours, 0);
        assert_eq!(draft.status, EntryStatus::Draft);

        let err = save_draft(&mut entries, 1, &form("2024-09-05", "2", "  ")).unwrap_err();
        assert_eq!(err.message, "Date and description are required for drafts");
    }

    #[test]
    fn drafts_can_be_submitted_once() {
        let mut e = entry(1, 1, "2024-09-01", EntryStatus::Draft);
        submit_draft(&mut e).unwrap();
        assert_eq!(e.status, EntryStatus::Submitted);
        assert!(submit_draft(&mut e).is_err());
    }

    #[test]
    fn verify_sets_comment_and_date() {
        let mut e = entry(1, 1, "2024-09-01", EntryStatus::Submitted);
        verify(&mut e, "Good work", date("2024-09-10")).unwrap();
        assert_eq!(e.status, EntryStatus::Verified);
        assert_eq!(e.verifier_comments.as_deref(), Some("Good work"));
        assert_eq!(e.verification_date, Some(date("2024-09-10")));
    }

    #[test]
    fn request_changes_with_blank_comment_leaves_none() {
        let mut e = entry(1, 1, "2024-09-01", EntryStatus::Submitted);
        request_changes(&mut e, "   ", date("2024-09-10")).unwrap();
        assert_eq!(e.status, EntryStatus::Rejected);
        assert_eq!(e.verifier_comments, None);
    }

    #[test]
    fn only_submitted_entries_can_be_reviewed() {
        for status in [EntryStatus::Draft, EntryStatus::Verified, EntryStatus::Rejected] {
            let mut e = entry(1, 1, "2024-09-01", status);
            let err = verify(&mut e, "", date("2024-09-10")).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::BadRequest);
            assert_eq!(e.status, status);
        }
    }

    #[test]
    fn sorted_recent_first_orders_by_date() {
        let entries = vec![
            entry(1, 1, "2024-08-01", EntryStatus::Verified),
            entry(2, 1, "2024-09-01", EntryStatus::Submitted),
            entry(3, 1, "2024-08-15", EntryStatus::Draft),
        ];
        let ids: Vec<i64> = sorted_recent_first(&entries).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn filter_by_query_and_status() {
        let entries = vec![
            entry(1, 1, "2024-08-01", EntryStatus::Verified),
            entry(2, 1, "2024-09-01", EntryStatus::Submitted),
        ];
        assert_eq!(filter(&entries, "TASK 2", None).len(), 1);
        assert_eq!(filter(&entries, "2024-08", None)[0].id, 1);
        assert_eq!(filter(&entries, "", Some(EntryStatus::Submitted))[0].id, 2);
        assert!(filter(&entries, "task 1", Some(EntryStatus::Submitted)).is_empty());
    }

    #[test]
    fn pending_for_only_counts_submitted_mentee_entries() {
        let entries = vec![
            entry(1, 1, "2024-08-01", EntryStatus::Submitted),
            entry(2, 2, "2024-08-02", EntryStatus::Submitted),
            entry(3, 1, "2024-08-03", EntryStatus::Verified),
            entry(4, 9, "2024-08-04", EntryStatus::Submitted),
        ];
        let ids: Vec<i64> = pending_for(&entries, &[1, 2]).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn totals_and_counts() {
        let entries = vec![
            entry(1, 1, "2024-08-01", EntryStatus::Submitted),
            entry(2, 1, "2024-08-02", EntryStatus::Verified),
        ];
        assert_eq!(total_hours(&entries), 8);
        assert_eq!(count_by_status(&entries, EntryStatus::Verified), 1);
    }

    #[test]
    fn deserializes_supervisor_comments_alias() {
        let json = r#"{"id":1,"studentId":1,"date":"2024-08-01","hours":3,
            "description":"Lab work","status":"Verified","supervisorComments":"Nice"}"#;
        let e: LogbookEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.verifier_comments.as_deref(), Some("Nice"));
        assert_eq!(e.status.label(), "Verified");
    }

    #[test]
    fn report_csv_orders_rows_and_totals_hours() {
        let entries = vec![
            entry(2, 1, "2024-09-10", EntryStatus::Submitted),
            entry(1, 1, "2024-09-02", EntryStatus::Verified),
        ];
        let csv = report_csv(&entries);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Hours,Status,Description,Artifacts,Verifier comments");
        assert_eq!(lines[1], "2024-09-02,4,Verified,Worked on task 1,,");
        assert_eq!(lines[2], "2024-09-10,4,Submitted,Worked on task 2,,");
        assert_eq!(lines[3], "Total,8,,,,");
    }

    #[test]
    fn report_csv_quotes_commas_and_quotes() {
        let mut e = entry(1, 1, "2024-09-02", EntryStatus::Rejected);
        e.description = "Fixed the \"login\" bug, then wrote tests".into();
        e.verifier_comments = Some("Add screenshots".into());
        let csv = report_csv(&[e]);
        assert!(csv.contains(
            "\"Fixed the \"\"login\"\" bug, then wrote tests\",,Add screenshots"
        ));
    }

    #[test]
    fn report_csv_of_nothing_is_header_and_zero_total() {
        assert_eq!(
            report_csv(&[]),
            "Date,Hours,Status,Description,Artifacts,Verifier comments\nTotal,0,,,,\n"
        );
    }
}
