//! Read-only mock data compiled into the binary.
//!
//! Every collection is parsed in full on first access and cached for the
//! life of the process. Views clone what they need into local state before
//! mutating anything.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::institution::Institution;
use crate::internship::Internship;
use crate::logbook::LogbookEntry;
use crate::notification::Notification;
use crate::student::Student;
use crate::teacher::Teacher;

const STUDENTS_JSON: &str = include_str!("../fixtures/students.json");
const TEACHERS_JSON: &str = include_str!("../fixtures/teachers.json");
const LOGBOOK_JSON: &str = include_str!("../fixtures/logbook.json");
const INTERNSHIPS_JSON: &str = include_str!("../fixtures/internships.json");
const INSTITUTION_JSON: &str = include_str!("../fixtures/institution.json");
const NOTIFICATIONS_JSON: &str = include_str!("../fixtures/notifications.json");

#[derive(Debug, Clone)]
pub struct Fixtures {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub logbook: Vec<LogbookEntry>,
    pub internships: Vec<Internship>,
    pub institution: Institution,
    pub notifications: Vec<Notification>,
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::internal(format!("Malformed {name} fixture: {e}")))
}

impl Fixtures {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            students: parse("students", STUDENTS_JSON)?,
            teachers: parse("teachers", TEACHERS_JSON)?,
            logbook: parse("logbook", LOGBOOK_JSON)?,
            internships: parse("internships", INTERNSHIPS_JSON)?,
            institution: parse("institution", INSTITUTION_JSON)?,
            notifications: parse("notifications", NOTIFICATIONS_JSON)?,
        })
    }

    pub fn student(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn teacher(&self, id: i64) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Students mentored by `teacher`, in mentee-list order. Unknown ids are
    /// skipped.
    pub fn mentees(&self, teacher: &Teacher) -> Vec<&Student> {
        teacher
            .students
            .iter()
            .filter_map(|id| self.student(*id))
            .collect()
    }

    pub fn logbook_for(&self, student_id: i64) -> Vec<LogbookEntry> {
        self.logbook
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect()
    }
}

static CATALOG: OnceLock<Result<Fixtures, AppError>> = OnceLock::new();

/// The shared fixture catalog, parsed on first call.
pub fn catalog() -> Result<&'static Fixtures, AppError> {
    CATALOG
        .get_or_init(|| {
            let loaded = Fixtures::load();
            if let Err(e) = &loaded {
                tracing::warn!(error = %e, "failed to load fixtures");
            }
            loaded
        })
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn bundled_fixtures_parse() {
        let fixtures = catalog().unwrap();
        assert!(!fixtures.students.is_empty());
        assert!(!fixtures.teachers.is_empty());
        assert!(!fixtures.logbook.is_empty());
        assert!(!fixtures.internships.is_empty());
        assert!(!fixtures.institution.departments.is_empty());
        assert!(!fixtures.notifications.is_empty());
    }

    #[test]
    fn mock_identities_exist_in_fixtures() {
        let fixtures = catalog().unwrap();
        assert_eq!(fixtures.student(1).unwrap().name, "Aditi Sharma");
        assert_eq!(fixtures.teacher(1).unwrap().name, "Dr. Ravi Kumar");
    }

    #[test]
    fn mentees_follow_teacher_list() {
        let fixtures = catalog().unwrap();
        let teacher = fixtures.teacher(1).unwrap();
        let ids: Vec<i64> = fixtures.mentees(teacher).iter().map(|s| s.id).collect();
        assert_eq!(ids, teacher.students);
    }

    #[test]
    fn logbook_for_filters_by_student() {
        let fixtures = catalog().unwrap();
        let entries = fixtures.logbook_for(1);
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.student_id == 1));
        assert!(fixtures.logbook_for(999).is_empty());
    }

    #[test]
    fn unknown_ids_are_none() {
        let fixtures = catalog().unwrap();
        assert!(fixtures.student(999).is_none());
        assert!(fixtures.teacher(999).is_none());
    }

    #[test]
    fn malformed_json_is_internal_error() {
        let err = parse::<Vec<Student>>("students", "[{").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert!(err.message.starts_with("Malformed students fixture"));
    }
}
