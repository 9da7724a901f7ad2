pub mod dashboard;
pub mod publications;
pub mod student_detail;
pub mod student_logbook;
pub mod students;

pub use dashboard::TeacherDashboard;
pub use publications::TeacherPublications;
pub use student_detail::TeacherStudentDetail;
pub use student_logbook::TeacherStudentLogbook;
pub use students::TeacherStudents;

use crate::auth::use_session;

/// Fixture id of the signed-in teacher.
fn use_teacher_id() -> i64 {
    use_session().map_or(0, |s| s.user_id)
}

/// Student id from a route segment. Anything that is not a positive integer
/// is treated as unknown.
fn parse_student_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
