pub mod dashboard;
pub mod internships;
pub mod logbook;

pub use dashboard::StudentDashboard;
pub use internships::StudentInternships;
pub use logbook::StudentLogbook;

use crate::auth::use_session;

/// Fixture id of the signed-in student.
fn use_student_id() -> i64 {
    use_session().map_or(0, |s| s.user_id)
}
