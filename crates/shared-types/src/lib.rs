pub mod config;
pub mod error;

// Session and access control
pub mod guard;
pub mod navigation;
pub mod notice;
pub mod registration;
pub mod role;
pub mod session;

// Portal domain modules
pub mod fixtures;
pub mod institution;
pub mod internship;
pub mod logbook;
pub mod notification;
pub mod profile;
pub mod report;
pub mod student;
pub mod teacher;

pub use config::*;
pub use error::*;

pub use guard::*;
pub use navigation::*;
pub use notice::*;
pub use registration::*;
pub use role::*;
pub use session::*;

pub use fixtures::{catalog, Fixtures};
pub use institution::*;
pub use notification::*;
pub use profile::*;
pub use report::*;

// These modules share free-function names (`filter`, `search`, ...), so only
// their types are lifted to the crate root.
pub use internship::{ApplicationStatus, Internship, InternshipTab};
pub use logbook::{EntryStatus, LogbookEntry, NewEntry};
pub use student::{Badge, CgpaBands, Mentorship, SemesterProgress, Skill, Student};
pub use teacher::{NewPublication, Publication, PublicationSort, Teacher};
