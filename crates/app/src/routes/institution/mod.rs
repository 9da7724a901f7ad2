mod analytics;
mod dashboard;
mod refresh;
mod reports;

pub use analytics::InstitutionAnalytics;
pub use dashboard::InstitutionDashboard;
pub use reports::InstitutionReports;
