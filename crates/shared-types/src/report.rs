use chrono::NaiveDate;

/// Compliance reports the institution portal can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Nirf,
    Aishe,
    Apar,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Nirf, ReportKind::Aishe, ReportKind::Apar];

    pub fn key(&self) -> &'static str {
        match self {
            ReportKind::Nirf => "nirf",
            ReportKind::Aishe => "aishe",
            ReportKind::Apar => "apar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Nirf => "NIRF Report",
            ReportKind::Aishe => "AISHE Report",
            ReportKind::Apar => "APAR Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Nirf => {
                "National Institutional Ranking Framework report with key metrics for institutional ranking."
            }
            ReportKind::Aishe => {
                "All India Survey on Higher Education report for government statistics and policy planning."
            }
            ReportKind::Apar => {
                "Annual Performance Assessment Report for faculty and staff performance evaluation."
            }
        }
    }

    pub fn last_generated(&self) -> Option<NaiveDate> {
        match self {
            ReportKind::Nirf => NaiveDate::from_ymd_opt(2024, 9, 15),
            ReportKind::Aishe => NaiveDate::from_ymd_opt(2024, 8, 22),
            ReportKind::Apar => NaiveDate::from_ymd_opt(2024, 10, 1),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ReportKind::Nirf | ReportKind::Aishe => "Complete",
            ReportKind::Apar => "In Progress",
        }
    }

    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Nirf => &[
                "Institutional Information",
                "Student Strength",
                "Faculty Information",
                "Research Publications",
                "Sponsored Research",
                "Consultancy Projects",
                "Executive Development Programs",
                "Patents",
                "Financial Resources",
                "Facilities",
            ],
            ReportKind::Aishe => &[
                "Basic Institution Details",
                "Geographical Reference",
                "Staff Information",
                "Programme Information",
                "Student Enrollment",
                "Examination Results",
                "Financial Information",
                "Infrastructure",
                "Scholarship/Fellowship",
                "Availability of Hostels",
            ],
            ReportKind::Apar => &[
                "Personal Information",
                "Academic Qualifications",
                "Teaching Activities",
                "Research Activities",
                "Administrative Responsibilities",
                "Extension Activities",
                "Professional Development",
                "Contributions to Corporate Life",
                "Assessment by Department Head",
                "Assessment by Institution Head",
            ],
        }
    }

    /// Notice text once generation finishes.
    pub fn generated_message(&self) -> String {
        format!("{} generated successfully!", self.name())
    }

    /// Notice text for a one-click export that starts downloading at once.
    pub fn export_message(&self, format: &str) -> String {
        format!("{} generated successfully! Downloading {format}...", self.name())
    }
}

/// Follow-up notice once a one-click export has finished downloading.
pub const DOWNLOAD_COMPLETE: &str = "Download complete. File saved to your downloads folder.";

/// Output formats offered next to the generate button.
pub const REPORT_FORMATS: [&str; 3] = ["PDF", "Excel", "CSV"];

/// Progress of one simulated report generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportJob {
    #[default]
    Idle,
    Generating { kind: ReportKind, progress: u8 },
    Complete(ReportKind),
}

impl ReportJob {
    /// Begin generating `kind`, restarting any job in flight.
    pub fn start(kind: ReportKind) -> Self {
        tracing::info!(report = kind.key(), "report generation started");
        ReportJob::Generating { kind, progress: 0 }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, ReportJob::Generating { .. })
    }

    pub fn progress(&self) -> u8 {
        match self {
            ReportJob::Idle => 0,
            ReportJob::Generating { progress, .. } => *progress,
            ReportJob::Complete(_) => 100,
        }
    }

    /// Advance by `step` percent. Reaching 100 completes the job; ticking an
    /// idle or finished job changes nothing.
    pub fn tick(self, step: u8) -> Self {
        match self {
            ReportJob::Generating { kind, progress } => {
                let next = progress.saturating_add(step.max(1));
                if next >= 100 {
                    tracing::info!(report = kind.key(), "report generation complete");
                    ReportJob::Complete(kind)
                } else {
                    ReportJob::Generating {
                        kind,
                        progress: next,
                    }
                }
            }
            other => other,
        }
    }
}
