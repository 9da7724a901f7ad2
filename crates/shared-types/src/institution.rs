use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest swing applied to a year's enrollment on refresh.
pub const ENROLLMENT_JITTER: i64 = 10;
/// Largest swing applied to a completion rate on refresh, in points.
pub const COMPLETION_JITTER: i32 = 3;
/// Completion rates stay within this band after a refresh.
pub const COMPLETION_FLOOR: f64 = 80.0;
pub const COMPLETION_CEILING: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub name: String,
    pub full_name: String,
    pub location: String,
    pub nirf_rank: u32,
    pub total_students: u32,
    pub total_teachers: u32,
    pub active_govt_schemes: u32,
    pub placement_rate: f64,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub enrollment_trend: Vec<EnrollmentPoint>,
    #[serde(default)]
    pub completion_rate_by_dept: Vec<CompletionRate>,
    #[serde(default)]
    pub schemes: Vec<Scheme>,
    #[serde(default)]
    pub scheme_usage_heatmap: Vec<SchemeUsage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub students: u32,
    pub teachers: u32,
    pub placement_rate: f64,
}

impl Department {
    pub fn student_teacher_ratio(&self) -> f64 {
        if self.teachers == 0 {
            0.0
        } else {
            self.students as f64 / self.teachers as f64
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentPoint {
    pub year: i32,
    pub students: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRate {
    pub department: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scheme {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemeUsage {
    pub scheme: String,
    pub usage: Vec<DepartmentUsage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentUsage {
    pub department: String,
    /// 0 (unused) through 1 (saturated).
    pub intensity: f64,
}

/// Mean completion rate across departments, rounded; 0 with no departments.
pub fn average_completion_rate(institution: &Institution) -> u32 {
    let rates = &institution.completion_rate_by_dept;
    if rates.is_empty() {
        return 0;
    }
    let sum: f64 = rates.iter().map(|r| r.rate).sum();
    (sum / rates.len() as f64).round() as u32
}

/// Signed difference between a department's placement rate and the
/// institution-wide rate, in percentage points.
pub fn placement_delta(dept: &Department, institution: &Institution) -> f64 {
    dept.placement_rate - institution.placement_rate
}

/// Usage intensity of `scheme` within `department`, 0 when not recorded.
pub fn scheme_intensity(institution: &Institution, scheme: &str, department: &str) -> f64 {
    institution
        .scheme_usage_heatmap
        .iter()
        .find(|s| s.scheme == scheme)
        .and_then(|s| s.usage.iter().find(|u| u.department == department))
        .map_or(0.0, |u| u.intensity)
}

/// Year-over-year enrollment growth of the last two trend points, in percent.
pub fn enrollment_growth(institution: &Institution) -> Option<f64> {
    let trend = &institution.enrollment_trend;
    let [.., previous, latest] = trend.as_slice() else {
        return None;
    };
    if previous.students == 0 {
        return None;
    }
    Some((latest.students as f64 - previous.students as f64) / previous.students as f64 * 100.0)
}

/// Simulated re-fetch of the analytics series.
///
/// Every enrollment point moves by at most [`ENROLLMENT_JITTER`] students and
/// every completion rate by at most [`COMPLETION_JITTER`] points, clamped to
/// the completion band. Everything else is carried over unchanged.
pub fn refreshed<R: Rng + ?Sized>(institution: &Institution, rng: &mut R) -> Institution {
    let mut next = institution.clone();
    for point in &mut next.enrollment_trend {
        let shift = rng.gen_range(-ENROLLMENT_JITTER..ENROLLMENT_JITTER);
        point.students = (i64::from(point.students) + shift).max(0) as u32;
    }
    for rate in &mut next.completion_rate_by_dept {
        let shift = f64::from(rng.gen_range(-COMPLETION_JITTER..COMPLETION_JITTER));
        rate.rate = (rate.rate + shift).clamp(COMPLETION_FLOOR, COMPLETION_CEILING);
    }
    tracing::debug!(
        years = next.enrollment_trend.len(),
        departments = next.completion_rate_by_dept.len(),
        "institution analytics refreshed"
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn institution() -> Institution {
        Institution {
            name: "NIAMT".into(),
            full_name: "National Institute".into(),
            location: "Ranchi".into(),
            nirf_rank: 42,
            total_students: 1200,
            total_teachers: 80,
            active_govt_schemes: 6,
            placement_rate: 80.0,
            departments: vec![
                Department {
                    name: "CSE".into(),
                    students: 400,
                    teachers: 20,
                    placement_rate: 92.5,
                },
                Department {
                    name: "ME".into(),
                    students: 300,
                    teachers: 0,
                    placement_rate: 71.0,
                },
            ],
            enrollment_trend: vec![
                EnrollmentPoint { year: 2022, students: 1000 },
                EnrollmentPoint { year: 2023, students: 1100 },
            ],
            completion_rate_by_dept: vec![
                CompletionRate { department: "CSE".into(), rate: 91.0 },
                CompletionRate { department: "ME".into(), rate: 84.0 },
            ],
            schemes: vec![Scheme { id: 1, name: "PMKVY".into() }],
            scheme_usage_heatmap: vec![SchemeUsage {
                scheme: "PMKVY".into(),
                usage: vec![DepartmentUsage { department: "CSE".into(), intensity: 0.8 }],
            }],
        }
    }

    #[test]
    fn average_completion_rounds() {
        assert_eq!(average_completion_rate(&institution()), 88);
    }

    #[test]
    fn average_completion_empty_is_zero() {
        let mut inst = institution();
        inst.completion_rate_by_dept.clear();
        assert_eq!(average_completion_rate(&inst), 0);
    }

    #[test]
    fn placement_delta_is_signed() {
        let inst = institution();
        assert_eq!(placement_delta(&inst.departments[0], &inst), 12.5);
        assert_eq!(placement_delta(&inst.departments[1], &inst), -9.0);
    }

    #[test]
    fn scheme_intensity_defaults_to_zero() {
        let inst = institution();
        assert_eq!(scheme_intensity(&inst, "PMKVY", "CSE"), 0.8);
        assert_eq!(scheme_intensity(&inst, "PMKVY", "ME"), 0.0);
        assert_eq!(scheme_intensity(&inst, "Unknown", "CSE"), 0.0);
    }

    #[test]
    fn enrollment_growth_uses_last_two_years() {
        let growth = enrollment_growth(&institution()).unwrap();
        assert!((growth - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_guards_zero_teachers() {
        let inst = institution();
        assert_eq!(inst.departments[0].student_teacher_ratio(), 20.0);
        assert_eq!(inst.departments[1].student_teacher_ratio(), 0.0);
    }

    #[test]
    fn refresh_keeps_series_within_jitter() {
        let before = institution();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let after = refreshed(&before, &mut rng);
            for (old, new) in before.enrollment_trend.iter().zip(&after.enrollment_trend) {
                assert_eq!(old.year, new.year);
                let diff = i64::from(new.students) - i64::from(old.students);
                assert!(diff.abs() <= ENROLLMENT_JITTER, "enrollment moved by {diff}");
            }
            for (old, new) in before.completion_rate_by_dept.iter().zip(&after.completion_rate_by_dept) {
                assert_eq!(old.department, new.department);
                assert!((new.rate - old.rate).abs() <= f64::from(COMPLETION_JITTER));
                assert!((COMPLETION_FLOOR..=COMPLETION_CEILING).contains(&new.rate));
            }
        }
    }

    #[test]
    fn refresh_clamps_completion_band() {
        let mut inst = institution();
        inst.completion_rate_by_dept = vec![
            CompletionRate { department: "CSE".into(), rate: 100.0 },
            CompletionRate { department: "ME".into(), rate: 80.0 },
        ];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            inst = refreshed(&inst, &mut rng);
            for rate in &inst.completion_rate_by_dept {
                assert!((COMPLETION_FLOOR..=COMPLETION_CEILING).contains(&rate.rate));
            }
        }
    }

    #[test]
    fn refresh_leaves_headline_figures_alone() {
        let before = institution();
        let after = refreshed(&before, &mut StdRng::seed_from_u64(3));
        assert_eq!(after.departments, before.departments);
        assert_eq!(after.placement_rate, before.placement_rate);
        assert_eq!(after.total_students, before.total_students);
        assert_eq!(after.scheme_usage_heatmap, before.scheme_usage_heatmap);
    }

    #[test]
    fn refresh_is_reproducible_for_a_seed() {
        let before = institution();
        let a = refreshed(&before, &mut StdRng::seed_from_u64(42));
        let b = refreshed(&before, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn refresh_never_underflows_enrollment() {
        let mut inst = institution();
        inst.enrollment_trend = vec![EnrollmentPoint { year: 2024, students: 0 }];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let after = refreshed(&inst, &mut rng);
            assert!(after.enrollment_trend[0].students <= ENROLLMENT_JITTER as u32);
        }
    }
}
