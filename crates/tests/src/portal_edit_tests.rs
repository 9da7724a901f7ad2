use crate::common::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{
    average_completion_rate, institution, ProfileForm, ReportKind, Role, Session,
    COMPLETION_CEILING, COMPLETION_FLOOR, DOWNLOAD_COMPLETE,
};

#[test]
fn profile_edits_for_every_role_validate_after_seeding() {
    for role in Role::ALL {
        let mut form = ProfileForm::for_session(&Session::mock(role), fixtures());
        form.phone = "  +91 90000 11111 ".to_string();
        let saved = form.validate().unwrap();
        assert_eq!(saved.phone, "+91 90000 11111");
    }
}

#[test]
fn clearing_email_blocks_the_save() {
    let mut form = ProfileForm::for_session(&Session::mock(Role::Teacher), fixtures());
    form.email.clear();
    let err = form.validate().unwrap_err();
    assert_eq!(err.field("email"), Some("Email is required"));
}

#[test]
fn repeated_refreshes_keep_fixture_analytics_plausible() {
    let mut current = fixtures().institution.clone();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        current = institution::refreshed(&current, &mut rng);
    }
    assert_eq!(current.enrollment_trend.len(), 5);
    assert!(current
        .completion_rate_by_dept
        .iter()
        .all(|r| (COMPLETION_FLOOR..=COMPLETION_CEILING).contains(&r.rate)));
    let average = average_completion_rate(&current);
    assert!((80..=100).contains(&average));
    assert_eq!(current.departments, fixtures().institution.departments);
}

#[test]
fn quick_nirf_export_announces_then_completes() {
    assert_eq!(
        ReportKind::Nirf.export_message("CSV"),
        "NIRF Report generated successfully! Downloading CSV..."
    );
    assert_eq!(
        DOWNLOAD_COMPLETE,
        "Download complete. File saved to your downloads folder."
    );
}
