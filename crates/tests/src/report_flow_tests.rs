use pretty_assertions::assert_eq;
use shared_types::{ReportJob, ReportKind};

#[test]
fn generation_completes_after_enough_ticks() {
    let mut job = ReportJob::start(ReportKind::Nirf);
    let mut seen = vec![job.progress()];
    while job.is_generating() {
        job = job.tick(25);
        seen.push(job.progress());
    }
    assert_eq!(seen, vec![0, 25, 50, 75, 100]);
    assert_eq!(job, ReportJob::Complete(ReportKind::Nirf));
    assert_eq!(
        ReportKind::Nirf.generated_message(),
        "NIRF Report generated successfully!"
    );
}

#[test]
fn uneven_steps_clamp_at_completion() {
    let job = ReportJob::Generating {
        kind: ReportKind::Aishe,
        progress: 95,
    };
    assert_eq!(job.tick(10), ReportJob::Complete(ReportKind::Aishe));
}

#[test]
fn idle_and_finished_jobs_ignore_ticks() {
    assert_eq!(ReportJob::Idle.tick(10), ReportJob::Idle);
    let done = ReportJob::Complete(ReportKind::Apar);
    assert_eq!(done.tick(10), done);
}

#[test]
fn restarting_resets_progress() {
    let job = ReportJob::start(ReportKind::Apar).tick(40);
    assert_eq!(job.progress(), 40);
    let restarted = ReportJob::start(ReportKind::Nirf);
    assert_eq!(restarted.progress(), 0);
}

#[test]
fn report_keys_round_trip() {
    for kind in ReportKind::ALL {
        assert_eq!(ReportKind::from_key(kind.key()), Some(kind));
        assert_eq!(kind.sections().len(), 10);
    }
}
