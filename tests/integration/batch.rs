// Tests for batch generation

use std::time::{Duration, Instant};

use crate::common::{Call, Harness, rejected};
use rednote_dash::api::ApiError;
use rednote_dash::ui::toast::ToastKind;

fn batch_harness(selected: [bool; 5], count: u32) -> Harness {
    let mut h = Harness::started();
    h.backend.clear_calls();
    h.state.open_batch_dialog();
    h.state.batch.selected = selected;
    h.state.batch.set_count(count);
    h
}

#[test]
fn test_batch_issues_count_times_accounts_requests() {
    let mut h = batch_harness([true, true, false, false, false], 3);

    assert!(h.state.start_batch());
    h.settle();

    let calls = h.backend.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(
        calls,
        vec![
            Call::Generate("A".into()),
            Call::Generate("A".into()),
            Call::Generate("A".into()),
            Call::Generate("B".into()),
            Call::Generate("B".into()),
            Call::Generate("B".into()),
        ]
    );

    let run = h.state.batch.run.as_ref().unwrap();
    assert!(run.finished);
    assert_eq!((run.completed, run.total), (6, 6));
    assert_eq!(h.state.batch.status, "Batch generation complete!");
    assert!(h.state.toasts.contains(ToastKind::Success, "Successfully generated 6 posts!"));
}

#[test]
fn test_batch_completes_despite_failures() {
    let failures = [
        Err(ApiError::Transport("timeout".into())),
        Ok(rejected("quota exceeded")),
    ];
    let mut h = batch_harness([true, true, false, false, false], 3);
    for reply in failures {
        h.backend.queue_generate(reply);
    }

    h.state.start_batch();
    h.settle();

    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 6);
    assert!(h.state.batch.run.as_ref().unwrap().finished);
    // Attempted count, not confirmed successes
    assert!(h.state.toasts.contains(ToastKind::Success, "Successfully generated 6 posts!"));
}

#[test]
fn test_batch_status_before_results() {
    let mut h = batch_harness([false, false, true, false, false], 4);

    h.state.start_batch();
    assert_eq!(h.state.batch.status, "Generated 0 of 4 posts...");
    assert!(h.state.batch.is_running());

    // Drain only the first progress report
    h.state.drain_api_messages(1);
    assert_eq!(h.state.batch.status, "Generated 1 of 4 posts...");
    assert!(h.state.batch.is_running());
    assert!(!h.state.start_batch(), "one run at a time");
}

#[test]
fn test_dialog_closes_two_seconds_after_completion() {
    let mut h = batch_harness([true, false, false, false, false], 1);

    h.state.start_batch();
    h.settle();
    assert!(h.state.batch.visible);

    h.state.tick(Instant::now() + Duration::from_millis(500));
    assert!(h.state.batch.visible, "dialog lingers");

    h.state.tick(Instant::now() + Duration::from_millis(2100));
    assert!(!h.state.batch.visible);
    assert!(h.state.batch.run.is_none());
}

#[test]
fn test_closing_early_cancels_auto_dismiss() {
    let mut h = batch_harness([true, false, false, false, false], 1);

    h.state.start_batch();
    h.settle();
    h.state.close_batch_dialog();
    h.state.open_batch_dialog();

    h.state.tick(Instant::now() + Duration::from_secs(3));
    assert!(h.state.batch.visible, "reopened dialog is not dismissed by the old timer");
}

#[test]
fn test_restart_during_linger_keeps_new_run_open() {
    let mut h = batch_harness([true, false, false, false, false], 1);

    h.state.start_batch();
    h.settle();
    assert!(h.state.batch.dismiss_task.is_some());

    // Start again inside the 2 s window, then hold the second run open
    assert!(h.state.start_batch());
    assert!(h.state.batch.dismiss_task.is_none());

    h.state.tick(Instant::now() + Duration::from_millis(2100));
    assert!(h.state.batch.visible, "first run's timer must not close the second run");
    assert!(h.state.batch.is_running());

    // The second run settles and gets its own linger
    h.settle();
    assert!(h.state.batch.visible);
    h.state.tick(Instant::now() + Duration::from_millis(2100));
    assert!(!h.state.batch.visible);
}

#[test]
fn test_empty_selection_reports_zero() {
    let mut h = batch_harness([false; 5], 10);

    h.state.start_batch();
    h.settle();

    assert!(h.backend.calls().is_empty());
    assert!(h.state.toasts.contains(ToastKind::Success, "Successfully generated 0 posts!"));
}

#[test]
fn test_count_is_clamped() {
    let mut h = Harness::new();

    h.state.batch.set_count(0);
    assert_eq!(h.state.batch.count, 1);
    h.state.batch.set_count(500);
    assert_eq!(h.state.batch.count, 50);
}
