// Tests for scheduled work: periodic refresh, quick generate and toast expiry

use std::time::{Duration, Instant};

use crate::common::{Call, Harness};
use rednote_dash::ui::View;
use rednote_dash::ui::state::QuickAction;

fn analytics_calls(h: &Harness) -> usize {
    h.backend.count(|c| *c == Call::Analytics)
}

#[test]
fn test_periodic_refresh_on_dashboard_and_analytics_only() {
    let mut h = Harness::new();
    let start = Instant::now();
    h.state.start(start);
    h.settle();
    h.backend.clear_calls();

    h.state.tick(start + Duration::from_secs(10));
    assert_eq!(analytics_calls(&h), 0, "not due yet");

    h.state.tick(start + Duration::from_secs(30));
    h.settle();
    assert_eq!(analytics_calls(&h), 1, "dashboard refreshes");

    h.state.navigate(View::Calendar);
    h.state.tick(start + Duration::from_secs(60));
    h.settle();
    assert_eq!(analytics_calls(&h), 1, "calendar skips the refresh");

    h.state.navigate(View::Analytics);
    h.state.tick(start + Duration::from_secs(90));
    h.settle();
    assert_eq!(analytics_calls(&h), 2);
}

#[test]
fn test_shutdown_cancels_timers() {
    let mut h = Harness::new();
    let start = Instant::now();
    h.state.start(start);
    h.settle();
    h.backend.clear_calls();

    h.state.shutdown();
    h.state.tick(start + Duration::from_secs(120));
    h.settle();

    assert!(h.backend.calls().is_empty());
    assert_eq!(h.state.scheduler.pending(), 0);
}

#[test]
fn test_quick_generate_fires_after_delay() {
    let mut h = Harness::started();
    h.backend.clear_calls();

    h.state.run_quick_action(QuickAction::QuickGenerate);
    assert_eq!(h.state.current_view, View::Generate);
    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 0);

    h.state.tick(Instant::now() + Duration::from_millis(350));
    assert!(h.state.generate.loading());
    h.settle();

    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 1);
    assert!(h.state.generate.result.is_some());
    assert!(h.state.generate.trigger_enabled());
}

#[test]
fn test_other_quick_actions() {
    let mut h = Harness::started();

    h.state.run_quick_action(QuickAction::AdvancedGenerate);
    assert_eq!(h.state.current_view, View::Generate);

    h.state.run_quick_action(QuickAction::ViewAnalytics);
    assert_eq!(h.state.current_view, View::Analytics);

    h.state.run_quick_action(QuickAction::BatchGenerate);
    assert!(h.state.batch.visible);
}

#[test]
fn test_toasts_expire_after_three_seconds() {
    let mut h = Harness::started();

    h.state.save_to_library();
    assert_eq!(h.state.toasts.len(), 1);

    h.state.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(h.state.toasts.len(), 1);

    h.state.tick(Instant::now() + Duration::from_millis(3100));
    assert!(h.state.toasts.is_empty());
}
