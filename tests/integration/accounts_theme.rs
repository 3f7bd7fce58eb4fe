// Tests for account selection, startup loading and the theme preference

use crate::common::{Call, Harness, MockBackend};
use rednote_dash::api::ApiError;
use rednote_dash::prefs::PreferencesStore;
use rednote_dash::ui::{Theme, View};
use rednote_dash::ui::toast::ToastKind;

#[test]
fn test_startup_loads_registry_then_analytics() {
    let h = Harness::started();

    assert!(h.state.registry_loaded);
    assert_eq!(h.state.accounts.len(), 5);
    assert_eq!(h.state.current_account, "A");

    let calls = h.backend.calls();
    let accounts = calls.iter().position(|c| *c == Call::Accounts).unwrap();
    let analytics = calls.iter().position(|c| *c == Call::Analytics).unwrap();
    assert!(accounts < analytics, "analytics waits for the registry");

    // Initial render of the dashboard
    assert_eq!(h.backend.count(|c| *c == Call::RecentPosts), 1);
}

#[test]
fn test_registry_failure_shows_error_and_still_renders() {
    let backend = MockBackend::default();
    *backend.accounts.lock().unwrap() = Err(ApiError::Transport("connection refused".into()));
    let mut h = Harness::with_backend(backend);
    h.start();

    assert!(!h.state.registry_loaded);
    assert!(h.state.toasts.contains(
        ToastKind::Error,
        "Error loading data: connection refused"
    ));
    assert_eq!(h.backend.count(|c| *c == Call::Analytics), 0);
    assert_eq!(h.backend.count(|c| *c == Call::RecentPosts), 1);
    assert_eq!(h.state.account_ids(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_select_unknown_account_is_accepted() {
    let mut h = Harness::started();
    h.state.navigate(View::Generate);

    h.state.select_account("Z");
    assert_eq!(h.state.current_account, "Z");

    // Degraded persona display, not a crash
    assert_eq!(h.state.current_persona_id(), "young_investor");
    let screen = h.screen();
    assert!(screen.contains("Young Investor"));
}

#[test]
fn test_select_account_refreshes_only_account_views() {
    let mut h = Harness::started();

    h.state.navigate(View::Analytics);
    h.backend.clear_calls();
    h.state.select_account("B");
    h.settle();
    assert!(h.backend.calls().is_empty(), "analytics view refreshes lazily");

    h.state.navigate(View::Library);
    h.settle();
    h.backend.clear_calls();
    h.state.select_account("C");
    h.settle();
    assert_eq!(h.backend.calls(), vec![Call::Files("C".into())]);
}

#[test]
fn test_cycle_account_wraps() {
    let mut h = Harness::started();

    h.state.cycle_account(false);
    assert_eq!(h.state.current_account, "E");
    h.state.cycle_account(true);
    assert_eq!(h.state.current_account, "A");
}

#[test]
fn test_view_account_details_switches_to_analytics() {
    let mut h = Harness::started();

    h.state.view_account_details("D");
    assert_eq!(h.state.current_account, "D");
    assert_eq!(h.state.current_view, View::Analytics);
}

#[test]
fn test_theme_toggle_twice_restores_original() {
    let mut h = Harness::started();
    let prefs_path = h.dir.path().join("prefs.json");
    let original = h.state.theme;
    assert_eq!(original, Theme::Light);

    h.state.toggle_theme();
    assert_eq!(h.state.theme, Theme::Dark);
    assert!(h.state.toasts.contains(ToastKind::Success, "Theme changed to dark mode"));
    let saved = std::fs::read_to_string(&prefs_path).unwrap();
    assert!(saved.contains("\"dark\""));

    h.state.toggle_theme();
    assert_eq!(h.state.theme, original);
    assert_eq!(PreferencesStore::at(&prefs_path).load().theme, original);
}

#[test]
fn test_saved_theme_applies_on_next_launch() {
    let mut first = Harness::started();
    first.state.toggle_theme();
    let prefs_path = first.dir.path().join("prefs.json");

    let reopened = PreferencesStore::at(&prefs_path).load();
    assert_eq!(reopened.theme, Theme::Dark);
}
