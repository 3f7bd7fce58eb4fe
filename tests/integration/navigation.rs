// Tests for view switching and the rendered shell

use crate::common::Harness;
use rednote_dash::ui::View;
use rednote_dash::ui::components::HeaderViewModel;

/// Text only the body of each view draws
fn marker(view: View) -> &'static str {
    match view {
        View::Dashboard => "Quick Actions",
        View::Generate => "Generated Post",
        View::Analytics => "Account Performance",
        View::Calendar => "underlined: today",
        View::Library => "Library · Account",
        View::Settings => "Account Management",
    }
}

#[test]
fn test_every_view_renders_alone() {
    let mut h = Harness::started();

    for view in View::ALL {
        h.state.navigate(view);
        h.settle();
        let screen = h.screen();

        for other in View::ALL {
            let shown = screen.contains(marker(other));
            assert_eq!(
                shown,
                other == view,
                "{} body visibility wrong while on {}",
                other,
                view
            );
        }

        let header = HeaderViewModel::from_state(&h.state);
        let active: Vec<View> = header.active_tabs().map(|t| t.view).collect();
        assert_eq!(active, vec![view], "exactly one tab should be active");
    }
}

#[test]
fn test_navigate_by_name() {
    let mut h = Harness::started();

    h.state.navigate_by_name("analytics").unwrap();
    assert_eq!(h.state.current_view, View::Analytics);

    h.state.navigate_by_name(" Library ").unwrap();
    assert_eq!(h.state.current_view, View::Library);
}

#[test]
fn test_unknown_view_name_is_rejected() {
    let mut h = Harness::started();
    h.state.navigate(View::Calendar);
    h.backend.clear_calls();

    let err = h.state.navigate_by_name("reports").unwrap_err();
    assert!(err.to_string().contains("reports"));
    assert_eq!(h.state.current_view, View::Calendar);
    assert!(h.backend.calls().is_empty(), "no request for an unknown view");
}

#[test]
fn test_dashboard_refreshes_recent_posts_on_entry() {
    let mut h = Harness::started();
    h.state.navigate(View::Settings);
    h.backend.clear_calls();

    h.state.navigate(View::Dashboard);
    h.settle();

    assert_eq!(h.backend.count(|c| *c == crate::common::Call::RecentPosts), 1);
}

#[test]
fn test_tab_click_navigates() {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    let mut h = Harness::started();
    h.render(120, 40);

    let (_, rect) = *h
        .state
        .nav_areas
        .iter()
        .find(|(v, _)| *v == View::Settings)
        .expect("settings tab hit box");

    rednote_dash::ui::handle_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        },
        &mut h.state,
    );

    assert_eq!(h.state.current_view, View::Settings);
}

#[test]
fn test_dashboard_shows_recent_posts() {
    use rednote_dash::api::RecentPost;

    let backend = crate::common::MockBackend::default();
    *backend.recent.lock().unwrap() = Ok(vec![RecentPost {
        id: Some("x".into()),
        number: Some(3),
        score: Some(9.0),
        content: "hi".into(),
        date: None,
    }]);
    let mut h = Harness::with_backend(backend);
    h.start();

    let screen = h.screen();
    assert!(screen.contains("Post #3"));
    assert!(screen.contains("hi..."));
    assert!(screen.contains("9/10"));
    assert!(screen.contains("Active Accounts"));
}
