// Tests for keyboard dispatch through the global and per-view handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::{Call, Harness, library_file};
use rednote_dash::ui::{Theme, View, handle_key};
use rednote_dash::ui::state::BatchFocus;

fn press(h: &mut Harness, code: KeyCode) -> bool {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut h.state)
}

#[test]
fn test_quit_keys() {
    let mut h = Harness::started();

    assert!(press(&mut h, KeyCode::Char('q')));
    assert!(handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut h.state
    ));
    assert!(!press(&mut h, KeyCode::Char('x')));
}

#[test]
fn test_key_release_is_ignored() {
    let mut h = Harness::started();

    let mut release = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    handle_key(release, &mut h.state);

    assert_eq!(h.state.current_view, View::Dashboard);
}

#[test]
fn test_number_and_tab_navigation() {
    let mut h = Harness::started();

    press(&mut h, KeyCode::Char('5'));
    assert_eq!(h.state.current_view, View::Library);

    press(&mut h, KeyCode::Tab);
    assert_eq!(h.state.current_view, View::Settings);

    press(&mut h, KeyCode::Tab);
    assert_eq!(h.state.current_view, View::Dashboard);

    press(&mut h, KeyCode::BackTab);
    assert_eq!(h.state.current_view, View::Settings);
}

#[test]
fn test_account_and_theme_keys() {
    let mut h = Harness::started();

    press(&mut h, KeyCode::Char('.'));
    assert_eq!(h.state.current_account, "B");
    press(&mut h, KeyCode::Char(','));
    assert_eq!(h.state.current_account, "A");

    press(&mut h, KeyCode::Char('t'));
    assert_eq!(h.state.theme, Theme::Dark);
}

#[test]
fn test_generate_keys() {
    let mut h = Harness::started();
    press(&mut h, KeyCode::Char('2'));
    h.backend.clear_calls();

    // Regenerate needs a result first
    press(&mut h, KeyCode::Char('r'));
    h.settle();
    assert!(h.backend.calls().is_empty());

    press(&mut h, KeyCode::Char('g'));
    h.settle();
    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 1);

    press(&mut h, KeyCode::Char('r'));
    h.settle();
    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 2);
}

#[test]
fn test_batch_dialog_keys() {
    let mut h = Harness::started();
    h.backend.clear_calls();

    press(&mut h, KeyCode::Char('b'));
    assert!(h.state.batch.visible);
    assert_eq!(h.state.batch.focus, BatchFocus::Count);

    // Count 10 down to 2
    press(&mut h, KeyCode::Home);
    press(&mut h, KeyCode::Right);
    assert_eq!(h.state.batch.count, 2);

    // Tick account B as well
    press(&mut h, KeyCode::Tab);
    press(&mut h, KeyCode::Tab);
    assert_eq!(h.state.batch.focus, BatchFocus::Account(1));
    press(&mut h, KeyCode::Char(' '));
    assert_eq!(h.state.batch.selected_accounts(), vec!["A", "B"]);

    // Global keys are captured while the dialog is open
    press(&mut h, KeyCode::Char('3'));
    assert_eq!(h.state.current_view, View::Dashboard);

    press(&mut h, KeyCode::Enter);
    h.settle();
    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 4);

    press(&mut h, KeyCode::Esc);
    assert!(!h.state.batch.visible);
}

#[test]
fn test_library_keys() {
    let mut h = Harness::started();
    h.backend.set_files(
        "A",
        vec![
            library_file("one", true, true),
            library_file("two", false, true),
        ],
    );
    press(&mut h, KeyCode::Char('5'));
    h.settle();
    h.backend.clear_calls();

    press(&mut h, KeyCode::Down);
    assert_eq!(h.state.library.selected_file().unwrap().name, "two");

    press(&mut h, KeyCode::Char('d'));
    h.settle();
    assert_eq!(h.backend.calls(), vec![Call::Download("two.pdf".into())]);

    press(&mut h, KeyCode::Up);
    press(&mut h, KeyCode::Enter);
    h.settle();
    assert!(h.state.posts_modal.is_some());

    // The modal swallows navigation until closed
    press(&mut h, KeyCode::Char('1'));
    assert_eq!(h.state.current_view, View::Library);
    press(&mut h, KeyCode::Esc);
    assert!(h.state.posts_modal.is_none());
}

#[test]
fn test_empty_library_enter_goes_to_generate() {
    let mut h = Harness::started();
    press(&mut h, KeyCode::Char('5'));
    h.settle();

    press(&mut h, KeyCode::Enter);
    assert_eq!(h.state.current_view, View::Generate);
}

#[test]
fn test_calendar_and_settings_keys() {
    let mut h = Harness::started();

    press(&mut h, KeyCode::Char('4'));
    h.state.calendar.selected_day = 10;
    press(&mut h, KeyCode::Right);
    press(&mut h, KeyCode::Down);
    assert_eq!(h.state.calendar.selected_day, 18);
    press(&mut h, KeyCode::Enter);
    assert!(h.has_toast("Viewing content for day 18"));

    press(&mut h, KeyCode::Char('6'));
    h.state.settings.table.select(Some(0));
    press(&mut h, KeyCode::Char('e'));
    assert!(h.has_toast("Edit account feature coming soon"));
}

#[test]
fn test_copy_generated_post() {
    let mut h = Harness::started();
    h.backend
        .queue_generate(Ok(crate::common::success("Five habits for saving", 8.5)));
    press(&mut h, KeyCode::Char('2'));

    // Nothing to copy yet
    press(&mut h, KeyCode::Char('c'));
    assert!(h.copied().is_empty());

    press(&mut h, KeyCode::Char('g'));
    h.settle();
    press(&mut h, KeyCode::Char('c'));

    assert_eq!(h.copied(), vec!["Five habits for saving"]);
    assert!(h.has_toast("Copied to clipboard!"));
    assert!(h.screen().contains("[C] Copy to clipboard"));
}

#[test]
fn test_copy_failure_shows_error_toast() {
    let mut h = Harness::started();
    press(&mut h, KeyCode::Char('2'));
    press(&mut h, KeyCode::Char('g'));
    h.settle();

    h.break_clipboard();
    press(&mut h, KeyCode::Char('c'));

    assert!(h.copied().is_empty());
    assert!(h.has_toast("Failed to copy"));
    assert!(!h.has_toast("Copied to clipboard!"));
}

#[test]
fn test_copy_post_from_library_modal() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("one", true, true)]);
    press(&mut h, KeyCode::Char('5'));
    h.settle();
    press(&mut h, KeyCode::Enter);
    h.settle();

    press(&mut h, KeyCode::Right);
    press(&mut h, KeyCode::Char('c'));
    assert_eq!(h.copied(), vec!["second post"]);
    assert!(h.has_toast("Copied to clipboard!"));

    // Selection stops at the last post
    press(&mut h, KeyCode::Right);
    press(&mut h, KeyCode::Left);
    press(&mut h, KeyCode::Char('C'));
    assert_eq!(h.copied(), vec!["second post", "first post"]);

    // Copying leaves the modal open
    assert!(h.state.posts_modal.is_some());
    assert!(h.screen().contains("▶ Post 1"));
}
