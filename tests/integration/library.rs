// Tests for the content library

use std::time::{Duration, Instant};

use crate::common::{Call, Harness, library_file};
use rednote_dash::api::ApiError;
use rednote_dash::ui::View;
use rednote_dash::ui::library::LibraryViewModel;
use rednote_dash::ui::toast::ToastKind;

fn on_library(h: &mut Harness) {
    h.state.navigate(View::Library);
    h.settle();
}

#[test]
fn test_empty_library_offers_generate_now() {
    let mut h = Harness::started();
    on_library(&mut h);

    assert_eq!(LibraryViewModel::from_state(&h.state), LibraryViewModel::Empty);
    let screen = h.screen();
    assert!(screen.contains("No content yet"));
    assert!(screen.contains("Generate Now"));

    assert!(h.state.activate_library_cta());
    assert_eq!(h.state.current_view, View::Generate);
}

#[test]
fn test_cta_inactive_when_files_exist() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("AccountA_20250101", true, true)]);
    on_library(&mut h);

    assert!(!h.state.activate_library_cta());
    assert_eq!(h.state.current_view, View::Library);
}

#[test]
fn test_stale_listing_is_discarded() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("from_a", true, true)]);
    h.backend.set_files("B", vec![library_file("from_b", true, true)]);
    h.state.navigate(View::Library);

    // A second request supersedes the first before either is applied
    h.state.select_account("B");
    h.settle();

    let files = h.state.library.files.ready().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "from_b");
    assert_eq!(
        h.backend.count(|c| matches!(c, Call::Files(_))),
        2,
        "both requests went out"
    );
}

#[test]
fn test_view_without_text_version() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("scan", false, true)]);
    on_library(&mut h);

    h.state.view_selected_file();
    assert!(h.state.toasts.contains(ToastKind::Info, "No text version available for scan"));
    assert!(h.state.posts_modal.is_none());
}

#[test]
fn test_view_opens_posts_modal() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("notes", true, false)]);
    on_library(&mut h);

    h.state.view_selected_file();
    h.settle();

    assert!(h.backend.calls().contains(&Call::View("notes.txt".into())));
    let modal = h.state.posts_modal.as_ref().expect("modal open");
    assert_eq!(modal.posts, vec!["first post", "second post"]);

    let screen = h.screen();
    assert!(screen.contains("Post 1"));
    assert!(screen.contains("second post"));

    h.state.close_posts_modal();
    assert!(h.state.posts_modal.is_none());
}

#[test]
fn test_view_failure_shows_error() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("notes", true, false)]);
    *h.backend.view.lock().unwrap() = Err(ApiError::Rejected("File not found".into()));
    on_library(&mut h);

    h.state.view_selected_file();
    h.settle();

    assert!(h.state.toasts.contains(ToastKind::Error, "Error loading file"));
    assert!(h.state.posts_modal.is_none());
}

#[test]
fn test_download_writes_into_download_dir() {
    let mut h = Harness::started();
    h.backend.set_files("A", vec![library_file("report", true, true)]);
    on_library(&mut h);

    h.state.download_selected_file();
    assert!(h.state.toasts.contains(ToastKind::Info, "Downloading report.pdf..."));
    h.settle();

    let saved = h.dir.path().join("downloads").join("report.pdf");
    assert_eq!(std::fs::read(&saved).unwrap(), b"%PDF-1.4");
    assert!(h.has_toast("Saved to"));
}

#[test]
fn test_export_announces_completion_later() {
    let mut h = Harness::started();
    on_library(&mut h);

    h.state.export_library();
    h.settle();
    assert!(h.state.toasts.contains(ToastKind::Info, "Exporting as CSV..."));
    assert!(h.backend.calls().contains(&Call::Export("csv".into())));
    assert!(!h.has_toast("Export complete!"));

    h.state.tick(Instant::now() + Duration::from_millis(1100));
    assert!(h.state.toasts.contains(ToastKind::Success, "Export complete!"));
}
