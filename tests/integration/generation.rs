// Tests for the single-post generation flow

use crate::common::{Call, Harness, rejected, success};
use rednote_dash::api::ApiError;
use rednote_dash::ui::View;
use rednote_dash::ui::generate::GenerateViewModel;
use rednote_dash::ui::state::GenerationPhase;
use rednote_dash::ui::toast::ToastKind;

fn on_generate() -> Harness {
    let mut h = Harness::started();
    h.state.navigate(View::Generate);
    h.settle();
    h.backend.clear_calls();
    h
}

#[test]
fn test_successful_generation_shows_post() {
    let mut h = on_generate();
    h.backend.queue_generate(Ok(success("hi", 9.0)));

    assert!(h.state.generate());
    assert!(h.state.generate.loading());
    assert!(!h.state.generate.trigger_enabled());
    h.settle();

    let vm = GenerateViewModel::from_state(&h.state);
    assert!(vm.trigger_enabled);
    assert!(!vm.loading);
    let card = vm.result.expect("result card");
    assert_eq!(card.content, "hi");
    assert_eq!(card.score, "Score: 9/10");

    let screen = h.screen();
    assert!(screen.contains("hi"));
    assert!(screen.contains("9/10"));
    assert!(!screen.contains("Generating..."));

    assert!(h.state.toasts.contains(ToastKind::Success, "Post generated successfully!"));
    // Analytics refresh follows a success
    assert_eq!(
        h.backend.calls(),
        vec![Call::Generate("A".into()), Call::Analytics]
    );
}

#[test]
fn test_rejected_generation_reports_reason() {
    let mut h = on_generate();
    h.backend.queue_generate(Ok(rejected("quota exceeded")));

    h.state.generate();
    h.settle();

    assert!(h.state.toasts.contains(
        ToastKind::Error,
        "Generation failed: quota exceeded"
    ));
    assert!(h.state.generate.trigger_enabled());
    assert!(h.state.generate.result.is_none());
    assert_eq!(h.backend.count(|c| *c == Call::Analytics), 0);
}

#[test]
fn test_network_error_reenables_trigger() {
    let mut h = on_generate();
    h.backend
        .queue_generate(Err(ApiError::Transport("connection reset".into())));

    h.state.generate();
    h.settle();

    assert!(h.state.toasts.contains(ToastKind::Error, "Network error: connection reset"));
    assert_eq!(h.state.generate.phase, GenerationPhase::Idle);
}

#[test]
fn test_second_press_while_running_is_ignored() {
    let mut h = on_generate();

    assert!(h.state.generate());
    assert!(!h.state.generate(), "trigger is disabled until the first settles");
    h.settle();

    assert_eq!(h.backend.count(|c| matches!(c, Call::Generate(_))), 1);
    assert!(h.state.generate());
}

#[test]
fn test_generation_uses_current_account() {
    let mut h = on_generate();
    h.state.select_account("C");

    h.state.generate();
    h.settle();

    assert_eq!(h.backend.calls()[0], Call::Generate("C".into()));
}

#[test]
fn test_regenerate_and_save() {
    let mut h = on_generate();
    h.backend.queue_generate(Ok(success("first", 7.0)));
    h.backend.queue_generate(Ok(success("second", 8.5)));

    h.state.generate();
    h.settle();
    assert!(h.state.regenerate());
    h.settle();

    let vm = GenerateViewModel::from_state(&h.state);
    let card = vm.result.unwrap();
    assert_eq!(card.content, "second");
    assert_eq!(card.score, "Score: 8.5/10");

    h.state.save_to_library();
    assert!(h.state.toasts.contains(ToastKind::Success, "Post saved to library!"));
}

#[test]
fn test_persona_badge_follows_account() {
    let mut h = on_generate();

    h.state.select_account("B");
    let vm = GenerateViewModel::from_state(&h.state);
    assert_eq!(vm.persona_badge, "Side Hustler");
    assert_eq!(vm.persona_description, "Evening projects that pay");
}
