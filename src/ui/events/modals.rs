use super::*;

use crate::ui::state::{BATCH_MAX_COUNT, BATCH_MIN_COUNT, BatchFocus};
use crate::ui::widgets::Slider;

pub(super) fn handle_posts_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.close_posts_modal();
        }
        KeyCode::Up => {
            if let Some(modal) = state.posts_modal.as_mut() {
                modal.scroll = modal.scroll.saturating_sub(1);
            }
        }
        KeyCode::Down => {
            if let Some(modal) = state.posts_modal.as_mut() {
                modal.scroll = modal.scroll.saturating_add(1);
            }
        }
        KeyCode::Right | KeyCode::Tab => {
            if let Some(modal) = state.posts_modal.as_mut() {
                modal.select(modal.selected + 1);
            }
        }
        KeyCode::Left | KeyCode::BackTab => {
            if let Some(modal) = state.posts_modal.as_mut() {
                modal.select(modal.selected.saturating_sub(1));
            }
        }
        KeyCode::Char('c') | KeyCode::Char('C') => state.copy_modal_post(),
        _ => {}
    }
}

pub(super) fn handle_batch_key(key: KeyEvent, state: &mut AppState) {
    if key.code == KeyCode::Esc {
        state.close_batch_dialog();
        return;
    }

    // Selections are frozen while a run is in progress
    if state.batch.is_running() {
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => state.batch.focus = state.batch.focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.batch.focus = state.batch.focus.previous(),
        KeyCode::Char(' ') => {
            if let BatchFocus::Account(i) = state.batch.focus {
                state.batch.selected[i] = !state.batch.selected[i];
            }
        }
        KeyCode::Enter => {
            state.start_batch();
        }
        code if state.batch.focus == BatchFocus::Count => {
            let palette = state.palette();
            let mut slider = Slider::new("count", BATCH_MIN_COUNT, BATCH_MAX_COUNT, palette)
                .value(state.batch.count);
            if slider.handle_key(code) {
                state.batch.set_count(slider.get_value());
            }
        }
        _ => {}
    }
}
