use super::*;

use crate::ui::state::QuickAction;

pub(super) fn handle_dashboard_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Up => {
            let next = step_selection(state.dashboard.actions.selected(), QuickAction::ALL.len(), -1);
            state.dashboard.actions.select(next);
        }
        KeyCode::Down => {
            let next = step_selection(state.dashboard.actions.selected(), QuickAction::ALL.len(), 1);
            state.dashboard.actions.select(next);
        }
        KeyCode::Enter => {
            let action = state.dashboard.selected_action();
            state.run_quick_action(action);
        }
        KeyCode::Char('g') | KeyCode::Char('G') => state.quick_generate(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state.refresh_recent_posts();
            state.load_analytics();
        }
        _ => {}
    }
}
