use super::*;

use crate::ui::settings::selected_account;

pub(super) fn handle_settings_key(key: KeyEvent, state: &mut AppState) {
    let rows = state.accounts.len();

    match key.code {
        KeyCode::Up => {
            let next = step_selection(state.settings.table.selected(), rows, -1);
            state.settings.table.select(next);
        }
        KeyCode::Down => {
            let next = step_selection(state.settings.table.selected(), rows, 1);
            state.settings.table.select(next);
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(account) = selected_account(state) {
                state.edit_account(&account);
            }
        }
        _ => {}
    }
}
