use super::*;

pub(super) fn handle_analytics_key(key: KeyEvent, state: &mut AppState) {
    let rows = state.analytics.account_stats.len();

    match key.code {
        KeyCode::Up => {
            let next = step_selection(state.analytics_view.table.selected(), rows, -1);
            state.analytics_view.table.select(next);
        }
        KeyCode::Down => {
            let next = step_selection(state.analytics_view.table.selected(), rows, 1);
            state.analytics_view.table.select(next);
        }
        KeyCode::Enter => {
            let selected = state
                .analytics_view
                .table
                .selected()
                .and_then(|idx| state.analytics.account_stats.keys().nth(idx).cloned());
            if let Some(account) = selected {
                state.view_account_details(&account);
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => state.load_analytics(),
        _ => {}
    }
}
