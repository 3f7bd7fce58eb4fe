use super::*;

pub(super) fn handle_library_key(key: KeyEvent, state: &mut AppState) {
    // Empty library: the only action is the generate prompt
    if state.library.is_empty_state()
        && matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('G')
        )
    {
        state.activate_library_cta();
        return;
    }

    let rows = state.library.files.ready().map_or(0, |f| f.len());

    match key.code {
        KeyCode::Up => {
            let next = step_selection(state.library.table.selected(), rows, -1);
            state.library.table.select(next);
        }
        KeyCode::Down => {
            let next = step_selection(state.library.table.selected(), rows, 1);
            state.library.table.select(next);
        }
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => state.view_selected_file(),
        KeyCode::Char('d') | KeyCode::Char('D') => state.download_selected_file(),
        KeyCode::Char('e') | KeyCode::Char('E') => state.export_library(),
        KeyCode::Char('r') | KeyCode::Char('R') => state.refresh_library(),
        _ => {}
    }
}
