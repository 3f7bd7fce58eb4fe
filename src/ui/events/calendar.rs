use super::*;

use crate::ui::calendar::shift_selected_day;

pub(super) fn handle_calendar_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Left => shift_selected_day(state, -1),
        KeyCode::Right => shift_selected_day(state, 1),
        KeyCode::Up => shift_selected_day(state, -7),
        KeyCode::Down => shift_selected_day(state, 7),
        KeyCode::Enter => {
            let day = state.calendar.selected_day;
            state.view_day_content(day);
        }
        _ => {}
    }
}
