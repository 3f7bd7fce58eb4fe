use super::*;

pub(super) fn handle_generate_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Enter => {
            state.generate();
        }
        KeyCode::Char('r') | KeyCode::Char('R') if state.generate.result.is_some() => {
            state.regenerate();
        }
        KeyCode::Char('s') | KeyCode::Char('S') if state.generate.result.is_some() => {
            state.save_to_library();
        }
        KeyCode::Char('c') | KeyCode::Char('C') => state.copy_generated_post(),
        _ => {}
    }
}
