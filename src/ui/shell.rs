// Frame layout: header, the current view, footer and overlays

use crate::ui::{
    AnalyticsScreen, BatchModal, CalendarScreen, Dashboard, GenerateScreen, LibraryScreen,
    PostsModal, SettingsScreen,
    components::{Footer, Header, HeaderViewModel},
    state::{AppState, View},
    toast::ToastStack,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    state.viewport = area;
    state.frame_count = state.frame_count.wrapping_add(1);

    let palette = state.palette();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(0),    // Current view
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header = HeaderViewModel::from_state(state);
    state.nav_areas = Header::render(frame, chunks[0], &header, &palette);

    // Exactly one view body per frame
    match state.current_view {
        View::Dashboard => Dashboard::render(frame, chunks[1], state),
        View::Generate => GenerateScreen::render(frame, chunks[1], state),
        View::Analytics => AnalyticsScreen::render(frame, chunks[1], state),
        View::Calendar => CalendarScreen::render(frame, chunks[1], state),
        View::Library => LibraryScreen::render(frame, chunks[1], state),
        View::Settings => SettingsScreen::render(frame, chunks[1], state),
    }

    let footer = if state.modal_open() {
        Footer::modal(&palette)
    } else {
        Footer::for_view(state.current_view, &palette)
    };
    frame.render_widget(footer, chunks[2]);

    if state.batch.visible {
        BatchModal::render(frame, &state.batch, &palette);
    }

    if let Some(modal) = &state.posts_modal {
        PostsModal::render(frame, modal, &palette);
    }

    ToastStack::render(frame, &state.toasts, &palette);
}
