// Batch generation dialog

use crate::ui::components::{render_button, render_checkbox};
use crate::ui::state::{
    BATCH_MAX_COUNT, BATCH_MIN_COUNT, BatchFocus, BatchState, DEFAULT_ACCOUNTS,
};
use crate::ui::theme::Palette;
use crate::ui::widgets::{BatchProgress, ProgressState, Slider};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct BatchModal;

impl BatchModal {
    /// Centered dialog rectangle inside `area`
    pub fn area(area: Rect) -> Rect {
        let width = 56.min(area.width.saturating_sub(4));
        let height = 18.min(area.height.saturating_sub(2));

        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    pub fn render(frame: &mut Frame, state: &BatchState, palette: &Palette) {
        let modal_area = Self::area(frame.area());

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.primary))
            .title(" Batch Generate ")
            .title_alignment(Alignment::Center)
            .style(palette.base());

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                                // Count slider
                Constraint::Length(1),                                // Spacer
                Constraint::Length(1),                                // Accounts heading
                Constraint::Length(DEFAULT_ACCOUNTS.len() as u16),   // Checkboxes
                Constraint::Length(1),                                // Spacer
                Constraint::Length(1),                                // Progress
                Constraint::Length(1),                                // Status
                Constraint::Min(0),
                Constraint::Length(1),                                // Buttons
            ])
            .split(inner);

        let running = state.is_running();

        frame.render_widget(
            Slider::new("Posts per account", BATCH_MIN_COUNT, BATCH_MAX_COUNT, *palette)
                .value(state.count)
                .focused(state.focus == BatchFocus::Count && !running),
            rows[0],
        );

        frame.render_widget(
            Paragraph::new(Line::styled("Accounts", palette.muted())),
            rows[2],
        );

        let buf = frame.buffer_mut();
        for (i, id) in DEFAULT_ACCOUNTS.iter().enumerate() {
            let area = Rect {
                y: rows[3].y + i as u16,
                height: 1,
                ..rows[3]
            };
            if area.y >= rows[3].bottom() {
                break;
            }
            render_checkbox(
                &format!("Account {}", id),
                state.selected[i],
                state.focus == BatchFocus::Account(i),
                palette,
                area,
                buf,
            );
        }

        if let Some(run) = &state.run {
            let progress_state = if run.finished {
                ProgressState::Done
            } else {
                ProgressState::Running
            };
            frame.render_widget(
                BatchProgress::new(run.completed, run.total, progress_state, *palette),
                rows[5],
            );
            frame.render_widget(
                Paragraph::new(Line::styled(state.status.as_str(), Style::default().fg(palette.fg)))
                    .alignment(Alignment::Center),
                rows[6],
            );
        }

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[8]);

        let buf = frame.buffer_mut();
        render_button("Start", "Enter", false, !running, palette, buttons[0], buf);
        render_button("Cancel", "Esc", false, true, palette, buttons[1], buf);
    }
}
