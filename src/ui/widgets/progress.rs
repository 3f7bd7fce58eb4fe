// Batch progress bar with a completed/total label

use crate::ui::theme::Palette;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Running,
    Done,
}

pub struct BatchProgress {
    completed: usize,
    total: usize,
    state: ProgressState,
    palette: Palette,
}

impl BatchProgress {
    pub fn new(completed: usize, total: usize, state: ProgressState, palette: Palette) -> Self {
        Self {
            completed: completed.min(total),
            total,
            state,
            palette,
        }
    }

    /// Fill ratio; an empty run counts as full
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl Widget for BatchProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = format!(" {}/{} ", self.completed, self.total);
        let bar_width = area.width.saturating_sub(label.len() as u16);
        let filled_width = (bar_width as f64 * self.ratio()).round() as u16;

        let filled_fg = match self.state {
            ProgressState::Running => self.palette.primary,
            ProgressState::Done => self.palette.success,
        };

        for x in 0..bar_width {
            let (symbol, fg) = if x < filled_width {
                ("█", filled_fg)
            } else {
                ("░", self.palette.muted)
            };
            buf.set_string(area.x + x, area.y, symbol, Style::default().fg(fg));
        }

        buf.set_string(
            area.x + bar_width,
            area.y,
            &label,
            Style::default().fg(self.palette.fg),
        );
    }
}
