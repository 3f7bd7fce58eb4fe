// Numeric slider used for the batch post count

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Palette;

pub struct Slider {
    value: u32,
    min: u32,
    max: u32,
    label: String,
    focused: bool,
    palette: Palette,
}

impl Slider {
    pub fn new(label: impl Into<String>, min: u32, max: u32, palette: Palette) -> Self {
        Self {
            value: min,
            min,
            max,
            label: label.into(),
            focused: false,
            palette,
        }
    }

    pub fn value(mut self, value: u32) -> Self {
        self.value = value.clamp(self.min, self.max);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn get_value(&self) -> u32 {
        self.value
    }

    /// Left/Right step by one, PageUp/PageDown by ten, Home/End jump to the bounds
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let next = match key {
            KeyCode::Left => self.value.saturating_sub(1),
            KeyCode::Right => self.value.saturating_add(1),
            KeyCode::PageDown => self.value.saturating_sub(10),
            KeyCode::PageUp => self.value.saturating_add(10),
            KeyCode::Home => self.min,
            KeyCode::End => self.max,
            _ => return false,
        }
        .clamp(self.min, self.max);

        let changed = next != self.value;
        self.value = next;
        changed
    }
}

impl Widget for Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width == 0 {
            return;
        }

        let value_style = if self.focused {
            Style::default().fg(self.palette.secondary).bold()
        } else {
            Style::default().fg(self.palette.secondary)
        };

        let label_style = if self.focused {
            self.palette.hotkey()
        } else {
            Style::default().fg(self.palette.fg)
        };

        let label_line = Line::from(vec![
            Span::styled(self.label.as_str(), label_style),
            Span::raw(": "),
            Span::styled(format!("{}", self.value), value_style),
            Span::styled(format!(" ({}-{})", self.min, self.max), self.palette.muted()),
        ]);
        buf.set_line(area.x, area.y, &label_line, area.width);

        let range = self.max - self.min;
        let ratio = if range > 0 {
            (self.value - self.min) as f64 / range as f64
        } else {
            0.0
        };
        let filled_width = (area.width as f64 * ratio).round() as u16;
        let bar_y = area.y + 1;

        for x in 0..area.width {
            let (symbol, fg) = if x < filled_width {
                (
                    "█",
                    if self.focused {
                        self.palette.primary
                    } else {
                        self.palette.muted
                    },
                )
            } else {
                ("─", self.palette.muted)
            };
            buf.set_string(area.x + x, bar_y, symbol, Style::default().fg(fg));
        }
    }
}
