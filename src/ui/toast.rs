// Transient notifications stacked in the top-right corner

use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_ttl(TOAST_TTL)
    }
}

impl Toasts {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push_back(Toast {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    /// Drop toasts older than the display time
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|t| now.saturating_duration_since(t.shown_at) < ttl);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn contains(&self, kind: ToastKind, message: &str) -> bool {
        self.items
            .iter()
            .any(|t| t.kind == kind && t.message == message)
    }
}

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack;

impl ToastStack {
    pub fn render(frame: &mut Frame, toasts: &Toasts, palette: &Palette) {
        let area = frame.area();
        let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width + 1);
        let mut y = area.y + 1;

        // Newest at the top
        for toast in toasts.iter().rev() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }

            let rect = Rect {
                x,
                y,
                width,
                height: TOAST_HEIGHT,
            };

            let color = match toast.kind {
                ToastKind::Success => palette.success,
                ToastKind::Error => palette.error,
                ToastKind::Info => palette.info,
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(palette.base());

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", toast.kind.icon()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(toast.message.as_str()),
            ]);

            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
                rect,
            );

            y += TOAST_HEIGHT;
        }
    }
}
