// Reusable UI components

use crate::ui::state::{AppState, View};
use crate::ui::theme::{Palette, Theme};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered panel in the active palette
pub fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(palette.base())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub view: View,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountChip {
    pub id: String,
    pub active: bool,
}

/// Navigation tabs, account chips and theme indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub tabs: Vec<NavItem>,
    pub accounts: Vec<AccountChip>,
    pub theme: Theme,
}

impl HeaderViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let tabs = View::ALL
            .iter()
            .map(|view| NavItem {
                view: *view,
                label: format!("{} {}", view.index() + 1, view.title()),
                active: *view == state.current_view,
            })
            .collect();

        let accounts = state
            .account_ids()
            .into_iter()
            .map(|id| AccountChip {
                active: id == state.current_account,
                id,
            })
            .collect();

        Self {
            tabs,
            accounts,
            theme: state.theme,
        }
    }

    pub fn active_tabs(&self) -> impl Iterator<Item = &NavItem> {
        self.tabs.iter().filter(|t| t.active)
    }
}

pub struct Header;

impl Header {
    /// Draw the header and return the hit box of every tab
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        vm: &HeaderViewModel,
        palette: &Palette,
    ) -> Vec<(View, Rect)> {
        let block = Block::default()
            .title(Span::styled(" 📕 RedNote Dashboard ", palette.title()))
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return Vec::new();
        }

        let mut hit_boxes = Vec::with_capacity(vm.tabs.len());
        let mut x = inner.x;
        let buf = frame.buffer_mut();

        for tab in &vm.tabs {
            let text = format!(" {} ", tab.label);
            let width = (Span::raw(text.as_str()).width() as u16).min(inner.right().saturating_sub(x));
            if width == 0 {
                break;
            }

            let style = if tab.active {
                palette.active()
            } else {
                palette.base()
            };
            buf.set_stringn(x, inner.y, &text, width as usize, style);
            hit_boxes.push((
                tab.view,
                Rect {
                    x,
                    y: inner.y,
                    width,
                    height: 1,
                },
            ));
            x += width + 1;
        }

        // Account chips and theme indicator, right-aligned
        let mut spans = vec![Span::styled("Account: ", palette.muted())];
        for chip in &vm.accounts {
            let style = if chip.active {
                palette.active()
            } else {
                Style::default().fg(palette.secondary)
            };
            spans.push(Span::styled(format!(" {} ", chip.id), style));
            spans.push(Span::raw(" "));
        }
        let theme_icon = match vm.theme {
            Theme::Light => "☀ light",
            Theme::Dark => "☾ dark",
        };
        spans.push(Span::styled(theme_icon, palette.hotkey()));

        let right = Line::from(spans);
        let right_width = right.width() as u16;
        if x + right_width < inner.right() {
            let start = inner.right() - right_width;
            buf.set_line(start, inner.y, &right, right_width);
        }

        hit_boxes
    }
}

pub struct Footer {
    content: Line<'static>,
    palette: Palette,
}

impl Footer {
    fn from_controls(controls: &[(&'static str, &'static str)], palette: &Palette) -> Self {
        let mut spans = vec![Span::raw("CONTROLS: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, palette.hotkey()));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
            palette: *palette,
        }
    }

    pub fn for_view(view: View, palette: &Palette) -> Self {
        let common = [
            ("[1-6]", "Views"),
            ("[,/.]", "Account"),
            ("[T]", "Theme"),
            ("[B]", "Batch"),
            ("[Q]", "Quit"),
        ];

        let specific: &[(&'static str, &'static str)] = match view {
            View::Dashboard => &[("[↑/↓]", "Action"), ("[Enter]", "Run"), ("[R]", "Refresh")],
            View::Generate => &[
                ("[G]", "Generate"),
                ("[R]", "Regenerate"),
                ("[S]", "Save"),
                ("[C]", "Copy"),
            ],
            View::Analytics => &[("[↑/↓]", "Account"), ("[Enter]", "Details")],
            View::Calendar => &[("[←/→/↑/↓]", "Day"), ("[Enter]", "View")],
            View::Library => &[
                ("[↑/↓]", "File"),
                ("[V]", "View"),
                ("[D]", "Download"),
                ("[E]", "Export"),
            ],
            View::Settings => &[("[↑/↓]", "Account"), ("[E]", "Edit")],
        };

        let controls: Vec<_> = specific.iter().chain(common.iter()).copied().collect();
        Self::from_controls(&controls, palette)
    }

    pub fn modal(palette: &Palette) -> Self {
        Self::from_controls(&[("[Esc]", "Close")], palette)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(
                Style::default()
                    .bg(self.palette.highlight_bg)
                    .fg(self.palette.highlight_fg),
            )
            .render(area, buf);
    }
}

pub fn render_button(
    label: &str,
    hotkey: &str,
    focused: bool,
    enabled: bool,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let style = if !enabled {
        palette.muted()
    } else if focused {
        palette.active()
    } else {
        Style::default().fg(palette.fg)
    };

    let text = Line::from(vec![
        Span::raw("["),
        Span::styled(hotkey, palette.hotkey()),
        Span::raw("] "),
        Span::raw(label),
    ])
    .style(style);

    let mut centered_area = area;
    let text_width = text.width() as u16;
    if area.width > text_width {
        let padding = (area.width - text_width) / 2;
        centered_area.x += padding;
        centered_area.width = text_width;
    }

    buf.set_line(centered_area.x, centered_area.y, &text, centered_area.width);
}

pub fn render_checkbox(
    label: &str,
    checked: bool,
    focused: bool,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let symbol = if checked { "[x]" } else { "[ ]" };
    let symbol_style = if focused {
        palette.hotkey()
    } else {
        Style::default().fg(palette.secondary)
    };

    let label_style = if focused {
        Style::default().fg(palette.fg).bold()
    } else {
        Style::default().fg(palette.fg)
    };

    let text = Line::from(vec![
        Span::styled(symbol, symbol_style),
        Span::raw(" "),
        Span::styled(label, label_style),
    ]);

    buf.set_line(area.x, area.y, &text, area.width);
}

/// Centered single-line message inside a panel
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, palette: &Palette) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(title, palette));
    frame.render_widget(paragraph, area);
}
