// Library screen: saved files for the current account

use crate::ui::components::{panel, render_button};
use crate::ui::state::{AppState, Loadable};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    pub date: String,
    pub can_view: bool,
    pub can_download: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryViewModel {
    Loading,
    Failed(String),
    Empty,
    Files(Vec<FileRow>),
}

impl LibraryViewModel {
    pub fn from_state(state: &AppState) -> Self {
        match &state.library.files {
            Loadable::NotRequested | Loadable::Loading => Self::Loading,
            Loadable::Failed(msg) => Self::Failed(msg.clone()),
            Loadable::Ready(files) if files.is_empty() => Self::Empty,
            Loadable::Ready(files) => Self::Files(
                files
                    .iter()
                    .map(|f| FileRow {
                        name: f.name.clone(),
                        date: f.date.clone(),
                        can_view: f.txt_path.is_some(),
                        can_download: f.pdf_path.is_some(),
                    })
                    .collect(),
            ),
        }
    }
}

pub struct LibraryScreen;

impl LibraryScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = LibraryViewModel::from_state(state);
        let palette = state.palette();
        let title = format!("Library · Account {}", state.current_account);
        let block = panel(&title, &palette);

        match vm {
            LibraryViewModel::Loading => {
                frame.render_widget(
                    Paragraph::new(Line::styled("Loading...", palette.muted())).block(block),
                    area,
                );
            }
            LibraryViewModel::Failed(msg) => {
                frame.render_widget(
                    Paragraph::new(Line::styled(msg, Style::default().fg(palette.error)))
                        .block(block),
                    area,
                );
            }
            LibraryViewModel::Empty => {
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Percentage(35),
                        Constraint::Length(3),
                        Constraint::Length(1),
                        Constraint::Min(0),
                    ])
                    .split(inner);

                let text = vec![
                    Line::styled(
                        "No content yet",
                        Style::default()
                            .fg(palette.fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::styled("Start generating posts to build your library", palette.muted()),
                ];
                frame.render_widget(
                    Paragraph::new(text).alignment(Alignment::Center),
                    rows[1],
                );
                render_button("Generate Now", "G", true, true, &palette, rows[2], frame.buffer_mut());
            }
            LibraryViewModel::Files(files) => {
                let header = Row::new(["File", "Date", "Text", "PDF"]).style(palette.title());
                let rows: Vec<Row> = files
                    .into_iter()
                    .map(|f| {
                        let mark = |ok: bool| {
                            if ok {
                                Span::styled("✓", Style::default().fg(palette.success))
                            } else {
                                Span::styled("-", palette.muted())
                            }
                        };
                        Row::new(vec![
                            Cell::from(f.name),
                            Cell::from(f.date),
                            Cell::from(mark(f.can_view)),
                            Cell::from(mark(f.can_download)),
                        ])
                    })
                    .collect();

                let table = Table::new(
                    rows,
                    [
                        Constraint::Min(30),
                        Constraint::Length(20),
                        Constraint::Length(6),
                        Constraint::Length(6),
                    ],
                )
                .header(header)
                .block(block)
                .row_highlight_style(palette.active())
                .highlight_symbol("▶ ");

                frame.render_stateful_widget(table, area, &mut state.library.table);
            }
        }
    }
}
