// Overlay listing the posts stored in a library file

use crate::ui::state::PostsModalState;
use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct PostsModal;

impl PostsModal {
    /// Lines of the overlay body: each post numbered from 1
    pub fn lines<'a>(state: &'a PostsModalState, palette: &Palette) -> Vec<Line<'a>> {
        if state.posts.is_empty() {
            return vec![Line::styled("This file has no posts", palette.muted())];
        }

        let mut lines = Vec::new();
        for (i, post) in state.posts.iter().enumerate() {
            let heading = Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD);
            let header = if i == state.selected {
                Line::from(vec![
                    Span::styled(format!("▶ Post {}", i + 1), heading),
                    Span::styled("  [C] Copy", palette.hotkey()),
                ])
            } else {
                Line::from(Span::styled(format!("Post {}", i + 1), heading))
            };
            lines.push(header);
            lines.extend(post.lines().map(Line::from));
            lines.push(Line::from(""));
        }
        lines
    }

    pub fn render(frame: &mut Frame, state: &PostsModalState, palette: &Palette) {
        let area = frame.area();
        let width = (area.width * 4 / 5).max(20).min(area.width);
        let height = (area.height * 4 / 5).max(6).min(area.height);
        let modal_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.primary))
            .title(format!(" {} ", state.title))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::styled(" ↑/↓ scroll · ←/→ post · C copy · Esc close ", palette.muted()))
            .style(palette.base());

        let paragraph = Paragraph::new(Self::lines(state, palette))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.scroll, 0));

        frame.render_widget(paragraph, modal_area);
    }
}
