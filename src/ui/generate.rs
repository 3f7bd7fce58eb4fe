// Generate screen: persona summary, trigger and the latest result

use crate::ui::components::{panel, render_button};
use crate::ui::format::format_score;
use crate::ui::state::AppState;
use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub score: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateViewModel {
    pub account_label: String,
    pub persona_badge: String,
    pub persona_description: String,
    pub personas: Vec<(String, bool)>,
    pub loading: bool,
    pub trigger_enabled: bool,
    pub result: Option<ResultCard>,
}

impl GenerateViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let persona = if state.registry_loaded {
            state.current_persona()
        } else {
            None
        };

        let current_id = state.current_persona_id();
        let personas = state
            .personas
            .iter()
            .map(|(id, p)| (p.name.clone(), id == current_id))
            .collect();

        Self {
            account_label: format!("Account {}", state.current_account),
            persona_badge: persona
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Loading...".to_string()),
            persona_description: persona.map(|p| p.description.clone()).unwrap_or_default(),
            personas,
            loading: state.generate.loading(),
            trigger_enabled: state.generate.trigger_enabled(),
            result: state.generate.result.as_ref().map(|post| ResultCard {
                score: format!("Score: {}/10", format_score(post.score())),
                content: post.content.clone(),
            }),
        }
    }
}

pub struct GenerateScreen;

impl GenerateScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = GenerateViewModel::from_state(state);
        let palette = state.palette();
        let frame_count = state.frame_count;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Persona
                Constraint::Min(3),    // Persona list
                Constraint::Length(3), // Trigger
            ])
            .split(columns[0]);

        Self::render_persona(frame, left[0], &vm, &palette);

        let items: Vec<ListItem> = vm
            .personas
            .iter()
            .map(|(name, _)| ListItem::new(name.as_str()))
            .collect();
        let list = List::new(items)
            .block(panel("Personas", &palette))
            .highlight_style(Style::default().fg(palette.primary).add_modifier(Modifier::BOLD))
            .highlight_symbol("● ");
        frame.render_stateful_widget(list, left[1], &mut state.generate.persona_list);

        Self::render_trigger(frame, left[2], &vm, &palette, frame_count);
        Self::render_result(frame, columns[1], &vm, &palette);
    }

    fn render_persona(frame: &mut Frame, area: Rect, vm: &GenerateViewModel, palette: &Palette) {
        let lines = vec![
            Line::from(vec![
                Span::styled(vm.account_label.as_str(), palette.muted()),
                Span::raw("  "),
                Span::styled(format!(" {} ", vm.persona_badge), palette.active()),
            ]),
            Line::from(""),
            Line::from(vm.persona_description.as_str()),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .block(panel("Persona", palette))
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_trigger(
        frame: &mut Frame,
        area: Rect,
        vm: &GenerateViewModel,
        palette: &Palette,
        frame_count: u64,
    ) {
        let block = panel("Generate", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if vm.loading {
            let spinner = SPINNER[(frame_count / 8) as usize % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(spinner, palette.hotkey()),
                Span::raw(" Generating..."),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
        } else {
            render_button(
                "Generate Post",
                "G",
                true,
                vm.trigger_enabled,
                palette,
                inner,
                frame.buffer_mut(),
            );
        }
    }

    fn render_result(frame: &mut Frame, area: Rect, vm: &GenerateViewModel, palette: &Palette) {
        let block = panel("Generated Post", palette);

        let lines = match &vm.result {
            Some(card) => {
                let mut lines = vec![
                    Line::styled(
                        card.score.as_str(),
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::from(""),
                ];
                lines.extend(card.content.lines().map(Line::from));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("[R]", palette.hotkey()),
                    Span::raw(" Regenerate  "),
                    Span::styled("[S]", palette.hotkey()),
                    Span::raw(" Save to library  "),
                    Span::styled("[C]", palette.hotkey()),
                    Span::raw(" Copy to clipboard"),
                ]));
                lines
            }
            None if vm.loading => vec![Line::styled("Waiting for the generator...", palette.muted())],
            None => vec![Line::styled(
                "Press G to generate a post for this account",
                palette.muted(),
            )],
        };

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
