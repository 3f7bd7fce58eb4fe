// Settings screen

use crate::ui::components::panel;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

const MASKED_KEY: &str = "••••••••••••";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSettingsRow {
    pub id: String,
    pub persona: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsViewModel {
    pub base_url: String,
    pub api_key: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub theme: String,
    pub accounts: Vec<AccountSettingsRow>,
}

impl SettingsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let accounts = state
            .accounts
            .iter()
            .map(|(id, account)| AccountSettingsRow {
                id: format!("Account {}", id),
                persona: state
                    .personas
                    .get(&account.persona)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
                status: "Active",
            })
            .collect();

        Self {
            base_url: state.config.api.base_url.clone(),
            api_key: MASKED_KEY,
            temperature: state.config.generation.temperature,
            max_tokens: state.config.generation.max_tokens,
            theme: state.theme.to_string(),
            accounts,
        }
    }
}

/// Registry id of the highlighted account row
pub fn selected_account(state: &AppState) -> Option<String> {
    let idx = state.settings.table.selected()?;
    state.accounts.keys().nth(idx).cloned()
}

pub struct SettingsScreen;

impl SettingsScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = SettingsViewModel::from_state(state);
        let palette = state.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let field = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<14}", label), palette.muted()),
                Span::styled(value, Style::default().fg(palette.fg)),
            ])
        };

        let api = vec![
            field("Backend URL", vm.base_url.clone()),
            field("API Key", vm.api_key.to_string()),
            field("Theme", format!("{} (T to toggle)", vm.theme)),
        ];
        frame.render_widget(
            Paragraph::new(api).block(panel("API Configuration", &palette)),
            cards[0],
        );

        let generation = vec![
            field("Temperature", format!("{:.1}", vm.temperature)),
            field("Max Tokens", vm.max_tokens.to_string()),
        ];
        frame.render_widget(
            Paragraph::new(generation).block(panel("Generation Settings", &palette)),
            cards[1],
        );

        let header = Row::new(["Account", "Persona", "Status", ""]).style(palette.title());
        let rows: Vec<Row> = vm
            .accounts
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.id.as_str()),
                    Cell::from(row.persona.as_str()),
                    Cell::from(Span::styled(row.status, Style::default().fg(palette.success))),
                    Cell::from(Span::styled("[E] Edit", palette.hotkey())),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(panel("Account Management", &palette))
        .row_highlight_style(palette.active())
        .highlight_symbol("▶ ");

        if state.settings.table.selected().is_none() && !vm.accounts.is_empty() {
            state.settings.table.select(Some(0));
        }
        frame.render_stateful_widget(table, chunks[1], &mut state.settings.table);
    }
}
