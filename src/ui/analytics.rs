// Analytics screen: summary figures, daily chart and per-account performance

use crate::ui::components::{panel, render_message};
use crate::ui::dashboard::StatCard;
use crate::ui::format::{format_average, format_count};
use crate::ui::state::AppState;
use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table},
};
use tui_piechart::{PieChart, PieSlice};

/// Days of history drawn in the bar chart
const CHART_DAYS: usize = 14;

const SLICE_COLORS: [Color; 6] = [
    Color::LightRed,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightYellow,
    Color::LightCyan,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub id: String,
    pub posts: u64,
    pub avg_score: String,
    pub last_generated: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsViewModel {
    pub summary: Vec<StatCard>,
    pub daily: Vec<(String, u64)>,
    pub accounts: Vec<AccountRow>,
    pub last_updated: Option<String>,
}

impl AnalyticsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let a = &state.analytics;

        let summary = vec![
            StatCard {
                label: "Avg Quality Score",
                value: format_average(a.avg_score()),
            },
            StatCard {
                label: "Total Views",
                value: format_count(a.total_views.unwrap_or(0)),
            },
            StatCard {
                label: "Total Engagement",
                value: format_count(a.total_engagement.unwrap_or(0)),
            },
            StatCard {
                label: "This Week",
                value: a.week_posts.unwrap_or(0).to_string(),
            },
            StatCard {
                label: "Today",
                value: a.today_posts.unwrap_or(0).to_string(),
            },
        ];

        let skip = a.daily_data.len().saturating_sub(CHART_DAYS);
        let daily = a.daily_data[skip..]
            .iter()
            .map(|point| {
                // "2025-01-31" -> "01-31"
                let label = point.date.get(5..).unwrap_or(&point.date).to_string();
                (label, point.posts)
            })
            .collect();

        let accounts = a
            .account_stats
            .iter()
            .map(|(id, stats)| AccountRow {
                id: id.clone(),
                posts: stats.total_posts,
                avg_score: stats
                    .avg_score
                    .map(format_average)
                    .unwrap_or_else(|| "-".to_string()),
                last_generated: stats
                    .last_generated
                    .clone()
                    .unwrap_or_else(|| "Never".to_string()),
            })
            .collect();

        Self {
            summary,
            daily,
            accounts,
            last_updated: a.last_updated.clone(),
        }
    }
}

pub struct AnalyticsScreen;

impl AnalyticsScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = AnalyticsViewModel::from_state(state);
        let palette = state.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),      // Summary
                Constraint::Percentage(45), // Daily chart
                Constraint::Min(0),         // Accounts
            ])
            .split(area);

        Self::render_summary(frame, chunks[0], &vm, &palette);
        Self::render_daily(frame, chunks[1], &vm, &palette);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[2]);

        Self::render_accounts(frame, bottom[0], &vm, state, &palette);
        Self::render_share(frame, bottom[1], &vm, &palette);
    }

    fn render_summary(frame: &mut Frame, area: Rect, vm: &AnalyticsViewModel, palette: &Palette) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, vm.summary.len() as u32); vm.summary.len()])
            .split(area);

        for (card, rect) in vm.summary.iter().zip(cells.iter()) {
            let value = Paragraph::new(Line::styled(
                card.value.as_str(),
                Style::default()
                    .fg(palette.secondary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(panel(card.label, palette));
            frame.render_widget(value, *rect);
        }
    }

    fn render_daily(frame: &mut Frame, area: Rect, vm: &AnalyticsViewModel, palette: &Palette) {
        if vm.daily.is_empty() {
            render_message(
                frame,
                area,
                "Daily Posts",
                vec![Line::styled("No daily data yet", palette.muted())],
                palette,
            );
            return;
        }

        let bars: Vec<Bar> = vm
            .daily
            .iter()
            .map(|(label, posts)| {
                Bar::default()
                    .value(*posts)
                    .label(Line::from(label.as_str()))
                    .style(Style::default().fg(palette.primary))
                    .value_style(palette.active())
            })
            .collect();

        let title = match &vm.last_updated {
            Some(ts) => format!("Daily Posts (updated {})", ts),
            None => "Daily Posts".to_string(),
        };

        let chart = BarChart::default()
            .block(panel(&title, palette))
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1);

        frame.render_widget(chart, area);
    }

    fn render_accounts(
        frame: &mut Frame,
        area: Rect,
        vm: &AnalyticsViewModel,
        state: &mut AppState,
        palette: &Palette,
    ) {
        if vm.accounts.is_empty() {
            render_message(
                frame,
                area,
                "Account Performance",
                vec![Line::styled("No account data yet", palette.muted())],
                palette,
            );
            return;
        }

        let header = Row::new(["Account", "Posts", "Avg Score", "Last Generated"])
            .style(palette.title());

        let rows: Vec<Row> = vm
            .accounts
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(format!("Account {}", row.id)),
                    Cell::from(row.posts.to_string()),
                    Cell::from(row.avg_score.as_str()),
                    Cell::from(row.last_generated.as_str()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(panel("Account Performance", palette))
        .row_highlight_style(palette.active())
        .highlight_symbol("▶ ");

        if state.analytics_view.table.selected().is_none() {
            state.analytics_view.table.select(Some(0));
        }
        frame.render_stateful_widget(table, area, &mut state.analytics_view.table);
    }

    fn render_share(frame: &mut Frame, area: Rect, vm: &AnalyticsViewModel, palette: &Palette) {
        let total: u64 = vm.accounts.iter().map(|r| r.posts).sum();
        if total == 0 {
            render_message(
                frame,
                area,
                "Share of Posts",
                vec![Line::from(Span::styled("No posts yet", palette.muted()))],
                palette,
            );
            return;
        }

        let labels: Vec<String> = vm
            .accounts
            .iter()
            .map(|r| format!("{} ({})", r.id, r.posts))
            .collect();

        let mut slices: Vec<PieSlice> = vm
            .accounts
            .iter()
            .zip(labels.iter())
            .enumerate()
            .filter(|(_, (row, _))| row.posts > 0)
            .map(|(i, (row, label))| {
                PieSlice::new(label, row.posts as f64, SLICE_COLORS[i % SLICE_COLORS.len()])
            })
            .collect();

        // A lone slice renders as a sliver; pad with an invisible one
        if slices.len() == 1 {
            slices.push(PieSlice::new("", 0.001, Color::Reset));
        }

        let chart = PieChart::new(slices)
            .show_legend(true)
            .show_percentages(true)
            .block(panel("Share of Posts", palette));

        frame.render_widget(chart, area);
    }
}
