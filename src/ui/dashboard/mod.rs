// Dashboard screen implementation

use crate::ui::components::panel;
use crate::ui::format::{excerpt, format_average, format_score};
use crate::ui::state::{AppState, Loadable, QuickAction};
use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentPostRow {
    pub number: u32,
    pub score: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentActivity {
    Loading,
    Empty,
    Failed(String),
    Posts(Vec<RecentPostRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub stats: Vec<StatCard>,
    pub recent: RecentActivity,
    pub actions: Vec<&'static str>,
}

impl DashboardViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let analytics = &state.analytics;

        let stats = vec![
            StatCard {
                label: "Total Posts",
                value: analytics.total_posts().to_string(),
            },
            StatCard {
                label: "This Month",
                value: analytics.month_posts().to_string(),
            },
            StatCard {
                label: "Active Accounts",
                value: state.accounts.len().to_string(),
            },
            StatCard {
                label: "Avg Score",
                value: format_average(analytics.avg_score()),
            },
        ];

        let recent = match &state.dashboard.recent {
            Loadable::NotRequested | Loadable::Loading => RecentActivity::Loading,
            Loadable::Failed(msg) => RecentActivity::Failed(msg.clone()),
            Loadable::Ready(posts) if posts.is_empty() => RecentActivity::Empty,
            Loadable::Ready(posts) => RecentActivity::Posts(
                posts
                    .iter()
                    .map(|post| RecentPostRow {
                        number: post.number.unwrap_or(1),
                        score: format!(
                            "⭐ {}/10",
                            format_score(post.score())
                        ),
                        excerpt: excerpt(&post.content),
                    })
                    .collect(),
            ),
        };

        Self {
            stats,
            recent,
            actions: QuickAction::ALL.iter().map(|a| a.label()).collect(),
        }
    }
}

pub struct Dashboard;

impl Dashboard {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = DashboardViewModel::from_state(state);
        let palette = state.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Stat cards
                Constraint::Min(0),    // Recent activity + quick actions
            ])
            .split(area);

        Self::render_stats(frame, chunks[0], &vm, &palette);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);

        Self::render_recent(frame, columns[0], &vm, &palette);
        Self::render_actions(frame, columns[1], &vm, state, &palette);
    }

    fn render_stats(frame: &mut Frame, area: Rect, vm: &DashboardViewModel, palette: &Palette) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, vm.stats.len() as u32); vm.stats.len()])
            .split(area);

        for (card, rect) in vm.stats.iter().zip(cards.iter()) {
            let value = Paragraph::new(Line::from(Span::styled(
                card.value.as_str(),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(panel(card.label, palette));
            frame.render_widget(value, *rect);
        }
    }

    fn render_recent(frame: &mut Frame, area: Rect, vm: &DashboardViewModel, palette: &Palette) {
        let block = panel("Recent Activity", palette);

        let lines: Vec<Line> = match &vm.recent {
            RecentActivity::Loading => vec![Line::styled("Loading...", palette.muted())],
            RecentActivity::Empty => {
                vec![Line::styled("No posts yet. Start generating!", palette.muted())]
            }
            RecentActivity::Failed(msg) => {
                vec![Line::styled(msg.as_str(), Style::default().fg(palette.error))]
            }
            RecentActivity::Posts(rows) => rows
                .iter()
                .flat_map(|row| {
                    [
                        Line::from(vec![
                            Span::styled(
                                format!("Post #{}", row.number),
                                Style::default()
                                    .fg(palette.fg)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Span::styled(row.score.as_str(), Style::default().fg(palette.accent)),
                        ]),
                        Line::styled(row.excerpt.as_str(), palette.muted()),
                        Line::from(""),
                    ]
                })
                .collect(),
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_actions(
        frame: &mut Frame,
        area: Rect,
        vm: &DashboardViewModel,
        state: &mut AppState,
        palette: &Palette,
    ) {
        let items: Vec<ListItem> = vm
            .actions
            .iter()
            .map(|label| ListItem::new(Line::from(*label)))
            .collect();

        let list = List::new(items)
            .block(panel("Quick Actions", palette))
            .highlight_style(palette.active())
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut state.dashboard.actions);
    }
}
