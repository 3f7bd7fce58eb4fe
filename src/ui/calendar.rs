// Calendar screen: month grid with content markers

use crate::api::DailyPoint;
use crate::ui::components::panel;
use crate::ui::state::AppState;
use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};
use std::collections::BTreeSet;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub today: bool,
    pub has_content: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarViewModel {
    pub title: String,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Days of `year`/`month` that have at least one post
pub fn content_days(daily: &[DailyPoint], year: i32, month: u32) -> BTreeSet<u32> {
    daily
        .iter()
        .filter(|p| p.posts > 0)
        .filter_map(|p| NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok())
        .filter(|d| d.year() == year && d.month() == month)
        .map(|d| d.day())
        .collect()
}

impl CalendarViewModel {
    pub fn month(
        year: i32,
        month: u32,
        today: Option<u32>,
        selected: u32,
        content: &BTreeSet<u32>,
    ) -> Self {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Self {
                title: String::new(),
                weeks: Vec::new(),
            };
        };

        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(year, month);

        let mut weeks = Vec::new();
        let mut week: [Option<DayCell>; 7] = [None; 7];
        let mut slot = leading;

        for day in 1..=days {
            week[slot] = Some(DayCell {
                day,
                today: today == Some(day),
                has_content: content.contains(&day),
                selected: day == selected,
            });
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }

        Self {
            title: first.format("%B %Y").to_string(),
            weeks,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        let today = Local::now().date_naive();
        let content = content_days(&state.analytics.daily_data, today.year(), today.month());
        Self::month(
            today.year(),
            today.month(),
            Some(today.day()),
            state.calendar.selected_day,
            &content,
        )
    }
}

/// Move the selected day by `delta`, staying inside the current month
pub fn shift_selected_day(state: &mut AppState, delta: i32) {
    let today = Local::now().date_naive();
    let last = days_in_month(today.year(), today.month()) as i32;
    let day = (state.calendar.selected_day as i32 + delta).clamp(1, last);
    state.calendar.selected_day = day as u32;
}

pub struct CalendarScreen;

impl CalendarScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = CalendarViewModel::from_state(state);
        let palette = state.palette();

        let header = Row::new(WEEKDAYS.map(|d| Cell::from(d).style(palette.title())));

        let rows: Vec<Row> = vm
            .weeks
            .iter()
            .map(|week| {
                let cells: Vec<Cell> = week
                    .iter()
                    .map(|slot| match slot {
                        None => Cell::from(""),
                        Some(day) => {
                            let mark = if day.has_content { " ✓" } else { "" };
                            let mut style = Style::default().fg(palette.fg);
                            if day.has_content {
                                style = style.fg(palette.success);
                            }
                            if day.today {
                                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                            }
                            if day.selected {
                                style = palette.active();
                            }
                            Cell::from(format!("{:>2}{}", day.day, mark)).style(style)
                        }
                    })
                    .collect();
                Row::new(cells).height(2)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
            .header(header.height(2))
            .block(panel(&vm.title, &palette));

        let chunks = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        frame.render_widget(table, chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::styled(
                "✓ content generated   underlined: today",
                palette.muted(),
            ))
            .alignment(Alignment::Center),
            chunks[1],
        );
    }
}
