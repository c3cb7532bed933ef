use std::time::Instant;

use gwanak_core::counter::format_thousands;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{body_area, card, section_title};
use crate::app::App;
use crate::layout::Section;

pub struct StatsWidget;

impl StatsWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::Stats, now);
        Paragraph::new(section_title(app, Section::Stats, t)).render(area, buf);

        let body = body_area(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Length(1), Constraint::Min(1)])
            .split(body);

        let stats = &app.content.stats;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, stats.len().max(1) as u32); stats.len()])
            .split(rows[0]);

        for (i, (stat, column)) in stats.iter().zip(columns.iter()).enumerate() {
            let block = card(app, false, t);
            let inner = block.inner(*column);
            block.render(*column, buf);

            let value = format!("{}{}", format_thousands(app.counter_value(i, now)), stat.suffix);
            let lines = vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(theme.fade(theme.accent, t))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    stat.label.clone(),
                    Style::default().fg(theme.fade(theme.text, t)),
                )),
                Line::from(Span::styled(
                    stat.sublabel.clone(),
                    Style::default().fg(theme.fade(theme.muted, t)),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(inner, buf);
        }

        let holdings = &app.content.library_holdings;
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", holdings.label),
                Style::default().fg(theme.fade(theme.muted, t)),
            ),
            Span::styled(
                format_thousands(app.counter_value(stats.len(), now)),
                Style::default()
                    .fg(theme.fade(theme.text, t))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(rows[2], buf);
    }
}
