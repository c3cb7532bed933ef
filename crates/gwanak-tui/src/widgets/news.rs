use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{body_area, card, section_title, truncate_str};
use crate::app::App;
use crate::layout::Section;

/// Featured stories as large cards on the left, the rest as a dated list
pub struct NewsWidget;

impl NewsWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::News, now);
        Paragraph::new(section_title(app, Section::News, t)).render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(body_area(area));

        // Selection indexes the full list, featured first
        let featured: Vec<_> = app.content.featured_news().collect();
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, featured.len().max(1) as u32); featured.len()])
            .split(columns[0]);

        for (i, (item, rect)) in featured.iter().zip(cards.iter()).enumerate() {
            let highlighted = app.selected_news == i;
            let block = card(app, highlighted, t);
            let inner = block.inner(*rect);
            block.render(*rect, buf);

            let mut badge = vec![Span::styled(
                item.category.clone(),
                Style::default()
                    .fg(theme.fade(theme.accent, t))
                    .add_modifier(Modifier::BOLD),
            )];
            if item.is_video {
                badge.push(Span::styled(" ▶ video", Style::default().fg(theme.fade(theme.info, t))));
            }
            let lines = vec![
                Line::from(badge),
                Line::from(Span::styled(
                    item.title.clone(),
                    Style::default().fg(theme.fade(theme.text, t)),
                )),
                Line::from(Span::styled(
                    item.date.format("%Y.%m.%d").to_string(),
                    Style::default().fg(theme.fade(theme.muted, t)),
                )),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }

        let offset = featured.len();
        let width = columns[1].width.saturating_sub(14) as usize;
        let lines: Vec<Line> = app
            .content
            .latest_news()
            .enumerate()
            .map(|(i, item)| {
                let selected = app.selected_news == offset + i;
                let marker = if selected { "› " } else { "  " };
                let title_style = if selected {
                    Style::default()
                        .fg(theme.fade(theme.text, t))
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fade(theme.text, t))
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.fade(theme.accent, t))),
                    Span::styled(
                        format!("{} ", item.date.format("%m.%d")),
                        Style::default().fg(theme.fade(theme.muted, t)),
                    ),
                    Span::styled(truncate_str(&item.title, width), title_style),
                ])
            })
            .flat_map(|line| [line, Line::default()])
            .collect();
        Paragraph::new(lines).render(columns[1], buf);
    }
}
