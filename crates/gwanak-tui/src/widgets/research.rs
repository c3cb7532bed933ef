use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{body_area, card, section_title};
use crate::app::App;
use crate::layout::Section;

pub struct ResearchWidget;

impl ResearchWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::Research, now);
        Paragraph::new(section_title(app, Section::Research, t)).render(area, buf);

        let items = &app.content.research;
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, items.len().max(1) as u32); items.len()])
            .split(body_area(area));

        for (i, (item, rect)) in items.iter().zip(cards.iter()).enumerate() {
            let block = card(app, app.selected_research == i, t);
            let inner = block.inner(*rect);
            block.render(*rect, buf);

            let lines = vec![
                Line::from(Span::styled(
                    item.category.to_uppercase(),
                    Style::default().fg(theme.fade(theme.accent, t)),
                )),
                Line::from(Span::styled(
                    item.title.clone(),
                    Style::default()
                        .fg(theme.fade(theme.text, t))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    item.description.clone(),
                    Style::default().fg(theme.fade(theme.muted, t)),
                )),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
    }
}
