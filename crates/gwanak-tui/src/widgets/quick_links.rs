use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use super::{body_area, section_title};
use crate::app::{App, QUICK_LINKS_HEADING};
use crate::layout::Section;

/// Audience tabs under a typed-out heading, with the link grid below
pub struct QuickLinksWidget;

impl QuickLinksWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::QuickLinks, now);
        Paragraph::new(section_title(app, Section::QuickLinks, t)).render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(2), // Tabs
                Constraint::Min(1),    // Links
            ])
            .split(body_area(area));

        let typed = app.typewriter_text(now);
        let mut heading = vec![Span::styled(
            typed,
            Style::default()
                .fg(theme.fade(theme.text, t))
                .add_modifier(Modifier::BOLD),
        )];
        if typed.len() < QUICK_LINKS_HEADING.len() {
            heading.push(Span::styled("▌", Style::default().fg(theme.accent)));
        } else {
            heading.push(Span::styled("...?", Style::default().fg(theme.fade(theme.muted, t))));
        }
        Paragraph::new(Line::from(heading)).render(rows[0], buf);

        let titles: Vec<Line> = app
            .content
            .audiences
            .iter()
            .map(|a| Line::from(a.label.clone()))
            .collect();
        Tabs::new(titles)
            .select(app.active_audience)
            .style(Style::default().fg(theme.fade(theme.muted, t)))
            .highlight_style(
                Style::default()
                    .fg(theme.fade(theme.accent, t))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│")
            .render(rows[1], buf);

        let links = &app.content.quick_links;
        let half = links.len().div_ceil(2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        for (column, chunk) in columns.iter().zip(links.chunks(half.max(1))) {
            let lines: Vec<Line> = chunk
                .iter()
                .map(|link| {
                    Line::from(vec![
                        Span::styled("→ ", Style::default().fg(theme.fade(theme.accent, t))),
                        Span::styled(
                            link.label.clone(),
                            Style::default().fg(theme.fade(theme.text, t)),
                        ),
                    ])
                })
                .collect();
            Paragraph::new(lines).render(*column, buf);
        }
    }
}
