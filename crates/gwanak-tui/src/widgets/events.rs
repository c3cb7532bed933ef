use std::time::Instant;

use gwanak_core::content::EventStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{body_area, section_title, truncate_str};
use crate::app::App;
use crate::layout::Section;
use crate::theme::Theme;

/// Vertical timeline of events, each with a status badge for today's date
pub struct EventsWidget;

impl EventsWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::Events, now);
        Paragraph::new(section_title(app, Section::Events, t)).render(area, buf);

        let body = body_area(area);
        let title_width = body.width.saturating_sub(40) as usize;
        let mut lines = Vec::new();

        for (i, event) in app.content.events.iter().enumerate() {
            let selected = app.selected_event == i;
            let (label, color) = status_badge(theme, event.status(app.today));
            let node = if selected { "◆" } else { "◇" };
            let title_style = if selected {
                Style::default()
                    .fg(theme.fade(theme.text, t))
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fade(theme.text, t))
            };

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", node),
                    Style::default().fg(theme.fade(theme.accent, t)),
                ),
                Span::styled(
                    format!("{:<9}", label),
                    Style::default()
                        .fg(theme.fade(color, t))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(truncate_str(&event.title, title_width), title_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(theme.fade(theme.border, t))),
                Span::styled(
                    format!(
                        "{:<9}{} ~ {}  ·  {}  ·  {}",
                        "",
                        event.start_date.format("%Y.%m.%d"),
                        event.end_date.format("%Y.%m.%d"),
                        event.location,
                        event.kind
                    ),
                    Style::default().fg(theme.fade(theme.muted, t)),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                "│",
                Style::default().fg(theme.fade(theme.border, t)),
            )));
        }

        Paragraph::new(lines).render(body, buf);
    }
}

fn status_badge(theme: &Theme, status: EventStatus) -> (&'static str, Color) {
    match status {
        EventStatus::Upcoming => ("UPCOMING", theme.info),
        EventStatus::Ongoing => ("ONGOING", theme.success),
        EventStatus::Ended => ("ENDED", theme.muted),
    }
}
