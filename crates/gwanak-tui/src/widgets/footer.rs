use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{body_area, section_title};
use crate::app::App;
use crate::layout::Section;

pub struct FooterWidget;

impl FooterWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::Footer, now);
        buf.set_style(area, Style::default().bg(theme.surface));
        Paragraph::new(section_title(app, Section::Footer, t)).render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(body_area(area));

        let text = Style::default().fg(theme.fade(theme.text, t));
        let muted = Style::default().fg(theme.fade(theme.muted, t));

        let mut addresses = Vec::new();
        for campus in &app.content.campuses {
            addresses.push(Line::from(vec![
                Span::styled(
                    format!("{}  ", campus.name),
                    text.add_modifier(Modifier::BOLD),
                ),
                Span::styled(campus.address.clone(), muted),
            ]));
            let contact: Vec<String> = [("Tel", campus.phone.as_deref()), ("Fax", campus.fax.as_deref())]
                .into_iter()
                .filter_map(|(label, value)| value.map(|v| format!("{} {}", label, v)))
                .collect();
            if !contact.is_empty() {
                addresses.push(Line::from(Span::styled(format!("  {}", contact.join("  ")), muted)));
            }
        }
        Paragraph::new(addresses).render(columns[0], buf);

        let mut links: Vec<Line> = app
            .content
            .footer_links
            .iter()
            .map(|link| Line::from(Span::styled(link.name.clone(), text)))
            .collect();
        links.push(Line::default());
        links.push(Line::from(Span::styled(
            app.content
                .legal_links
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(" | "),
            muted,
        )));
        links.push(Line::from(Span::styled(
            app.content.social.join(" · "),
            Style::default().fg(theme.fade(theme.accent, t)),
        )));
        Paragraph::new(links).render(columns[1], buf);
    }
}
