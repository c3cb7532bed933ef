use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::layout::Section;

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let hero = &app.content.hero;
        let t = app.reveal_progress(Section::Hero, now);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(2),                              // Badge
                Constraint::Length(hero.headline.len() as u16 + 1), // Headline
                Constraint::Length(3),                              // Subheading
                Constraint::Length(1),                              // Spacer
                Constraint::Length(1),                              // Actions
                Constraint::Fill(1),
                Constraint::Length(1), // Scroll hint
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", hero.badge),
            Style::default()
                .fg(theme.fade(theme.accent, t))
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        // The second headline line trails the first
        let headline: Vec<Line> = hero
            .headline
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let line_t = (t * 1.5 - 0.5 * i as f64).clamp(0.0, 1.0);
                let color = if i == 0 { theme.text } else { theme.accent };
                Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.fade(color, line_t))
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        Paragraph::new(headline)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        let sub_area = Rect {
            x: chunks[3].x + chunks[3].width / 8,
            width: chunks[3].width - chunks[3].width / 4,
            ..chunks[3]
        };
        Paragraph::new(hero.subheading.as_str())
            .style(Style::default().fg(theme.fade(theme.muted, t)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(sub_area, buf);

        let mut actions = Vec::new();
        for (i, action) in hero.actions.iter().enumerate() {
            if i > 0 {
                actions.push(Span::raw("   "));
            }
            let style = if i == 0 {
                Style::default()
                    .fg(theme.fade(theme.background, t))
                    .bg(theme.fade(theme.accent, t))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.fade(theme.text, t))
                    .add_modifier(Modifier::UNDERLINED)
            };
            actions.push(Span::styled(format!(" {} ", action), style));
        }
        Paragraph::new(Line::from(actions))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        Paragraph::new("scroll ↓")
            .style(Style::default().fg(theme.fade(theme.muted, t)))
            .alignment(Alignment::Center)
            .render(chunks[7], buf);
    }
}
