use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// University name, anchor list and clock
pub struct TopBarWidget;

impl TopBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let current = app.layout().section_at(app.scroller.current());

        let mut spans = vec![Span::styled(
            " SNU ",
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::styled(
            " Seoul National University  ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
        for anchor in &app.content.anchors {
            let style = if anchor == current.title() {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            spans.push(Span::styled(anchor.clone(), style));
            spans.push(Span::raw("  "));
        }

        let clock = Local::now().format(" %Y-%m-%d %H:%M ").to_string();
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (area.width as usize).saturating_sub(used + clock.width());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(clock, Style::default().fg(theme.muted)));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
            area,
        );
    }
}
