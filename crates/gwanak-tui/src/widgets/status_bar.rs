use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let layout = app.layout();
        let scroll = app.scroller.current();
        let percent = if layout.max_scroll() == 0 {
            100
        } else {
            u32::from(scroll) * 100 / u32::from(layout.max_scroll())
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | Focus: {} | {}%",
                mode_str,
                layout.section_at(scroll).title(),
                app.focus.section().title(),
                percent
            )
        };

        let help_hint = " q:quit j/k:scroll [/]:section tab:focus h/l:item ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.text).bg(theme.selection),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.selection),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.selection),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
