use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::keymap::Keymap;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key binding overlay centered on the frame
    pub fn render(frame: &mut Frame, app: &App, keymap: &Keymap) {
        let theme = &app.theme;
        let rows = keymap.describe();

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(action, key)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>12}  ", key),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(action.clone(), Style::default().fg(theme.text)),
                ])
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>12}  ", "1-9"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("GoToSlide (campus)", Style::default().fg(theme.text)),
        ]));
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
        );

        let area = frame.area();
        let width = 48u16.min(area.width.saturating_sub(4));
        let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(width, height, area);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(" Key Bindings ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface));
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
        // Larger than the area: pinned to the origin
        assert_eq!(centered_rect(120, 50, area), Rect::new(0, 0, 120, 50));
    }
}
