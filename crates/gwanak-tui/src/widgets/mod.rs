mod campus;
mod events;
mod footer;
mod help;
mod hero;
mod news;
mod page;
mod quick_links;
mod research;
mod stats;
mod status_bar;
mod top_bar;

pub use campus::CampusWidget;
pub use events::EventsWidget;
pub use footer::FooterWidget;
pub use help::HelpWidget;
pub use hero::HeroWidget;
pub use news::NewsWidget;
pub use page::PageWidget;
pub use quick_links::QuickLinksWidget;
pub use research::ResearchWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;
pub use top_bar::TopBarWidget;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::layout::Section;

/// Section heading: accent bar followed by the title, faded by `t`
pub(crate) fn section_title<'a>(app: &App, section: Section, t: f64) -> Line<'a> {
    let focused = app.focus.section() == section;
    let mut title_style = Style::default()
        .fg(app.theme.fade(app.theme.text, t))
        .add_modifier(Modifier::BOLD);
    if focused {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }
    Line::from(vec![
        Span::styled("▍", Style::default().fg(app.theme.fade(app.theme.accent, t))),
        Span::styled(section.title().to_string(), title_style),
    ])
}

/// Rounded card; the highlighted card takes the accent border
pub(crate) fn card<'a>(app: &App, highlighted: bool, t: f64) -> Block<'a> {
    let border = if highlighted {
        app.theme.accent
    } else {
        app.theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.fade(border, t)))
        .style(Style::default().bg(app.theme.surface))
}

/// Area below a one-row heading, inset by two columns on each side
pub(crate) fn body_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 2,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(3),
    }
}

/// Truncate a string to `max_width` display columns with an ellipsis
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_str("Gwanak", 10), "Gwanak");
        assert_eq!(truncate_str("Gwanak Campus", 8), "Gwanak …");
        assert_eq!(truncate_str("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each Hangul syllable is two columns wide
        let out = truncate_str("서울대학교", 5);
        assert_eq!(out, "서울…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_body_area_inset() {
        let body = body_area(Rect::new(0, 10, 40, 12));
        assert_eq!(body, Rect::new(2, 12, 36, 9));
    }
}
