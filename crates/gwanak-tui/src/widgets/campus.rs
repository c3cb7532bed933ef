use std::time::Instant;

use gwanak_core::{CarouselSnapshot, SlidePosition};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use super::{body_area, card, section_title, truncate_str};
use crate::app::App;
use crate::layout::Section;
use crate::theme::Theme;

/// The campus carousel: the current slide, a thumbnail strip and progress
pub struct CampusWidget;

impl CampusWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let t = app.reveal_progress(Section::Campus, now);
        Paragraph::new(section_title(app, Section::Campus, t)).render(area, buf);

        let snapshot = app.campus.snapshot();
        let slides = app.campus.slides();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Current slide
                Constraint::Length(4), // Thumbnails
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Autoplay indicator
            ])
            .split(body_area(area));

        let slide = &slides[snapshot.current_index];
        let block = card(app, app.focus.section() == Section::Campus, t)
            .title(Line::from(format!(" {} ", slide.image)).alignment(Alignment::Right))
            .title_style(Style::default().fg(theme.fade(theme.muted, t)));
        let inner = block.inner(rows[0]);
        block.render(rows[0], buf);
        let lines = vec![
            Line::from(Span::styled(
                format!("◉ {}", slide.location),
                Style::default().fg(theme.fade(theme.accent, t)),
            )),
            Line::default(),
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default()
                    .fg(theme.fade(theme.text, t))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                slide.description.clone(),
                Style::default().fg(theme.fade(theme.muted, t)),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let thumbs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, slides.len() as u32); slides.len()])
            .split(rows[1]);
        for (index, (slide, rect)) in slides.iter().zip(thumbs.iter()).enumerate() {
            let position = snapshot.position_of(index);
            let style = thumbnail_style(theme, position, t);
            let block = card(app, position == SlidePosition::Current, t);
            let inner = block.inner(*rect);
            block.render(*rect, buf);
            let label = format!(
                "{} {}",
                index + 1,
                truncate_str(&slide.title, inner.width.saturating_sub(2) as usize)
            );
            Paragraph::new(Line::from(Span::styled(label, style))).render(inner, buf);
        }

        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.fade(theme.accent, t))
                    .bg(theme.surface),
            )
            .ratio(snapshot.progress().clamp(0.0, 1.0))
            .label(format!(
                "{} / {}",
                snapshot.current_index + 1,
                snapshot.slide_count
            ))
            .render(rows[2], buf);

        Paragraph::new(autoplay_indicator(theme, &snapshot, t))
            .alignment(Alignment::Right)
            .render(rows[3], buf);
    }
}

fn thumbnail_style(theme: &Theme, position: SlidePosition, t: f64) -> Style {
    match position {
        SlidePosition::Current => Style::default()
            .fg(theme.fade(theme.accent, t))
            .add_modifier(Modifier::BOLD),
        SlidePosition::Passed => Style::default()
            .fg(theme.fade(theme.muted, t))
            .add_modifier(Modifier::DIM),
        SlidePosition::Upcoming => Style::default().fg(theme.fade(theme.text, t)),
    }
}

fn autoplay_indicator<'a>(theme: &Theme, snapshot: &CarouselSnapshot, t: f64) -> Line<'a> {
    let (symbol, text, color) = if !snapshot.is_visible {
        ("○", "waiting", theme.muted)
    } else if snapshot.is_auto_playing {
        ("▶", "autoplay", theme.success)
    } else {
        ("⏸", "paused", theme.warning)
    };
    Line::from(vec![
        Span::styled(format!("{} ", symbol), Style::default().fg(theme.fade(color, t))),
        Span::styled(text, Style::default().fg(theme.fade(theme.muted, t))),
        Span::styled("  h/l 1-4", Style::default().fg(theme.fade(theme.border, t))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(visible: bool, playing: bool) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: 1,
            slide_count: 4,
            is_auto_playing: playing,
            is_visible: visible,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_autoplay_indicator_states() {
        let theme = Theme::default();
        assert!(text(&autoplay_indicator(&theme, &snapshot(false, true), 1.0)).contains("waiting"));
        assert!(text(&autoplay_indicator(&theme, &snapshot(true, true), 1.0)).contains("autoplay"));
        assert!(text(&autoplay_indicator(&theme, &snapshot(true, false), 1.0)).contains("paused"));
    }

    #[test]
    fn test_current_thumbnail_is_bold() {
        let theme = Theme::default();
        let style = thumbnail_style(&theme, SlidePosition::Current, 1.0);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        let style = thumbnail_style(&theme, SlidePosition::Passed, 1.0);
        assert!(style.add_modifier.contains(Modifier::DIM));
    }
}
