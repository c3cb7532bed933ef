use std::time::Instant;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};

use super::{
    CampusWidget, EventsWidget, FooterWidget, HeroWidget, NewsWidget, QuickLinksWidget,
    ResearchWidget, StatsWidget,
};
use crate::app::App;
use crate::layout::Section;

/// The scrolling page. Every section is drawn into an off-screen buffer as tall
/// as the whole page, then the rows under the viewport are copied to the frame.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let page = Self::render_page(area.width, app, now);
        let scroll = app.scroller.current();
        let target = frame.buffer_mut();

        for row in 0..area.height {
            let page_y = scroll.saturating_add(row);
            if page_y >= page.area.height {
                break;
            }
            for col in 0..area.width {
                if let (Some(src), Some(dst)) = (
                    page.cell((col, page_y)),
                    target.cell_mut((area.x + col, area.y + row)),
                ) {
                    *dst = src.clone();
                }
            }
        }
    }

    fn render_page(width: u16, app: &App, now: Instant) -> Buffer {
        let layout = app.layout();
        // Built directly: the page is usually taller than any terminal
        let page_area = Rect {
            x: 0,
            y: 0,
            width,
            height: layout.page_height(),
        };
        let mut page = Buffer::empty(page_area);
        page.set_style(
            page_area,
            Style::default().bg(app.theme.background).fg(app.theme.text),
        );

        for placement in layout.placements() {
            let area = Rect {
                x: 0,
                y: placement.top,
                width,
                height: placement.height,
            };
            let buf = &mut page;
            match placement.section {
                Section::Hero => HeroWidget::render(buf, area, app, now),
                Section::Stats => StatsWidget::render(buf, area, app, now),
                Section::News => NewsWidget::render(buf, area, app, now),
                Section::Research => ResearchWidget::render(buf, area, app, now),
                Section::Events => EventsWidget::render(buf, area, app, now),
                Section::QuickLinks => QuickLinksWidget::render(buf, area, app, now),
                Section::Campus => CampusWidget::render(buf, area, app, now),
                Section::Footer => FooterWidget::render(buf, area, app, now),
            }
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_renders_viewport_window() {
        let mut app = App::for_tests();
        let now = app.started_at + std::time::Duration::from_secs(5);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let stats_top = app.layout().placement(Section::Stats).top;
        app.scroller.scroll_to(stats_top, app.layout().max_scroll(), now);
        app.update(now);

        terminal
            .draw(|f| PageWidget::render(f, f.area(), &app, now))
            .unwrap();
        let first = row_text(terminal.backend().buffer(), 0);
        assert!(first.contains("Numbers"), "got {:?}", first);
    }

    #[tokio::test]
    async fn test_page_buffer_covers_all_sections() {
        let app = App::for_tests();
        let page = PageWidget::render_page(100, &app, app.started_at);
        assert_eq!(page.area.height, app.layout().page_height());
    }
}
