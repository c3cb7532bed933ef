use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use gwanak_core::content::{SiteContent, Slide};
use gwanak_core::counter::CountUp;
use gwanak_core::{AppConfig, AutoAdvanceCarousel, VisibilityGate};
use tracing::debug;

use crate::input::Action;
use crate::layout::{PageLayout, Section};
use crate::scroll::timing::{progress, typewriter};
use crate::scroll::{EasingTypeExt, PageScroller};
use crate::theme::Theme;

/// Delay before the hero fades in after startup
const HERO_DELAY: Duration = Duration::from_millis(500);
/// Visible share that reveals the plain content sections
const SECTION_THRESHOLD: f64 = 0.1;
/// Heading typed out in the quick links section
pub const QUICK_LINKS_HEADING: &str = "Are you";
const TYPEWRITER_PER_CHAR: Duration = Duration::from_millis(80);

/// Interactive section that receives left/right input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    News,
    Research,
    Events,
    QuickLinks,
    Campus,
}

impl Focus {
    const ALL: [Focus; 5] = [
        Focus::News,
        Focus::Research,
        Focus::Events,
        Focus::QuickLinks,
        Focus::Campus,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn section(self) -> Section {
        match self {
            Focus::News => Section::News,
            Focus::Research => Section::Research,
            Focus::Events => Section::Events,
            Focus::QuickLinks => Section::QuickLinks,
            Focus::Campus => Section::Campus,
        }
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Entrance state of one section
#[derive(Debug, Clone)]
struct Reveal {
    /// None for sections revealed on a timer rather than by scrolling
    gate: Option<VisibilityGate>,
    opened_at: Option<Instant>,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub content: Arc<SiteContent>,
    /// Section receiving left/right and digit keys
    pub focus: Focus,
    pub mode: Mode,
    pub scroller: PageScroller,
    /// Terminal rows available to the page (without the bars)
    pub viewport_height: u16,
    reveals: Vec<Reveal>,
    /// One per headline stat, then the library holdings
    counters: Vec<CountUp>,
    pub selected_news: usize,
    pub selected_research: usize,
    pub selected_event: usize,
    pub active_audience: usize,
    pub campus: AutoAdvanceCarousel<Slide>,
    pub started_at: Instant,
    /// Whether the app should quit
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Date used for event status badges
    pub today: NaiveDate,
}

impl App {
    /// Must be called from within a tokio runtime (the carousel spawns a task)
    pub fn new(
        config: Arc<AppConfig>,
        theme: Theme,
        content: Arc<SiteContent>,
        now: Instant,
    ) -> anyhow::Result<Self> {
        let campus = AutoAdvanceCarousel::spawn(content.slides.clone(), &config.carousel)?;

        let reveals = Section::ALL
            .iter()
            .map(|section| match section {
                Section::Hero => Reveal {
                    gate: None,
                    opened_at: Some(now + HERO_DELAY),
                },
                Section::Stats => Reveal {
                    gate: Some(VisibilityGate::new(config.stats.visibility_threshold)),
                    opened_at: None,
                },
                Section::Campus => Reveal {
                    gate: Some(VisibilityGate::new(config.carousel.visibility_threshold)),
                    opened_at: None,
                },
                _ => Reveal {
                    gate: Some(VisibilityGate::new(SECTION_THRESHOLD)),
                    opened_at: None,
                },
            })
            .collect();

        let counters = content
            .stats
            .iter()
            .chain(std::iter::once(&content.library_holdings))
            .map(|stat| {
                CountUp::new(
                    stat.value,
                    config.stats.count_steps,
                    config.stats.count_duration(),
                )
            })
            .collect();

        Ok(Self {
            scroller: PageScroller::new(config.ui.scroll.clone()),
            config,
            theme,
            content,
            focus: Focus::Campus,
            mode: Mode::Normal,
            viewport_height: 24,
            reveals,
            counters,
            selected_news: 0,
            selected_research: 0,
            selected_event: 0,
            active_audience: 0,
            campus,
            started_at: now,
            should_quit: false,
            status_message: None,
            pending_key: None,
            today: chrono::Local::now().date_naive(),
        })
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout::new(self.viewport_height)
    }

    pub fn set_viewport_height(&mut self, height: u16, now: Instant) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.update(now);
        }
    }

    /// Advance scrolling and open any section gates the viewport now satisfies
    pub fn update(&mut self, now: Instant) {
        let max_scroll = self.layout().max_scroll();
        self.scroller.update(max_scroll, now);
        self.observe_viewport(now);
    }

    pub fn observe_viewport(&mut self, now: Instant) {
        let layout = self.layout();
        let viewport = layout.viewport(self.scroller.current());

        let mut opened = Vec::new();
        for placement in layout.placements() {
            let reveal = &mut self.reveals[placement.section.index()];
            let Some(gate) = reveal.gate.as_mut() else {
                continue;
            };
            if gate.observe_span(placement.span(), viewport) {
                reveal.opened_at = Some(now);
                opened.push(placement.section);
            }
        }

        for section in opened {
            debug!("Section revealed: {:?}", section);
            match section {
                Section::Stats => {
                    for counter in &mut self.counters {
                        counter.start(now);
                    }
                }
                Section::Campus => self.campus.reveal(),
                _ => {}
            }
        }
    }

    pub fn is_revealed(&self, section: Section, now: Instant) -> bool {
        self.reveals[section.index()]
            .opened_at
            .is_some_and(|at| at <= now)
    }

    /// Eased entrance progress in [0, 1]; 0 until the section is revealed
    pub fn reveal_progress(&self, section: Section, now: Instant) -> f64 {
        let Some(opened_at) = self.reveals[section.index()].opened_at else {
            return 0.0;
        };
        if now < opened_at {
            return 0.0;
        }
        let duration = Duration::from_millis(self.config.ui.reveal_duration_ms);
        self.config
            .ui
            .scroll
            .easing
            .apply(progress(opened_at, now, duration))
    }

    /// Displayed value of counter `index` (stats first, then library holdings)
    pub fn counter_value(&self, index: usize, now: Instant) -> u64 {
        self.counters
            .get(index)
            .map(|c| c.value_at(now))
            .unwrap_or(0)
    }

    /// Quick links heading typed so far
    pub fn typewriter_text(&self, now: Instant) -> &'static str {
        match self.reveals[Section::QuickLinks.index()].opened_at {
            Some(at) => typewriter(
                QUICK_LINKS_HEADING,
                now.saturating_duration_since(at),
                TYPEWRITER_PER_CHAR,
            ),
            None => "",
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        if self.scroller.is_animating() {
            return true;
        }
        let reveal_duration = Duration::from_millis(self.config.ui.reveal_duration_ms);
        let revealing = self.reveals.iter().any(|r| {
            r.opened_at
                .is_some_and(|at| now.saturating_duration_since(at) < reveal_duration)
        });
        let counting = self
            .counters
            .iter()
            .any(|c| c.is_started() && !c.is_finished(now));
        let typing = self.reveals[Section::QuickLinks.index()].opened_at.is_some()
            && self.typewriter_text(now).len() < QUICK_LINKS_HEADING.len();
        revealing || counting || typing
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.clear_pending_key();
        }

        let max_scroll = self.layout().max_scroll();
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            Action::ScrollDown => {
                let lines = i32::from(self.scroller.scroll_lines());
                self.scroller.scroll_by(lines, max_scroll, now);
            }
            Action::ScrollUp => {
                let lines = i32::from(self.scroller.scroll_lines());
                self.scroller.scroll_by(-lines, max_scroll, now);
            }
            Action::ScrollHalfPageDown => {
                let half = i32::from(self.viewport_height / 2).max(1);
                self.scroller.scroll_by(half, max_scroll, now);
            }
            Action::ScrollHalfPageUp => {
                let half = i32::from(self.viewport_height / 2).max(1);
                self.scroller.scroll_by(-half, max_scroll, now);
            }
            Action::JumpToTop => self.scroller.scroll_to(0, max_scroll, now),
            Action::JumpToBottom => self.scroller.scroll_to(max_scroll, max_scroll, now),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NextSection => {
                if let Some(p) = self.layout().next_anchor(self.scroller.target()) {
                    self.scroller.scroll_to(p.top, max_scroll, now);
                }
            }
            Action::PrevSection => {
                if let Some(p) = self.layout().previous_anchor(self.scroller.target()) {
                    self.scroller.scroll_to(p.top, max_scroll, now);
                }
            }
            Action::FocusNext => self.set_focus(self.focus.next(), now),
            Action::FocusPrev => self.set_focus(self.focus.prev(), now),
            Action::ItemLeft => self.move_item(false),
            Action::ItemRight => self.move_item(true),
            Action::GoToSlide(index) => {
                if index < self.campus.len() {
                    self.campus.go_to(index);
                    self.set_status(format!("Slide {}/{}", index + 1, self.campus.len()));
                }
            }
            Action::None => {}
        }

        self.observe_viewport(now);
    }

    /// Focus a section and bring it into view if it is not fully on screen
    fn set_focus(&mut self, focus: Focus, now: Instant) {
        self.focus = focus;
        let layout = self.layout();
        let placement = layout.placement(focus.section());
        let target = self.scroller.target();
        let fully_visible = placement.top >= target
            && placement.top + placement.height <= target + self.viewport_height;
        if !fully_visible {
            self.scroller.scroll_to(placement.top, layout.max_scroll(), now);
        }
    }

    fn move_item(&mut self, forward: bool) {
        let step = |selected: usize, len: usize| -> usize {
            if forward {
                (selected + 1).min(len.saturating_sub(1))
            } else {
                selected.saturating_sub(1)
            }
        };
        match self.focus {
            Focus::News => {
                self.selected_news = step(self.selected_news, self.content.news.len());
            }
            Focus::Research => {
                self.selected_research = step(self.selected_research, self.content.research.len());
            }
            Focus::Events => {
                self.selected_event = step(self.selected_event, self.content.events.len());
            }
            Focus::QuickLinks => {
                self.active_audience = step(self.active_audience, self.content.audiences.len());
            }
            Focus::Campus => {
                if forward {
                    self.campus.next();
                } else {
                    self.campus.previous();
                }
            }
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Stop the carousel task
    pub async fn shutdown(self) {
        self.campus.shutdown().await;
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let mut app = Self::new(
            Arc::new(config),
            Theme::default(),
            Arc::new(SiteContent::builtin()),
            Instant::now(),
        )
        .unwrap();
        app.viewport_height = 30;
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_to_section(app: &mut App, section: Section, now: Instant) {
        let layout = app.layout();
        let top = layout.placement(section).top;
        app.scroller.scroll_to(top, layout.max_scroll(), now);
        app.update(now);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Campus.next(), Focus::News);
        assert_eq!(Focus::News.prev(), Focus::Campus);
        assert_eq!(Focus::Research.next(), Focus::Events);
    }

    #[tokio::test]
    async fn test_campus_revealed_only_after_scrolling() {
        let mut app = App::for_tests();
        let mut rx = app.campus.subscribe();
        let now = Instant::now();

        app.update(now);
        assert!(!app.is_revealed(Section::Campus, now));
        tokio::task::yield_now().await;
        assert!(!app.campus.snapshot().is_visible);

        scroll_to_section(&mut app, Section::Campus, now);
        assert!(app.is_revealed(Section::Campus, now));

        rx.changed().await.unwrap();
        let snapshot = *rx.borrow();
        assert!(snapshot.is_visible);
        assert!(snapshot.is_auto_playing);
    }

    #[tokio::test]
    async fn test_stats_counters_start_on_reveal() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.update(now);
        assert_eq!(app.counter_value(3, now + Duration::from_secs(5)), 0);

        scroll_to_section(&mut app, Section::Stats, now);
        let later = now + app.config.stats.count_duration();
        assert_eq!(app.counter_value(3, later), 31_544);
        assert_eq!(app.counter_value(4, later), 5_477_022);
    }

    #[tokio::test]
    async fn test_hero_fades_in_after_delay() {
        let app = App::for_tests();
        let start = app.started_at;
        assert_eq!(app.reveal_progress(Section::Hero, start), 0.0);
        assert_eq!(
            app.reveal_progress(Section::Hero, start + Duration::from_millis(400)),
            0.0
        );
        let done = start + HERO_DELAY + Duration::from_millis(app.config.ui.reveal_duration_ms);
        assert_eq!(app.reveal_progress(Section::Hero, done), 1.0);
    }

    #[tokio::test]
    async fn test_typewriter_after_quick_links_reveal() {
        let mut app = App::for_tests();
        let now = Instant::now();
        assert_eq!(app.typewriter_text(now), "");

        scroll_to_section(&mut app, Section::QuickLinks, now);
        assert_eq!(app.typewriter_text(now + Duration::from_millis(250)), "Are");
        assert_eq!(app.typewriter_text(now + Duration::from_secs(2)), "Are you");
    }

    #[tokio::test]
    async fn test_section_jumps() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.handle_action(Action::NextSection, now);
        assert_eq!(app.scroller.current(), app.layout().placement(Section::Stats).top);
        app.handle_action(Action::PrevSection, now);
        assert_eq!(app.scroller.current(), 0);
    }

    #[tokio::test]
    async fn test_focus_scrolls_into_view() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.focus = Focus::QuickLinks;
        app.handle_action(Action::FocusNext, now);
        assert_eq!(app.focus, Focus::Campus);
        assert_eq!(app.scroller.current(), app.layout().placement(Section::Campus).top);
        assert!(app.is_revealed(Section::Campus, now));
    }

    #[tokio::test]
    async fn test_item_selection_clamps() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.focus = Focus::Research;
        for _ in 0..10 {
            app.handle_action(Action::ItemRight, now);
        }
        assert_eq!(app.selected_research, app.content.research.len() - 1);
        app.handle_action(Action::ItemLeft, now);
        assert_eq!(app.selected_research, app.content.research.len() - 2);
    }

    #[tokio::test]
    async fn test_pending_key_cleared_by_other_actions() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.handle_action(Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::ScrollDown, now);
        assert_eq!(app.pending_key, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_slide_pauses_autoplay() {
        let mut app = App::for_tests();
        let mut rx = app.campus.subscribe();
        let now = Instant::now();

        app.handle_action(Action::GoToSlide(2), now);
        rx.changed().await.unwrap();
        let snapshot = *rx.borrow();
        assert_eq!(snapshot.current_index, 2);
        assert!(!snapshot.is_auto_playing);
        assert_eq!(app.status_message.as_deref(), Some("Slide 3/4"));
    }
}
