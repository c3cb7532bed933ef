//! Page scroll animator
//!
//! Key presses move a target offset; `update()` eases the visible offset toward
//! it each frame. With smooth scrolling disabled the offset jumps immediately.

use std::time::{Duration, Instant};

use gwanak_core::ScrollConfig;

use super::easing::EasingTypeExt;
use super::timing::{lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
}

#[derive(Debug, Clone)]
pub struct PageScroller {
    config: ScrollConfig,
    animation: Option<ActiveAnimation>,
    current: u16,
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            animation: None,
            current: 0,
        }
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    pub fn scroll_lines(&self) -> u16 {
        self.config.scroll_lines.max(1)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset currently on screen
    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Offset the page is heading to
    pub fn target(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Start moving toward `target`, clamped to `max_scroll`
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);

        if !self.is_smooth() || target == self.current {
            self.current = target;
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Move the target by `delta` rows; repeated presses chain onto the target
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16, now: Instant) {
        let target = (i32::from(self.target()) + delta).clamp(0, i32::from(max_scroll)) as u16;
        self.scroll_to(target, max_scroll, now);
    }

    /// Advance the animation and return the offset to render
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if let Some(anim) = &self.animation {
            let t = progress(anim.start, now, self.duration());
            if t >= 1.0 {
                self.current = anim.to;
                self.animation = None;
            } else {
                let eased = self.config.easing.apply(t);
                self.current = lerp_u16(anim.from, anim.to, eased);
            }
        }
        // The page may have shrunk since the animation started
        self.current = self.current.min(max_scroll);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut scroller = PageScroller::new(config);
        scroller.scroll_to(40, 200, Instant::now());
        assert_eq!(scroller.current(), 40);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut scroller = PageScroller::new(smooth());
        let start = Instant::now();
        scroller.scroll_to(50, 200, start);
        assert!(scroller.is_animating());
        assert_eq!(scroller.target(), 50);

        let mid = scroller.update(200, start + Duration::from_millis(50));
        assert!(mid > 0 && mid < 50);

        assert_eq!(scroller.update(200, start + Duration::from_millis(100)), 50);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_scroll_by_chains_on_target() {
        let mut scroller = PageScroller::new(smooth());
        let now = Instant::now();
        scroller.scroll_by(10, 200, now);
        scroller.scroll_by(10, 200, now);
        scroller.scroll_by(10, 200, now);
        assert_eq!(scroller.target(), 30);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut scroller = PageScroller::new(smooth());
        let now = Instant::now();
        scroller.scroll_by(-5, 100, now);
        assert_eq!(scroller.target(), 0);
        scroller.scroll_to(300, 100, now);
        assert_eq!(scroller.target(), 100);
    }

    #[test]
    fn test_update_clamps_when_page_shrinks() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut scroller = PageScroller::new(config);
        let now = Instant::now();
        scroller.scroll_to(80, 100, now);
        assert_eq!(scroller.update(60, now), 60);
    }
}
