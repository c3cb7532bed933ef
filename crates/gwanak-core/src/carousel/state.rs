//! Pure carousel state machine
//!
//! Index arithmetic and the autoplay/visibility flags live here, free of any
//! timer. The runner in `component` owns the timers and feeds their expiries
//! back in; this keeps every transition testable without a runtime.

use serde::Serialize;

use crate::{Error, Result};

/// Where a slide sits relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    /// Already shown, exits to the left
    Passed,
    Current,
    /// Not yet shown, enters from the right
    Upcoming,
}

/// Read-only view of a carousel published to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub slide_count: usize,
    pub is_auto_playing: bool,
    pub is_visible: bool,
}

impl CarouselSnapshot {
    pub fn position_of(&self, index: usize) -> SlidePosition {
        position_of(self.current_index, index)
    }

    /// Fill ratio of the progress bar, `(current + 1) / count`
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.slide_count as f64
    }
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    current_index: usize,
    slide_count: usize,
    is_auto_playing: bool,
    is_visible: bool,
    /// Bumped on every manual navigation; only the latest cooldown may resume autoplay
    cooldown_generation: u64,
}

impl CarouselState {
    /// Start at the first slide, autoplay enabled, not yet visible
    pub fn new(slide_count: usize) -> Result<Self> {
        if slide_count == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self {
            current_index: 0,
            slide_count,
            is_auto_playing: true,
            is_visible: false,
            cooldown_generation: 0,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn cooldown_generation(&self) -> u64 {
        self.cooldown_generation
    }

    /// The autoplay interval must be armed exactly while this holds
    pub fn autoplay_armed(&self) -> bool {
        self.is_auto_playing && self.is_visible
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            slide_count: self.slide_count,
            is_auto_playing: self.is_auto_playing,
            is_visible: self.is_visible,
        }
    }

    pub fn position_of(&self, index: usize) -> SlidePosition {
        position_of(self.current_index, index)
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.slide_count;
    }

    pub fn previous(&mut self) {
        self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
    }

    /// Jump to `index` without touching autoplay.
    ///
    /// # Panics
    /// If `index` is not a valid slide index.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.slide_count,
            "slide index {} out of range for {} slides",
            index,
            self.slide_count
        );
        self.current_index = index;
    }

    /// User pressed the "next" arrow
    pub fn manual_next(&mut self) -> u64 {
        self.next();
        self.suspend_autoplay()
    }

    /// User pressed the "previous" arrow
    pub fn manual_previous(&mut self) -> u64 {
        self.previous();
        self.suspend_autoplay()
    }

    /// User picked a slide directly.
    ///
    /// # Panics
    /// If `index` is not a valid slide index.
    pub fn go_to(&mut self, index: usize) -> u64 {
        self.select(index);
        self.suspend_autoplay()
    }

    /// Pause autoplay and return the generation the pending cooldown must carry
    pub fn suspend_autoplay(&mut self) -> u64 {
        self.is_auto_playing = false;
        self.cooldown_generation = self.cooldown_generation.wrapping_add(1);
        self.cooldown_generation
    }

    /// Cooldown expired. Returns false (and changes nothing) when a newer
    /// manual navigation superseded the cooldown that carried `generation`.
    pub fn resume_autoplay(&mut self, generation: u64) -> bool {
        if generation != self.cooldown_generation {
            return false;
        }
        self.is_auto_playing = true;
        true
    }

    /// Latch visibility. Returns true only on the first call.
    pub fn reveal(&mut self) -> bool {
        if self.is_visible {
            return false;
        }
        self.is_visible = true;
        true
    }

    /// Autoplay interval fired. Advances only while autoplay is armed.
    pub fn autoplay_tick(&mut self) -> bool {
        if !self.autoplay_armed() {
            return false;
        }
        self.next();
        true
    }
}

fn position_of(current: usize, index: usize) -> SlidePosition {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => SlidePosition::Passed,
        std::cmp::Ordering::Equal => SlidePosition::Current,
        std::cmp::Ordering::Greater => SlidePosition::Upcoming,
    }
}
