//! One-shot viewport visibility latch
//!
//! A gate watches how much of an element is on-screen and opens the first time
//! the visible share reaches its threshold. Once open it stops observing.

use tracing::debug;

/// A vertical range in page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalSpan {
    pub top: u32,
    pub height: u32,
}

impl VerticalSpan {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Fraction of `element` that lies inside `viewport`, in [0.0, 1.0]
pub fn intersection_ratio(element: VerticalSpan, viewport: VerticalSpan) -> f64 {
    if element.height == 0 {
        return 0.0;
    }
    let top = element.top.max(viewport.top);
    let bottom = element.bottom().min(viewport.bottom());
    if bottom <= top {
        return 0.0;
    }
    f64::from(bottom - top) / f64::from(element.height)
}

#[derive(Debug, Clone)]
enum Watch {
    Observing { threshold: f64 },
    Open,
}

#[derive(Debug, Clone)]
pub struct VisibilityGate {
    watch: Watch,
}

impl VisibilityGate {
    /// `threshold` is the visible share needed to open, clamped to (0, 1]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::MIN_POSITIVE, 1.0)
        } else {
            1.0
        };
        Self {
            watch: Watch::Observing { threshold },
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.watch, Watch::Open)
    }

    /// Feed the current visible ratio. Returns true on the call that opens the gate.
    pub fn observe(&mut self, ratio: f64) -> bool {
        let Watch::Observing { threshold } = self.watch else {
            return false;
        };
        if ratio > 0.0 && ratio >= threshold {
            debug!("Visibility gate opened at ratio {:.2}", ratio);
            self.watch = Watch::Open;
            true
        } else {
            false
        }
    }

    /// Convenience: compute the ratio from geometry and observe it
    pub fn observe_span(&mut self, element: VerticalSpan, viewport: VerticalSpan) -> bool {
        if self.is_open() {
            return false;
        }
        self.observe(intersection_ratio(element, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_fully_inside() {
        let ratio = intersection_ratio(VerticalSpan::new(10, 5), VerticalSpan::new(0, 40));
        assert!((ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_partially_visible() {
        // Rows 30..40 of an element spanning 30..50, viewport 0..40
        let ratio = intersection_ratio(VerticalSpan::new(30, 20), VerticalSpan::new(0, 40));
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_below_viewport() {
        let ratio = intersection_ratio(VerticalSpan::new(50, 10), VerticalSpan::new(0, 40));
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_ratio_zero_height() {
        let ratio = intersection_ratio(VerticalSpan::new(5, 0), VerticalSpan::new(0, 40));
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_gate_opens_at_threshold() {
        let mut gate = VisibilityGate::new(0.2);
        assert!(!gate.observe(0.1));
        assert!(!gate.is_open());
        assert!(gate.observe(0.2));
        assert!(gate.is_open());
    }

    #[test]
    fn test_gate_fires_once() {
        let mut gate = VisibilityGate::new(0.2);
        assert!(gate.observe(0.9));
        assert!(!gate.observe(1.0));
        // Scrolling away never closes it
        assert!(!gate.observe(0.0));
        assert!(gate.is_open());
    }

    #[test]
    fn test_gate_from_geometry() {
        let mut gate = VisibilityGate::new(0.2);
        let element = VerticalSpan::new(100, 20);

        assert!(!gate.observe_span(element, VerticalSpan::new(0, 40)));
        // 3 of 20 rows visible
        assert!(!gate.observe_span(element, VerticalSpan::new(63, 40)));
        // 4 of 20 rows visible
        assert!(gate.observe_span(element, VerticalSpan::new(64, 40)));
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut gate = VisibilityGate::new(5.0);
        assert!(!gate.observe(0.99));
        assert!(gate.observe(1.0));

        let mut gate = VisibilityGate::new(0.0);
        assert!(!gate.observe(0.0));
        assert!(gate.observe(0.01));
    }
}
