//! Stepped count-up animation for statistic figures

use std::time::{Duration, Instant};

/// Counts from zero to `target` in `steps` equal increments spread over `duration`
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    steps: u32,
    duration: Duration,
    started: Option<Instant>,
}

impl CountUp {
    /// `steps` of zero is treated as one (jump straight to the target)
    pub fn new(target: u64, steps: u32, duration: Duration) -> Self {
        Self {
            target,
            steps: steps.max(1),
            duration,
            started: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Begin counting. Later calls keep the first start time.
    pub fn start(&mut self, now: Instant) {
        self.started.get_or_insert(now);
    }

    /// Number of whole steps elapsed at `now`, capped at `steps`
    fn steps_elapsed(&self, now: Instant) -> u32 {
        let Some(started) = self.started else {
            return 0;
        };
        if self.duration.is_zero() {
            return self.steps;
        }
        let step = self.duration / self.steps;
        if step.is_zero() {
            return self.steps;
        }
        let elapsed = now.saturating_duration_since(started);
        let done = elapsed.as_nanos() / step.as_nanos();
        done.min(u128::from(self.steps)) as u32
    }

    /// Displayed value at `now`: `floor(k * target / steps)` after `k` steps
    pub fn value_at(&self, now: Instant) -> u64 {
        let k = self.steps_elapsed(now);
        if k >= self.steps {
            return self.target;
        }
        (u128::from(self.target) * u128::from(k) / u128::from(self.steps)) as u64
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.steps_elapsed(now) >= self.steps
    }
}

/// Group digits in threes: 5477022 -> "5,477,022"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(target: u64) -> CountUp {
        CountUp::new(target, 60, Duration::from_millis(2000))
    }

    #[test]
    fn test_idle_until_started() {
        let c = counter(100);
        let now = Instant::now();
        assert_eq!(c.value_at(now + Duration::from_secs(10)), 0);
        assert!(!c.is_finished(now));
    }

    #[test]
    fn test_steps_floor_values() {
        let mut c = counter(31_544);
        let start = Instant::now();
        c.start(start);

        let step = Duration::from_millis(2000) / 60;
        assert_eq!(c.value_at(start), 0);
        assert_eq!(c.value_at(start + step), 31_544 / 60);
        assert_eq!(c.value_at(start + step * 30), 15_772);
        assert_eq!(c.value_at(start + step * 59), 31_544 * 59 / 60);
    }

    #[test]
    fn test_finishes_at_exact_target() {
        let mut c = counter(16);
        let start = Instant::now();
        c.start(start);
        let end = start + Duration::from_millis(2000);
        assert_eq!(c.value_at(end), 16);
        assert!(c.is_finished(end));
        assert_eq!(c.value_at(end + Duration::from_secs(60)), 16);
    }

    #[test]
    fn test_values_are_monotonic() {
        let mut c = counter(6_397);
        let start = Instant::now();
        c.start(start);
        let mut prev = 0;
        for ms in (0..=2100).step_by(7) {
            let v = c.value_at(start + Duration::from_millis(ms));
            assert!(v >= prev);
            assert!(v <= 6_397);
            prev = v;
        }
        assert_eq!(prev, 6_397);
    }

    #[test]
    fn test_restart_keeps_first_start() {
        let mut c = counter(60);
        let start = Instant::now();
        c.start(start);
        c.start(start + Duration::from_secs(1));
        assert_eq!(c.value_at(start + Duration::from_millis(2000)), 60);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut c = CountUp::new(42, 60, Duration::ZERO);
        let now = Instant::now();
        c.start(now);
        assert_eq!(c.value_at(now), 42);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(16), "16");
        assert_eq!(format_thousands(6397), "6,397");
        assert_eq!(format_thousands(31544), "31,544");
        assert_eq!(format_thousands(5477022), "5,477,022");
        assert_eq!(format_thousands(100000), "100,000");
    }
}
