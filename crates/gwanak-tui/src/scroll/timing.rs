//! Time calculation utilities for animations

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now`
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll offsets)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(f64::from(from), f64::from(to), t).round() as u16
}

/// Prefix of `text` typed so far, one character per `per_char`
pub fn typewriter(text: &str, elapsed: Duration, per_char: Duration) -> &str {
    if per_char.is_zero() {
        return text;
    }
    let typed = (elapsed.as_nanos() / per_char.as_nanos()) as usize;
    match text.char_indices().nth(typed) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 0.25), 75);
        assert_eq!(lerp_u16(0, 100, 1.0), 100);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert_eq!(progress(start, start, d), 0.0);
        assert!((progress(start, start + Duration::from_millis(50), d) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, start + Duration::from_secs(1), d), 1.0);
        assert_eq!(progress(start, start, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_typewriter() {
        let per = Duration::from_millis(80);
        assert_eq!(typewriter("Are you", Duration::ZERO, per), "");
        assert_eq!(typewriter("Are you", Duration::from_millis(170), per), "Ar");
        assert_eq!(typewriter("Are you", Duration::from_secs(5), per), "Are you");
    }
}
