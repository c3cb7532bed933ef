//! Smooth page scrolling and reveal timing
//!
//! - `easing` - easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation helpers
//! - `animation` - the page scroll animator built on both

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::PageScroller;
pub use easing::EasingTypeExt;
pub use gwanak_core::{EasingType, ScrollConfig};
