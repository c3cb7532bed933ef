//! Auto-advancing carousel
//!
//! - `state` - pure index/autoplay/visibility state machine
//! - `component` - timer-owning component built on the state machine

mod component;
mod state;

pub use component::AutoAdvanceCarousel;
pub use state::{CarouselSnapshot, CarouselState, SlidePosition};
