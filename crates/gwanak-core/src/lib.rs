pub mod carousel;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod gate;

pub use carousel::{AutoAdvanceCarousel, CarouselSnapshot, CarouselState, SlidePosition};
pub use config::{AppConfig, CarouselConfig, EasingType, ScrollConfig, StatsConfig};
pub use error::{Error, Result};
pub use gate::VisibilityGate;
