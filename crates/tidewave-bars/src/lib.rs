//! Tidewave Bars - Animated bar-array level indicator
//!
//! A row of rounded bars, each running its own randomised rise-and-fall cycle.
//! Bars near the middle of the row may grow tallest, giving the row a rounded
//! envelope.

pub mod array;
pub mod bar;
pub mod config;

pub use array::{bar_color, BarArray, BarFrame, BarPaint};
pub use bar::{centre_factor, ceiling, Bar, BarState};
pub use config::BarConfig;
