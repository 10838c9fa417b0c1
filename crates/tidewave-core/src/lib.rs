//! Tidewave Core - Foundation types for animated waveform rendering
//!
//! This crate provides the fundamental types used throughout tidewave:
//! - Colors and left-to-right gradients
//! - Geometric primitives (sizes, rectangles, closed polygons)
//! - Easing curves and time-based tweens
//! - Frame clocks (monotonic and manual)
//! - RGBA frame buffers for software rendering
//! - Once-per-key diagnostics for clamped configuration

pub mod color;
pub mod diagnostics;
pub mod easing;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod time;

pub use color::{palette, Color, GradientStop, LinearGradient};
pub use diagnostics::{DiagnosticEvent, Diagnostics};
pub use easing::{CubicBezier, Easing, Tween};
pub use error::{Result, TidewaveError};
pub use frame::FrameBuffer;
pub use geometry::{Point, Polygon, Rect, Size};
pub use time::{FrameClock, FrameRate, ManualClock, MonotonicClock};

/// Full turn in radians; one complete phase sweep.
pub const TAU: f64 = std::f64::consts::TAU;

/// Reduce an angle to `[0, 2π)`.
///
/// Non-finite input maps to zero so a corrupted phase never poisons geometry.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    if !phase.is_finite() {
        return 0.0;
    }
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
