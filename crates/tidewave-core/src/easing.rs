//! Easing curves and time-based tweens.
//!
//! Supports polynomial easing and cubic Bézier curves with Newton-Raphson
//! evaluation for converting progress along the curve to the correct time
//! mapping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Easing curves ───────────────────────────────────────────────

/// Cubic Bézier control points for easing (x1, y1, x2, y2).
/// The curve goes from (0,0) to (1,1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluate the X coordinate of the Bézier curve at parameter t.
    fn sample_x(&self, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        3.0 * mt2 * t * self.x1 + 3.0 * mt * t2 * self.x2 + t3
    }

    /// Evaluate the Y coordinate of the Bézier curve at parameter t.
    fn sample_y(&self, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        3.0 * mt2 * t * self.y1 + 3.0 * mt * t2 * self.y2 + t3
    }

    /// Derivative of X with respect to t.
    fn sample_dx(&self, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * self.x1 + 6.0 * mt * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    /// Solve for the parameter t given an x value using Newton-Raphson.
    /// Returns the y value at that x.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson: find t such that sample_x(t) = x
        let mut t = x;

        for _ in 0..8 {
            let x_est = self.sample_x(t) - x;
            let dx = self.sample_dx(t);
            if dx.abs() < 1e-12 {
                break;
            }
            t -= x_est / dx;
            t = t.clamp(0.0, 1.0);
            if x_est.abs() < 1e-10 {
                break;
            }
        }

        self.sample_y(t)
    }

    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
}

/// How progress `u ∈ [0, 1]` maps to interpolation weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// `u²`
    QuadIn,
    Bezier(CubicBezier),
}

impl Easing {
    /// Map progress to weight. Input is clamped, so the ends are exact.
    pub fn apply(self, u: f64) -> f64 {
        if u.is_nan() || u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => u,
            Self::QuadIn => u * u,
            Self::Bezier(bezier) => bezier.evaluate(u),
        }
    }
}

// ── Tween ───────────────────────────────────────────────────────

/// A single eased transition from one value to another, anchored at an
/// absolute start time on the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// A tween that already sits at `value`.
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO, Duration::ZERO, Easing::Linear)
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Value at `now`. Before `start` this is `from`; at or after the end it
    /// is exactly `to`.
    pub fn value_at(&self, now: Duration) -> f64 {
        let u = self.progress(now);
        if u >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(u)
    }

    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }
}

// ── Tests ───────────────────────────────────────────────────────
