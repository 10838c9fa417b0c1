//! Wave shape generator.
//!
//! Produces the closed outline of one layer: a multi-harmonic upper crest
//! traversed left to right, a small shoulder on the right edge, and a damped
//! mirrored underside traversed right to left.
//!
//! The generator is pure. The same inputs always yield the same vertices and it
//! never fails; degenerate input yields an empty outline.

use tidewave_core::{Point, Polygon, Size, TAU};

/// Harmonic multipliers applied to θ for the secondary and tertiary terms.
pub const SECONDARY_RATIO: f64 = 1.8;
pub const TERTIARY_RATIO: f64 = 3.2;

/// Upper crest weights (primary, secondary, tertiary, detail) in units of A.
pub const UPPER_WEIGHTS: [f64; 4] = [1.0, 0.4, 0.2, 0.07];
/// Underside weights, damped for a flatter reflection.
pub const LOWER_WEIGHTS: [f64; 4] = [0.65, 0.25, 0.15, 0.10];

/// The detail term is `sin(x / divisor)` with `x` in pixels, so its wavelength
/// does not scale with the container.
pub const UPPER_DETAIL_DIVISOR: f64 = 2.5;
pub const LOWER_DETAIL_DIVISOR: f64 = 2.0;

/// Right-edge shoulder, in units of A below the midline.
pub const HINGE_DROP: f64 = 0.15;
/// Underside baseline, in units of A below the midline.
pub const UNDERSIDE_OFFSET: f64 = 0.2;
/// Vertical overshoot allowance, in units of A, split evenly above and below
/// the band. Crests can reach past it on bands shorter than about 2.14·A; see
/// [`overflow`].
pub const OVERSHOOT_FACTOR: f64 = 1.2;
/// Largest distance of any outline vertex from the midline, in units of A.
/// The upper crest bounds both sides; the underside stays within 1.35·A.
pub const REACH: f64 = UPPER_WEIGHTS[0] + UPPER_WEIGHTS[1] + UPPER_WEIGHTS[2] + UPPER_WEIGHTS[3];

/// How far an outline of amplitude `amplitude` can extend past either edge of
/// a band `height` pixels tall.
pub fn overflow(height: f64, amplitude: f64) -> f64 {
    (REACH * amplitude - height / 2.0).max(0.0)
}

/// Evaluates the wave model for one layer at fixed phase and amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveModel {
    pub mid_y: f64,
    pub phase: f64,
    pub amplitude: f64,
    /// `None` when the frequency is zero or invalid; the wave is then flat.
    pub wavelength: Option<f64>,
}

impl WaveModel {
    pub fn new(size: Size, phase: f64, amplitude: f64, frequency: f64) -> Self {
        let wavelength = size.width * frequency;
        Self {
            mid_y: size.height / 2.0,
            phase,
            amplitude,
            wavelength: (wavelength.is_finite() && wavelength > 0.0).then_some(wavelength),
        }
    }

    /// `θ = 2π·x/λ + φ`, or `None` for a flat wave.
    #[inline]
    pub fn theta(&self, x: f64) -> Option<f64> {
        self.wavelength.map(|lambda| TAU * x / lambda + self.phase)
    }

    /// Height of the upper crest above the midline.
    #[inline]
    pub fn crest_up(&self, x: f64) -> f64 {
        match self.theta(x) {
            Some(theta) => {
                self.harmonics(theta, &UPPER_WEIGHTS)
                    + UPPER_WEIGHTS[3] * self.amplitude * (x / UPPER_DETAIL_DIVISOR).sin()
            }
            None => 0.0,
        }
    }

    /// Depth of the underside below its baseline.
    #[inline]
    pub fn crest_down(&self, x: f64) -> f64 {
        match self.theta(x) {
            Some(theta) => {
                self.harmonics(theta, &LOWER_WEIGHTS)
                    + LOWER_WEIGHTS[3] * self.amplitude * (x / LOWER_DETAIL_DIVISOR).sin()
            }
            None => 0.0,
        }
    }

    #[inline]
    fn harmonics(&self, theta: f64, weights: &[f64; 4]) -> f64 {
        self.amplitude
            * (weights[0] * theta.sin()
                + weights[1] * (SECONDARY_RATIO * theta).sin()
                + weights[2] * (TERTIARY_RATIO * theta).sin())
    }

    #[inline]
    pub fn upper_vertex(&self, x: f64) -> Point {
        Point::new(x, self.mid_y - self.crest_up(x))
    }

    #[inline]
    pub fn lower_vertex(&self, x: f64) -> Point {
        Point::new(
            x,
            self.mid_y + self.crest_down(x) + UNDERSIDE_OFFSET * self.amplitude,
        )
    }

    #[inline]
    pub fn hinge_vertex(&self, width: f64) -> Point {
        Point::new(width, self.mid_y + HINGE_DROP * self.amplitude)
    }
}

/// The pieces of one layer's outline, in traversal order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveOutline {
    /// `(0, H/2)`; the path starts and ends here.
    pub start: Point,
    /// Upper crest, x ascending from 0.
    pub upper: Vec<Point>,
    /// Right-edge shoulder between the crests.
    pub hinge: Point,
    /// Underside, x descending from W.
    pub lower: Vec<Point>,
}

impl WaveOutline {
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Flatten into a closed polygon (first vertex repeated at the end).
    pub fn to_polygon(&self) -> Polygon {
        if self.is_empty() {
            return Polygon::empty();
        }
        let mut points = Vec::with_capacity(self.upper.len() + self.lower.len() + 3);
        points.push(self.start);
        points.extend_from_slice(&self.upper);
        points.push(self.hinge);
        points.extend_from_slice(&self.lower);
        points.push(self.start);
        Polygon::closed(points)
    }

    /// Shift every vertex by `offset`.
    pub fn translate(&mut self, offset: Point) {
        self.start += offset;
        self.hinge += offset;
        for p in self.upper.iter_mut().chain(self.lower.iter_mut()) {
            *p += offset;
        }
    }
}

/// Generate one layer's outline for a `size` rectangle at 1 px steps.
///
/// Upper vertices sit at `x = 0, 1, …, ⌊W⌋`; underside vertices at
/// `x = W, W-1, …` down to the last value not below zero.
pub fn generate(size: Size, phase: f64, amplitude: f64, frequency: f64) -> WaveOutline {
    let width = size.width;
    if !(width.is_finite() && width > 0.0) || !size.height.is_finite() {
        return WaveOutline::default();
    }
    let amplitude = if amplitude.is_finite() { amplitude } else { 0.0 };
    let model = WaveModel::new(size, phase, amplitude, frequency);
    let steps = width.floor() as usize;

    let upper = (0..=steps).map(|i| model.upper_vertex(i as f64)).collect();
    let lower = (0..=steps)
        .map(|j| model.lower_vertex(width - j as f64))
        .collect();

    WaveOutline {
        start: Point::new(0.0, model.mid_y),
        upper,
        hinge: model.hinge_vertex(width),
        lower,
    }
}

/// Convenience wrapper returning the closed polygon directly.
pub fn polygon(size: Size, phase: f64, amplitude: f64, frequency: f64) -> Polygon {
    generate(size, phase, amplitude, frequency).to_polygon()
}
