//! Color types and left-to-right gradients.
//!
//! All interpolation is linear per RGB channel on the stored values; no gamma
//! conversion is applied, which matches how the reference palettes were tuned.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// RGBA color with 32-bit float components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB with alpha = 1.0.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA values.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Convert to 8-bit RGBA.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Same color with its alpha multiplied by `opacity`.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Premultiply alpha.
    #[inline]
    pub fn premultiply(self) -> Self {
        Self {
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
            a: self.a,
        }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Piecewise interpolation across three anchors.
    ///
    /// `factor < 0.5` blends the first pair with `factor * 2`, otherwise the
    /// second pair with `(factor - 0.5) * 2`. The result is always opaque.
    pub fn across_anchors(anchors: &[Self; 3], factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let mixed = if factor < 0.5 {
            anchors[0].lerp(anchors[1], factor * 2.0)
        } else {
            anchors[1].lerp(anchors[2], (factor - 0.5) * 2.0)
        };
        Self { a: 1.0, ..mixed }
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// One color stop of a gradient; `position` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    pub position: f32,
}

impl GradientStop {
    pub const fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }
}

/// Ordered color stops, sampled along a single axis.
///
/// The axis is whatever the painter maps `t = 0..1` onto: the local x-axis of a
/// wave layer, or the vertical axis of a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GradientStop>", into = "Vec<GradientStop>")]
pub struct LinearGradient {
    stops: SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    /// Build a gradient from stops; positions are clamped and sorted.
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: SmallVec<[GradientStop; 4]> = stops
            .into_iter()
            .map(|s| GradientStop {
                color: s.color,
                position: if s.position.is_finite() {
                    s.position.clamp(0.0, 1.0)
                } else {
                    0.0
                },
            })
            .collect();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    /// Spread colors evenly from position 0 to 1.
    pub fn evenly_spaced(colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self::new(
            colors
                .iter()
                .enumerate()
                .map(|(i, &color)| GradientStop::new(color, i as f32 / last)),
        )
    }

    /// A gradient with one color everywhere.
    pub fn solid(color: Color) -> Self {
        Self::evenly_spaced(&[color, color])
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at `t`; values outside `[0, 1]` clamp to the ends.
    pub fn sample(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::TRANSPARENT,
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        let idx = self
            .stops
            .partition_point(|s| s.position <= t)
            .saturating_sub(1);
        let a = &self.stops[idx];
        let b = &self.stops[(idx + 1).min(self.stops.len() - 1)];
        let span = b.position - a.position;
        if span <= 0.0 {
            return b.color;
        }
        a.color.lerp(b.color, (t - a.position) / span)
    }
}

impl From<Vec<GradientStop>> for LinearGradient {
    fn from(stops: Vec<GradientStop>) -> Self {
        Self::new(stops)
    }
}

impl From<LinearGradient> for Vec<GradientStop> {
    fn from(gradient: LinearGradient) -> Self {
        gradient.stops.into_vec()
    }
}

/// Named colors used by the reference compositions and the bar array.
pub mod palette {
    use super::Color;

    // ── Reflection view (4 layers, 3 stops each) ───────────────────
    pub const STEEL_BLUE: Color = Color::rgb(0.275, 0.510, 0.706);
    pub const VIOLET: Color = Color::rgb(0.557, 0.267, 0.678);
    pub const ROSE: Color = Color::rgb(0.910, 0.451, 0.620);

    pub const SKY_BLUE: Color = Color::rgb(0.529, 0.808, 0.922);
    pub const PURPLE: Color = Color::rgb(0.502, 0.278, 0.753);
    pub const DUSTY_ROSE: Color = Color::rgb(0.800, 0.522, 0.580);

    pub const AZURE: Color = Color::rgb(0.122, 0.588, 1.000);
    pub const INDIGO: Color = Color::rgb(0.294, 0.000, 0.510);
    pub const LAVENDER: Color = Color::rgb(0.710, 0.651, 0.933);

    pub const CYAN: Color = Color::rgb(0.259, 0.757, 0.969);
    pub const PALE_CYAN: Color = Color::rgb(0.690, 0.929, 0.961);
    pub const ORCHID: Color = Color::rgb(0.855, 0.439, 0.839);

    // ── Audio view (3 layers, 2 stops each) ────────────────────────
    pub const AUDIO_1: [Color; 2] = [
        Color::rgb(0.176_470_6, 0.498_039_2, 0.756_862_76),
        Color::rgb(0.556_862_8, 0.266_666_7, 0.678_431_4),
    ];
    pub const AUDIO_2: [Color; 2] = [
        Color::rgb(0.219_607_84, 0.588_235_3, 0.854_901_97),
        Color::rgb(0.556_862_8, 0.321_568_64, 0.756_862_76),
    ];
    pub const AUDIO_3: [Color; 2] = [
        Color::rgb(0.121_568_63, 0.588_235_3, 1.0),
        Color::rgb(0.556_862_8, 0.466_666_67, 0.898_039_2),
    ];

    // ── Bar array anchors (left → right) ───────────────────────────
    pub const BAR_ANCHORS: [Color; 3] = [
        Color::rgb(0.219_607_84, 0.007_843_138, 0.854_901_97),
        Color::rgb(0.258_823_54, 0.756_862_76, 0.968_627_45),
        Color::rgb(0.556_862_8, 0.321_568_64, 0.968_627_45),
    ];
}
