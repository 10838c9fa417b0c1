//! Layered waveform compositor.
//!
//! Turns a composition plus the driver's current phases and amplitudes into a
//! [`WaveFrame`]: a back-to-front list of filled polygons described as vector
//! data. Painting is delegated to a [`RenderTarget`].

use std::borrow::Cow;
use tidewave_core::{Diagnostics, LinearGradient, Point, Polygon, Rect, Size};

use crate::params::WaveformComposition;
use crate::shape::{self, WaveOutline, OVERSHOOT_FACTOR};

/// Global blur applied to the composited frame.
pub const DEFAULT_BLUR_RADIUS: f64 = 0.5;

/// Diagnostics key used when a target cannot blur.
pub const BLUR_FALLBACK_KEY: &str = "render.blur";

/// One painted layer, already positioned in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPaint {
    pub index: usize,
    pub phase: f64,
    pub amplitude: f64,
    pub outline: WaveOutline,
    pub polygon: Polygon,
    /// Left-to-right fill; `t = 0` maps to `gradient_rect.x`.
    pub gradient: LinearGradient,
    /// The layer's local rect; the gradient spans its width.
    pub gradient_rect: Rect,
    pub opacity: f32,
}

/// A rendered frame, ready for a render target.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveFrame {
    /// Internal surface, tall enough for every crest.
    pub surface: Size,
    /// Visible band inside the surface.
    pub band: Rect,
    /// Where the host should place the band relative to its container.
    pub offset: Point,
    pub layers: Vec<LayerPaint>,
    pub blur_radius: f64,
}

impl WaveFrame {
    /// A frame that paints nothing.
    pub fn empty(surface: Size, band: Rect, offset: Point) -> Self {
        Self {
            surface,
            band,
            offset,
            layers: Vec::new(),
            blur_radius: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.polygon.is_empty())
    }

    /// Where the surface's top-left corner lands in container coordinates.
    pub fn surface_origin(&self) -> Point {
        self.offset - Point::new(0.0, self.band.y)
    }
}

/// Builds [`WaveFrame`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compositor {
    blur_radius: f64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_RADIUS)
    }
}

impl Compositor {
    pub fn new(blur_radius: f64) -> Self {
        Self {
            blur_radius: if blur_radius.is_finite() {
                blur_radius.max(0.0)
            } else {
                0.0
            },
        }
    }

    pub fn blur_radius(&self) -> f64 {
        self.blur_radius
    }

    /// Render every layer for a band `width` pixels wide.
    ///
    /// `phases` and `amplitudes` are indexed like `composition.layers`; a
    /// missing entry falls back to zero phase and the base amplitude.
    pub fn render(
        &self,
        composition: &WaveformComposition,
        phases: &[f64],
        amplitudes: &[f64],
        width: f64,
    ) -> WaveFrame {
        let height = composition.height;
        let max_amplitude = composition
            .layers
            .iter()
            .enumerate()
            .map(|(i, l)| amplitudes.get(i).copied().unwrap_or(l.base_amplitude))
            .fold(0.0, f64::max);
        let margin = (max_amplitude * OVERSHOOT_FACTOR / 2.0)
            .max(shape::overflow(height, max_amplitude));
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };

        let surface = Size::new(width, height + 2.0 * margin);
        let band = Rect::new(0.0, margin, width, height);
        let offset = Point::new(0.0, composition.vertical_offset);

        let layer_size = Size::new(width, height);
        if layer_size.is_degenerate() {
            return WaveFrame::empty(surface, band, offset);
        }

        let layers = composition
            .layers
            .iter()
            .enumerate()
            .map(|(index, params)| {
                let phase = phases.get(index).copied().unwrap_or(0.0);
                let amplitude = amplitudes
                    .get(index)
                    .copied()
                    .unwrap_or(params.base_amplitude);
                let mut outline = shape::generate(layer_size, phase, amplitude, params.frequency);
                outline.translate(band.min());
                let polygon = outline.to_polygon();
                LayerPaint {
                    index,
                    phase,
                    amplitude,
                    outline,
                    polygon,
                    gradient: params.gradient_stops.clone(),
                    gradient_rect: band,
                    opacity: params.opacity,
                }
            })
            .collect();

        WaveFrame {
            surface,
            band,
            offset,
            layers,
            blur_radius: self.blur_radius,
        }
    }
}

/// Something that can paint a [`WaveFrame`].
pub trait RenderTarget {
    /// Whether `draw_waves` honours `blur_radius`.
    fn supports_blur(&self) -> bool;

    /// Paint the frame, layers in order.
    fn draw_waves(&mut self, frame: &WaveFrame);
}

/// Hand `frame` to `target`, dropping the blur when the target cannot apply
/// it. The fallback is reported once per `diagnostics` lifetime.
pub fn present(target: &mut dyn RenderTarget, frame: &WaveFrame, diagnostics: &mut Diagnostics) {
    let frame = if frame.blur_radius > 0.0 && !target.supports_blur() {
        diagnostics.report(
            BLUR_FALLBACK_KEY,
            format!(
                "render target has no gaussian blur; drawing without the {} px blur",
                frame.blur_radius
            ),
        );
        let mut unblurred = frame.clone();
        unblurred.blur_radius = 0.0;
        Cow::Owned(unblurred)
    } else {
        Cow::Borrowed(frame)
    };
    target.draw_waves(&frame);
}
