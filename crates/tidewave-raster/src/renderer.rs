//! Software render target.

use tidewave_bars::BarFrame;
use tidewave_core::{Color, FrameBuffer};
use tidewave_wave::{LayerPaint, RenderTarget, WaveFrame};
use tracing::trace;

use crate::blur::gaussian_blur;
use crate::fill::{polygon_row, rounded_rect_coverage};

/// Rasterises frames into an RGBA [`FrameBuffer`].
///
/// Each draw call resizes the buffer to the frame's surface and clears it.
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    buffer: FrameBuffer,
    blur: bool,
}

impl Default for SoftwareRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareRenderer {
    pub fn new() -> Self {
        Self {
            buffer: FrameBuffer::new(0, 0),
            blur: true,
        }
    }

    /// A renderer that reports no blur capability.
    pub fn without_blur() -> Self {
        Self {
            blur: false,
            ..Self::new()
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    fn prepare(&mut self, width: f64, height: f64) {
        let w = pixels(width);
        let h = pixels(height);
        if self.buffer.width == w && self.buffer.height == h {
            self.buffer.clear();
        } else {
            self.buffer = FrameBuffer::new(w, h);
        }
    }

    fn fill_layer(&mut self, layer: &LayerPaint) {
        if layer.polygon.is_empty() || layer.opacity <= 0.0 {
            return;
        }
        let Some(bounds) = layer.polygon.bounds() else {
            return;
        };
        let width = self.buffer.width;
        let y0 = bounds.y.floor().max(0.0) as u32;
        let y1 = ((bounds.y + bounds.height).ceil().max(0.0) as u32).min(self.buffer.height);
        let span = layer.gradient_rect.width.max(f64::EPSILON);
        let mut coverage = vec![0.0f32; width as usize];

        for y in y0..y1 {
            let Some((first, last)) = polygon_row(&layer.polygon, y, &mut coverage) else {
                continue;
            };
            for x in first..=last {
                let c = coverage[x];
                if c <= 0.0 {
                    continue;
                }
                let t = ((x as f64 + 0.5 - layer.gradient_rect.x) / span) as f32;
                let color = layer.gradient.sample(t).with_opacity(layer.opacity);
                self.buffer.blend_over(x as u32, y, color, c.min(1.0));
            }
        }
    }
}

impl RenderTarget for SoftwareRenderer {
    fn supports_blur(&self) -> bool {
        self.blur
    }

    fn draw_waves(&mut self, frame: &WaveFrame) {
        self.prepare(frame.surface.width, frame.surface.height);
        for layer in &frame.layers {
            self.fill_layer(layer);
        }
        if self.blur && frame.blur_radius > 0.0 {
            gaussian_blur(&mut self.buffer, frame.blur_radius);
        }
        trace!(
            layers = frame.layers.len(),
            width = self.buffer.width,
            height = self.buffer.height,
            "waves rasterised"
        );
    }
}

impl SoftwareRenderer {
    /// Paint a bar frame at container size.
    pub fn draw_bars(&mut self, frame: &BarFrame) {
        self.prepare(frame.container.width, frame.container.height);
        for bar in &frame.bars {
            let rect = bar.rect;
            let x0 = rect.x.floor().max(0.0) as u32;
            let y0 = rect.y.floor().max(0.0) as u32;
            let x1 = ((rect.x + rect.width).ceil().max(0.0) as u32).min(self.buffer.width);
            let y1 = ((rect.y + rect.height).ceil().max(0.0) as u32).min(self.buffer.height);
            let span = rect.height.max(f64::EPSILON);
            for y in y0..y1 {
                let py = y as f64 + 0.5;
                let t = ((py - rect.y) / span) as f32;
                let color: Color = bar.gradient.sample(t);
                for x in x0..x1 {
                    let cov = rounded_rect_coverage(rect, bar.corner_radius, x as f64 + 0.5, py);
                    if cov > 0.0 {
                        self.buffer.blend_over(x, y, color, cov);
                    }
                }
            }
        }
    }
}

fn pixels(extent: f64) -> u32 {
    if extent.is_finite() && extent > 0.0 {
        extent.ceil().min(u32::MAX as f64) as u32
    } else {
        0
    }
}
