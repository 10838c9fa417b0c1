//! Frame buffers for rasterised output in CPU memory.
//!
//! Pixels are stored as premultiplied linear RGBA `f32` so that compositing
//! and blurring stay exact; conversion to 8-bit happens only on export.

use crate::color::Color;

/// A rasterised frame, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a transparent frame buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(Color::TRANSPARENT);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Premultiplied pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Composite a straight-alpha `color` over the pixel with extra `coverage`.
    #[inline]
    pub fn blend_over(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let src = color.with_opacity(coverage).premultiply();
        let dst = &mut self.pixels[i];
        let inv = 1.0 - src.a;
        dst.r = src.r + dst.r * inv;
        dst.g = src.g + dst.g * inv;
        dst.b = src.b + dst.b * inv;
        dst.a = src.a + dst.a * inv;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Raw premultiplied channels, 4 floats per pixel.
    pub fn as_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Un-premultiply and quantise to 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            let straight = if p.a > 0.0 {
                Color::new(p.r / p.a, p.g / p.a, p.b / p.a, p.a)
            } else {
                Color::TRANSPARENT
            };
            out.extend_from_slice(&straight.to_rgba8());
        }
        out
    }

    /// Sum of alpha over all pixels; handy for coverage checks.
    pub fn total_alpha(&self) -> f64 {
        self.pixels.iter().map(|p| p.a as f64).sum()
    }
}
