//! Separable gaussian blur over premultiplied pixels.

use rayon::prelude::*;
use tidewave_core::{Color, FrameBuffer};

/// Normalised 1D gaussian kernel for standard deviation `sigma`.
///
/// The kernel spans `±ceil(3σ)` taps, at least one on each side.
pub fn gaussian_kernel(sigma: f64) -> Vec<f32> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return vec![1.0];
    }
    let half = (3.0 * sigma).ceil().max(1.0) as i64;
    let denom = 2.0 * sigma * sigma;
    let raw: Vec<f64> = (-half..=half)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| (w / sum) as f32).collect()
}

#[inline]
fn accumulate(acc: &mut Color, p: Color, w: f32) {
    acc.r += p.r * w;
    acc.g += p.g * w;
    acc.b += p.b * w;
    acc.a += p.a * w;
}

/// Blur `buffer` in place with a gaussian of the given radius (σ in pixels).
/// Edges clamp.
pub fn gaussian_blur(buffer: &mut FrameBuffer, radius: f64) {
    let kernel = gaussian_kernel(radius);
    if kernel.len() == 1 || buffer.is_empty() {
        return;
    }
    let half = (kernel.len() / 2) as i64;
    let width = buffer.width as usize;
    let height = buffer.height as usize;

    // Horizontal pass, row by row.
    let source = buffer.pixels().to_vec();
    buffer
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let src = &source[y * width..(y + 1) * width];
            for (x, out) in row.iter_mut().enumerate() {
                let mut acc = Color::TRANSPARENT;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as i64 + k as i64 - half).clamp(0, width as i64 - 1) as usize;
                    accumulate(&mut acc, src[sx], w);
                }
                *out = acc;
            }
        });

    // Vertical pass.
    let source = buffer.pixels().to_vec();
    buffer
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let mut acc = Color::TRANSPARENT;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as i64 + k as i64 - half).clamp(0, height as i64 - 1) as usize;
                    accumulate(&mut acc, source[sy * width + x], w);
                }
                *out = acc;
            }
        });
}
