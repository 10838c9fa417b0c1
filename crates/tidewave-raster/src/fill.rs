//! Anti-aliased polygon and rounded-rectangle coverage.
//!
//! Polygons are filled with the even-odd rule using a few sub-scanlines per
//! pixel row and exact horizontal span coverage.

use tidewave_core::{Point, Polygon, Rect};

/// Sub-scanlines per pixel row.
pub const SUBSAMPLES: usize = 4;

/// Per-pixel coverage of `polygon` for row `y`, written into `coverage`
/// (one entry per pixel column). Returns the inclusive column range touched.
pub fn polygon_row(polygon: &Polygon, y: u32, coverage: &mut [f32]) -> Option<(usize, usize)> {
    coverage.fill(0.0);
    let points = polygon.points();
    if points.len() < 4 {
        return None;
    }
    let weight = 1.0 / SUBSAMPLES as f32;
    let mut crossings: Vec<f64> = Vec::with_capacity(8);
    let mut touched: Option<(usize, usize)> = None;

    for s in 0..SUBSAMPLES {
        let sy = y as f64 + (s as f64 + 0.5) / SUBSAMPLES as f64;
        crossings.clear();
        for edge in points.windows(2) {
            if let Some(x) = crossing(edge[0], edge[1], sy) {
                crossings.push(x);
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            if let Some((lo, hi)) = accumulate_span(coverage, span[0], span[1], weight) {
                touched = Some(match touched {
                    Some((a, b)) => (a.min(lo), b.max(hi)),
                    None => (lo, hi),
                });
            }
        }
    }
    touched
}

/// X where the edge `a → b` crosses the horizontal line at `y`, using a
/// half-open rule so shared vertices are counted once.
#[inline]
fn crossing(a: Point, b: Point, y: f64) -> Option<f64> {
    if (a.y <= y) == (b.y <= y) {
        return None;
    }
    let t = (y - a.y) / (b.y - a.y);
    Some(a.x + t * (b.x - a.x))
}

/// Add `weight` times the overlap of `[xa, xb)` with each pixel.
fn accumulate_span(coverage: &mut [f32], xa: f64, xb: f64, weight: f32) -> Option<(usize, usize)> {
    let width = coverage.len() as f64;
    let xa = xa.clamp(0.0, width);
    let xb = xb.clamp(0.0, width);
    if xb <= xa {
        return None;
    }
    let first = xa.floor() as usize;
    let last = ((xb.ceil() as usize).max(first + 1) - 1).min(coverage.len() - 1);
    for (px, cov) in coverage.iter_mut().enumerate().take(last + 1).skip(first) {
        let left = xa.max(px as f64);
        let right = xb.min(px as f64 + 1.0);
        if right > left {
            *cov += weight * (right - left) as f32;
        }
    }
    Some((first, last))
}

/// Coverage of a rounded rectangle at pixel centre `(px, py)`.
pub fn rounded_rect_coverage(rect: Rect, radius: f64, px: f64, py: f64) -> f32 {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let r = radius.clamp(0.0, half_w.min(half_h));
    let centre = rect.center();
    let qx = (px - centre.x).abs() - (half_w - r);
    let qy = (py - centre.y).abs() - (half_h - r);
    let outside = Point::new(qx.max(0.0), qy.max(0.0)).length();
    let distance = outside + qx.max(qy).min(0.0) - r;
    (0.5 - distance).clamp(0.0, 1.0) as f32
}
