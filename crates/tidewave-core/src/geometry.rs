//! Geometric primitives in pixel space.
//!
//! Coordinates are `f64` with y growing downwards, matching the host canvas.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D point / vector in pixels.
pub type Point = DVec2;

/// Width and height of a container or render region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not finite.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corners.
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Minimum corner (top-left).
    #[inline]
    pub fn min(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center point.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// A closed polyline. When non-empty, the first and last vertices coincide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a closed polygon from an open vertex list.
    ///
    /// The first vertex is appended again unless the list already ends on it.
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let Some(&first) = points.first() {
            if points.last() != Some(&first) || points.len() == 1 {
                points.push(first);
            }
        }
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Empty polygons count as closed.
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// Axis-aligned bounding box, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Rect::from_corners(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners_and_centre() {
        let rect = Rect::from_corners(Point::new(2.0, 4.0), Point::new(12.0, 8.0));
        assert_eq!(rect, Rect::new(2.0, 4.0, 10.0, 4.0));
        assert_eq!(rect.min(), Point::new(2.0, 4.0));
        assert_eq!(rect.center(), Point::new(7.0, 6.0));
    }

    #[test]
    fn test_size_degenerate() {
        assert!(Size::new(0.0, 10.0).is_degenerate());
        assert!(Size::new(10.0, -1.0).is_degenerate());
        assert!(Size::new(f64::NAN, 1.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_polygon_closed_appends_start() {
        let poly = Polygon::closed(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        assert_eq!(poly.len(), 4);
        assert!(poly.is_closed());
        assert_eq!(poly.points()[3], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_polygon_closed_keeps_existing_closure() {
        let poly = Polygon::closed(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn test_polygon_bounds() {
        let poly = Polygon::closed(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ]);
        assert_eq!(poly.bounds(), Some(Rect::new(0.0, 0.0, 4.0, 2.0)));
        assert!(Polygon::empty().bounds().is_none());
        assert!(Polygon::empty().is_closed());
    }
}
