//! Axis-aligned bounding box implementation using glam
//!
//! Shapes never rotate, so every bounding box is axis-aligned. Bounds
//! always hold a normalized `min`/`max` pair regardless of the order in
//! which the corners were given.

use crate::Point;
use glam::Vec2;

/// An axis-aligned bounding box represented by minimum and maximum points
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum point (upper-left on a canvas)
    pub min: Vec2,
    /// The maximum point (lower-right on a canvas)
    pub max: Vec2,
}

impl Bounds {
    /// Creates bounds from two corner points, automatically ordering them
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (a, b) = (a.to_vec2(), b.to_vec2());
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates bounds from center point and half-extents (half width/height)
    pub fn from_center_half_size(center: Point, half_size: Vec2) -> Self {
        let center = center.to_vec2();
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    pub fn upper_left(&self) -> Point {
        Point::new(self.min.x, self.min.y)
    }

    pub fn upper_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    pub fn lower_left(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }

    pub fn lower_right(&self) -> Point {
        Point::new(self.max.x, self.max.y)
    }

    /// Returns the center point of the bounds
    pub fn center(&self) -> Point {
        ((self.min + self.max) * 0.5).into()
    }

    /// Returns the width of the bounds
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the height of the bounds
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Tests if a point lies inside (or on the edge of) these bounds
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Coordinates in the order the toolkit expects: x0, y0, x1, y1
    pub fn to_coordinates(&self) -> [f32; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_orders_points() {
        let a = Bounds::from_corners(Point::new(300.0, 50.0), Point::new(100.0, 200.0));
        let b = Bounds::from_corners(Point::new(100.0, 200.0), Point::new(300.0, 50.0));
        assert_eq!(a, b);
        assert_eq!(a.upper_left(), Point::new(100.0, 50.0));
        assert_eq!(a.lower_right(), Point::new(300.0, 200.0));
        assert_eq!(a.upper_right(), Point::new(300.0, 50.0));
        assert_eq!(a.lower_left(), Point::new(100.0, 200.0));
    }

    #[test]
    fn test_center_and_size() {
        let bounds = Bounds::from_center_half_size(Point::new(100.0, 75.0), Vec2::splat(30.0));
        assert_eq!(bounds.to_coordinates(), [70.0, 45.0, 130.0, 105.0]);
        assert_eq!(bounds.center(), Point::new(100.0, 75.0));
        assert_eq!(bounds.width(), 60.0);
        assert_eq!(bounds.height(), 60.0);
    }

    #[test]
    fn test_contains_point() {
        let bounds = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        assert!(bounds.contains_point(Point::new(50.0, 50.0)));
        assert!(bounds.contains_point(Point::new(100.0, 100.0)));
        assert!(!bounds.contains_point(Point::new(-1.0, 50.0)));
    }
}
