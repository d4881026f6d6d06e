//! A mutable 2D point.
//!
//! Points are plain `Copy` values: a shape that is handed a point keeps
//! its own copy, so moving the caller's point afterwards never moves the
//! shape.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position on a canvas, in pixels.
///
/// `x` grows to the right and `y` grows downward, as on the toolkit's
/// drawing surfaces. Turtle windows use their own centered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Moves this point right by `dx` and down by `dy`.
    /// Negative values move it left/up instead.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Moves this point to `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Returns a copy of this point moved by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    fn add(self, delta: Vec2) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

impl Sub for Point {
    type Output = Vec2;

    fn sub(self, other: Point) -> Vec2 {
        self.to_vec2() - other.to_vec2()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.1}, {:.1})", self.x, self.y)
    }
}
