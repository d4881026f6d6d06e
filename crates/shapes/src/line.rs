use crate::draw::{describe_shape, Coordinates, DrawOptions, Drawable, ShapeKind};
use crate::rectangular::Rectangle;
use crate::style::{Arrow, Thickness};
use easel_core::{Bounds, Color, Point};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use std::fmt;

/// A line segment from `start` to `end`.
///
/// The order of the endpoints only matters when the line is drawn with
/// an arrow-head.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub thickness: Thickness,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            thickness: Thickness::default(),
        }
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.thickness.color = Some(color.into());
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness.thickness = thickness;
        self
    }

    pub fn with_arrow(mut self, arrow: Option<Arrow>) -> Self {
        self.thickness.arrow = arrow;
        self
    }

    /// Moves both endpoints right by `dx` and down by `dy`.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.start.move_by(dx, dy);
        self.end.move_by(dx, dy);
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// The smallest axis-aligned rectangle containing both endpoints.
    pub fn bounding_box(&self) -> Rectangle {
        let bounds = Bounds::from_corners(self.start, self.end);
        Rectangle::new(bounds.upper_left(), bounds.lower_right())
    }
}

impl Drawable for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn coordinates(&self) -> Coordinates {
        smallvec![self.start.x, self.start.y, self.end.x, self.end.y]
    }

    fn options(&self) -> DrawOptions {
        self.thickness.draw_options()
    }

    fn describe(&self) -> serde_json::Value {
        describe_shape(self.kind(), self)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: start=({}, {}), end=({}, {}), color={:?}, thickness={}, arrow={:?}.",
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.thickness.color,
            self.thickness.thickness,
            self.thickness.arrow
        )
    }
}
