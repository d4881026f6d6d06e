//! Shapes positioned by a center point.

use crate::draw::{describe_shape, Coordinates, DrawOptions, Drawable, ShapeKind};
use crate::rectangular::Rectangle;
use crate::style::{Outline, Outlined, TextStyle};
use easel_core::{Bounds, Point};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use std::fmt;

/// A shape for which moving the center moves the whole shape.
pub trait Centered {
    fn center(&self) -> Point;
    fn center_mut(&mut self) -> &mut Point;

    /// Moves the shape right by `dx` and down by `dy`.
    fn move_by(&mut self, dx: f32, dy: f32) {
        self.center_mut().move_by(dx, dy);
    }

    /// Moves the shape's center to `(x, y)`, translating the whole shape.
    fn move_center_to(&mut self, x: f32, y: f32) {
        self.center_mut().move_to(x, y);
    }
}

macro_rules! impl_centered {
    ($($shape:ty => $field:ident),* $(,)?) => {
        $(
            impl Centered for $shape {
                fn center(&self) -> Point {
                    self.$field
                }

                fn center_mut(&mut self) -> &mut Point {
                    &mut self.$field
                }
            }
        )*
    };
}

macro_rules! impl_outlined {
    ($($shape:ty),* $(,)?) => {
        $(
            impl Outlined for $shape {
                fn outline(&self) -> &Outline {
                    &self.outline
                }

                fn outline_mut(&mut self) -> &mut Outline {
                    &mut self.outline
                }
            }
        )*
    };
}

impl_centered!(Circle => center, Square => center, Text => center, Dot => position);
impl_outlined!(Circle, Square, Dot);

/// A circle given by its center and radius.
///
/// ```
/// use shapes::prelude::*;
///
/// let mut circle = Circle::new(Point::new(100.0, 75.0), 30.0).with_fill_color("green");
/// circle.move_by(-50.0, 60.0);
/// assert_eq!(circle.center, Point::new(50.0, 135.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub outline: Outline,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius,
            outline: Outline::default(),
        }
    }

    pub fn bounding_box(&self) -> Rectangle {
        let bounds = Bounds::from_center_half_size(self.center, Vec2::splat(self.radius));
        Rectangle::new(bounds.upper_left(), bounds.lower_right())
    }
}

impl Drawable for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn coordinates(&self) -> Coordinates {
        self.bounding_box().coordinates()
    }

    fn options(&self) -> DrawOptions {
        self.outline.draw_options()
    }

    fn describe(&self) -> serde_json::Value {
        describe_shape(self.kind(), self)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle: center=({}, {}), radius={}, fill_color={:?}, outline_color={:?}, outline_thickness={}.",
            self.center.x,
            self.center.y,
            self.radius,
            self.outline.fill_color,
            self.outline.outline_color,
            self.outline.outline_thickness
        )
    }
}

/// An axis-aligned square given by its center and side length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub center: Point,
    pub length_of_each_side: f32,
    pub outline: Outline,
}

impl Square {
    pub fn new(center: Point, length_of_each_side: f32) -> Self {
        Self {
            center,
            length_of_each_side,
            outline: Outline::default(),
        }
    }

    pub fn bounding_box(&self) -> Rectangle {
        let half = Vec2::splat(self.length_of_each_side / 2.0);
        let bounds = Bounds::from_center_half_size(self.center, half);
        Rectangle::new(bounds.upper_left(), bounds.lower_right())
    }
}

impl Drawable for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn coordinates(&self) -> Coordinates {
        self.bounding_box().coordinates()
    }

    fn options(&self) -> DrawOptions {
        self.outline.draw_options()
    }

    fn describe(&self) -> serde_json::Value {
        describe_shape(self.kind(), self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Square: center=({}, {}), side-lengths={}, fill_color={:?}, outline_color={:?}, outline_thickness={}.",
            self.center.x,
            self.center.y,
            self.length_of_each_side,
            self.outline.fill_color,
            self.outline.outline_color,
            self.outline.outline_thickness
        )
    }
}

/// A string displayed horizontally, centered on a point.
///
/// Text has no bounding box: its extent depends on the toolkit's font
/// metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub center: Point,
    pub style: TextStyle,
}

impl Text {
    pub fn new(center: Point, text: impl Into<String>) -> Self {
        Self {
            center,
            style: TextStyle {
                text: text.into(),
                ..Default::default()
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.style.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.style.text = text.into();
    }
}

impl Drawable for Text {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn coordinates(&self) -> Coordinates {
        smallvec![self.center.x, self.center.y]
    }

    fn options(&self) -> DrawOptions {
        self.style.draw_options()
    }

    fn describe(&self) -> serde_json::Value {
        describe_shape(self.kind(), self)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text displaying '{}' at position {}", self.style.text, self.center)
    }
}

/// A point drawn as a small filled dot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub position: Point,
    pub width_for_drawing: f32,
    pub height_for_drawing: f32,
    pub outline: Outline,
}

impl Dot {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            width_for_drawing: 5.0,
            height_for_drawing: 5.0,
            outline: Outline {
                fill_color: Some("black".into()),
                ..Default::default()
            },
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position.move_to(x, y);
    }

    pub fn bounding_box(&self) -> Rectangle {
        let half = Vec2::new(self.width_for_drawing, self.height_for_drawing) / 2.0;
        let bounds = Bounds::from_center_half_size(self.position, half);
        Rectangle::new(bounds.upper_left(), bounds.lower_right())
    }
}

impl From<Point> for Dot {
    fn from(position: Point) -> Self {
        Self::new(position)
    }
}

impl Drawable for Dot {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Dot
    }

    fn coordinates(&self) -> Coordinates {
        self.bounding_box().coordinates()
    }

    fn options(&self) -> DrawOptions {
        self.outline.draw_options()
    }

    fn describe(&self) -> serde_json::Value {
        describe_shape(self.kind(), self)
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dot at {}", self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rectangular;

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new(Point::new(100.0, 75.0), 30.0);
        let bbox = circle.bounding_box();
        assert_eq!(bbox.upper_left_corner(), Point::new(70.0, 45.0));
        assert_eq!(bbox.lower_right_corner(), Point::new(130.0, 105.0));
        assert_eq!(circle.coordinates().as_slice(), &[70.0, 45.0, 130.0, 105.0]);
    }

    #[test]
    fn test_caller_point_is_copied() {
        let mut center = Point::new(10.0, 10.0);
        let circle = Circle::new(center, 5.0);
        center.move_by(100.0, 100.0);
        assert_eq!(circle.center, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_move_center_to() {
        let mut square = Square::new(Point::new(0.0, 0.0), 10.0);
        square.move_center_to(50.0, 60.0);
        assert_eq!(square.center(), Point::new(50.0, 60.0));
        square.move_by(-5.0, 5.0);
        assert_eq!(square.center(), Point::new(45.0, 65.0));
    }

    #[test]
    fn test_square_bounding_box() {
        let square = Square::new(Point::new(50.0, 50.0), 20.0);
        assert_eq!(square.coordinates().as_slice(), &[40.0, 40.0, 60.0, 60.0]);
    }

    #[test]
    fn test_clone_is_equal_and_independent() {
        let circle = Circle::new(Point::new(1.0, 2.0), 3.0).with_fill_color("red");
        let mut copy = circle.clone();
        assert_eq!(copy, circle);
        copy.move_by(1.0, 1.0);
        assert_ne!(copy, circle);
        assert_eq!(circle.center, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_equality_covers_style() {
        let a = Circle::new(Point::new(1.0, 2.0), 3.0);
        let b = a.clone().with_outline("blue", 5.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_text_draws_at_center() {
        let text = Text::new(Point::new(200.0, 280.0), "Click me");
        assert_eq!(text.coordinates().as_slice(), &[200.0, 280.0]);
        assert_eq!(text.options().text.as_deref(), Some("Click me"));
        assert_eq!(text.to_string(), "Text displaying 'Click me' at position Point(200.0, 280.0)");
    }

    #[test]
    fn test_dot_is_filled_black() {
        let dot = Dot::new(Point::new(10.0, 20.0));
        let options = dot.options();
        assert_eq!(options.fill.as_deref(), Some("black"));
        assert_eq!(dot.coordinates().as_slice(), &[7.5, 17.5, 12.5, 22.5]);
    }

    #[test]
    fn test_circle_display() {
        let circle = Circle::new(Point::new(100.0, 75.0), 30.0);
        assert!(circle
            .to_string()
            .starts_with("Circle: center=(100, 75), radius=30, fill_color=None"));
    }

    #[test]
    fn test_describe_tags_kind() {
        let circle = Circle::new(Point::new(1.0, 2.0), 3.0);
        let value = circle.describe();
        assert_eq!(value["kind"], "Circle");
        assert_eq!(value["attributes"]["radius"], 3.0);
    }
}
