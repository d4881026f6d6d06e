//! Shapes determined by a pair of opposite corners.
//!
//! The corners may be given in either diagonal order. Queries normalize
//! them; the stored `corner_1`/`corner_2` are never reordered.

use crate::draw::{describe_shape, Coordinates, DrawOptions, Drawable, ShapeKind};
use crate::style::{Outline, Outlined};
use easel_core::{Bounds, Point};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Corner queries shared by rectangles and ellipses.
///
/// Every query returns a fresh value; nothing aliases the stored corners.
pub trait Rectangular {
    fn corners(&self) -> (Point, Point);
    fn corners_mut(&mut self) -> (&mut Point, &mut Point);

    fn bounds(&self) -> Bounds {
        let (a, b) = self.corners();
        Bounds::from_corners(a, b)
    }

    /// Moves the shape right by `dx` and down by `dy`.
    fn move_by(&mut self, dx: f32, dy: f32) {
        let (a, b) = self.corners_mut();
        a.move_by(dx, dy);
        b.move_by(dx, dy);
    }

    fn upper_left_corner(&self) -> Point {
        self.bounds().upper_left()
    }

    fn upper_right_corner(&self) -> Point {
        self.bounds().upper_right()
    }

    fn lower_left_corner(&self) -> Point {
        self.bounds().lower_left()
    }

    fn lower_right_corner(&self) -> Point {
        self.bounds().lower_right()
    }

    fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Size in the x-direction; never negative.
    fn width(&self) -> f32 {
        self.bounds().width()
    }

    /// Size in the y-direction; never negative.
    fn height(&self) -> f32 {
        self.bounds().height()
    }

    /// The smallest axis-aligned rectangle around the shape, with its
    /// corners stored upper-left first whatever order the shape uses.
    fn bounding_box(&self) -> Rectangle {
        let bounds = self.bounds();
        Rectangle::new(bounds.upper_left(), bounds.lower_right())
    }
}

macro_rules! corner_shape {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub corner_1: Point,
            pub corner_2: Point,
            pub outline: Outline,
        }

        impl $name {
            pub fn new(corner_1: Point, corner_2: Point) -> Self {
                Self {
                    corner_1,
                    corner_2,
                    outline: Outline::default(),
                }
            }
        }

        impl Rectangular for $name {
            fn corners(&self) -> (Point, Point) {
                (self.corner_1, self.corner_2)
            }

            fn corners_mut(&mut self) -> (&mut Point, &mut Point) {
                (&mut self.corner_1, &mut self.corner_2)
            }
        }

        impl Outlined for $name {
            fn outline(&self) -> &Outline {
                &self.outline
            }

            fn outline_mut(&mut self) -> &mut Outline {
                &mut self.outline
            }
        }

        impl Drawable for $name {
            fn kind(&self) -> ShapeKind {
                $kind
            }

            fn coordinates(&self) -> Coordinates {
                SmallVec::from_slice(&self.bounds().to_coordinates())
            }

            fn options(&self) -> DrawOptions {
                self.outline.draw_options()
            }

            fn describe(&self) -> serde_json::Value {
                describe_shape(self.kind(), self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}: corner_1=({}, {}), corner_2=({}, {}), fill_color={:?}, outline_color={:?}, outline_thickness={}.",
                    stringify!($name),
                    self.corner_1.x,
                    self.corner_1.y,
                    self.corner_2.x,
                    self.corner_2.y,
                    self.outline.fill_color,
                    self.outline.outline_color,
                    self.outline.outline_thickness
                )
            }
        }
    };
}

corner_shape!(
    /// An axis-aligned rectangle given by any two opposite corners.
    ///
    /// ```
    /// use shapes::prelude::*;
    ///
    /// let rect = Rectangle::new(Point::new(300.0, 50.0), Point::new(100.0, 200.0));
    /// assert_eq!(rect.upper_left_corner(), Point::new(100.0, 50.0));
    /// assert_eq!(rect.width(), 200.0);
    /// ```
    Rectangle,
    ShapeKind::Rectangle
);

corner_shape!(
    /// An ellipse inscribed in the rectangle spanned by two opposite corners.
    Ellipse,
    ShapeKind::Ellipse
);
