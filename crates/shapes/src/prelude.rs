//! Everything a drawing program usually needs, including the capability
//! traits whose methods (`move_by`, `move_center_to`, `set_fill_color`,
//! corner queries) are otherwise out of scope.

pub use crate::{
    Arrow, Centered, Circle, Color, Dot, Drawable, Ellipse, Justify, Line, Outlined, Point,
    Rectangle, Rectangular, Square, Text,
};
