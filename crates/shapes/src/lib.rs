//! Drawable shapes for Easel.
//!
//! Every concrete shape is a fixed combination of capability records
//! (outline and fill, line thickness, text styling) plus its positional
//! data (a center, a corner pair or two endpoints). Shapes are plain
//! values: a canvas only sees them through the [`Drawable`] trait, which
//! turns their current state into toolkit coordinates and draw options.

mod centered;
mod draw;
mod line;
pub mod prelude;
mod rectangular;
mod shape_id;
pub mod style;

pub use centered::{Centered, Circle, Dot, Square, Text};
pub use draw::{Coordinates, DrawCommand, DrawOptions, Drawable, Primitive, ShapeKind};
pub use line::Line;
pub use rectangular::{Ellipse, Rectangle, Rectangular};
pub use shape_id::ShapeId;
pub use style::{Arrow, Font, FontSlant, FontWeight, Justify, Outline, Outlined, TextStyle, Thickness};

pub use easel_core::{Color, Point};
