//! Turtle graphics for beginners.
//!
//! A [`SimpleTurtle`] moves and turns on a [`TurtleWindow`], drawing with
//! its [`Pen`] and filling with its [`PaintBucket`]. Speed, pen and paint
//! bucket are plain fields: change them whenever you like and the next
//! movement uses the new values.

mod simple_turtle;
mod turtle_window;

pub use canvas::TurtleShape;
pub use simple_turtle::{PaintBucket, Pen, SimpleTurtle};
pub use turtle_window::TurtleWindow;
