//! # Core types shared by every Easel crate
//!
//! Points, axis-aligned bounds, colors, the error taxonomy and the
//! user-tunable settings live here so that the shape, canvas and turtle
//! crates agree on them.

pub mod bounds;
pub mod color;
pub mod error;
pub mod point;
pub mod settings;

pub use bounds::Bounds;
pub use color::Color;
pub use error::{Error, Result, ToolkitError};
pub use point::Point;
pub use settings::Settings;
