//! The boundary with the native windowing/canvas/turtle toolkit.
//!
//! Everything Easel draws goes through [`Toolkit`]. Implementations own
//! the native surfaces; Easel only holds the opaque ids they hand out.
//! Input is not delivered through callbacks: [`Toolkit::update`] processes
//! pending native events and returns the ones Easel cares about, so all
//! event handling happens synchronously inside the caller's flow.

use easel_core::{Color, Point, ToolkitError};
use serde::{Deserialize, Serialize};
use shapes::DrawCommand;
use slotmap::Key;
use strum_macros::{Display, EnumString};

slotmap::new_key_type! {
    /// A top-level native window.
    pub struct SurfaceId;
    /// A drawing surface placed on a top-level window.
    pub struct CanvasId;
    /// One drawn primitive on a canvas.
    pub struct ItemId;
    /// A native turtle living on a canvas.
    pub struct TurtleId;
}

/// A stable integer form of any toolkit id, for logs and recordings.
pub fn raw_id(key: impl Key) -> u64 {
    key.data().as_ffi()
}

/// Input delivered by [`Toolkit::update`].
#[derive(Clone, Debug, PartialEq)]
pub enum ToolkitEvent {
    MouseClick { surface: SurfaceId, position: Point },
    KeyPress { surface: SurfaceId, key: String },
    /// The user asked the window manager to close the window.
    CloseRequested { surface: SurfaceId },
}

impl ToolkitEvent {
    pub fn surface(&self) -> SurfaceId {
        match self {
            ToolkitEvent::MouseClick { surface, .. }
            | ToolkitEvent::KeyPress { surface, .. }
            | ToolkitEvent::CloseRequested { surface } => *surface,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub background: Option<Color>,
}

/// Animation settings of a turtle screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenSettings {
    /// Milliseconds between animation steps.
    pub delay_ms: Option<u32>,
    /// Only every n-th screen update is shown; 0 turns animation off.
    pub tracer: Option<u32>,
}

/// How a turtle looks on screen.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TurtleShape {
    Turtle,
    Arrow,
    #[default]
    Classic,
    Square,
    Circle,
    Triangle,
    Blank,
}

/// One action or setting change of a native turtle.
///
/// Turtle coordinates put (0, 0) at the center of the canvas with `y`
/// growing upward; headings are degrees counterclockwise from east.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurtleCommand {
    Forward(f32),
    Backward(f32),
    Left(f32),
    Right(f32),
    GoTo(Point),
    SetHeading(f32),
    Circle(f32),
    PenUp,
    PenDown,
    BeginFill,
    EndFill,
    Speed(u32),
    PenColor(Color),
    PenSize(f32),
    FillColor(Color),
}

impl TurtleCommand {
    /// True for commands that only change settings, not position,
    /// heading or pen state.
    pub fn is_setting(&self) -> bool {
        matches!(
            self,
            TurtleCommand::Speed(_)
                | TurtleCommand::PenColor(_)
                | TurtleCommand::PenSize(_)
                | TurtleCommand::FillColor(_)
        )
    }
}

/// Position and pen state of a native turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    pub position: Point,
    /// Degrees in `[0, 360)`.
    pub heading: f32,
    pub pen_down: bool,
    pub filling: bool,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            filling: false,
        }
    }
}

/// The capabilities Easel needs from a native toolkit.
pub trait Toolkit {
    /// Set up the shared event-loop root. Called once per [`crate::App`],
    /// before the first surface is created.
    fn init_root(&mut self) -> Result<(), ToolkitError>;

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, ToolkitError>;

    /// Tear down a surface and every canvas, item and turtle on it.
    fn destroy_surface(&mut self, surface: SurfaceId) -> Result<(), ToolkitError>;

    fn create_canvas(
        &mut self,
        surface: SurfaceId,
        spec: &CanvasSpec,
    ) -> Result<CanvasId, ToolkitError>;

    fn create_item(&mut self, canvas: CanvasId, command: &DrawCommand)
        -> Result<ItemId, ToolkitError>;

    /// Update an existing item's coordinates and options in place.
    fn configure_item(
        &mut self,
        canvas: CanvasId,
        item: ItemId,
        command: &DrawCommand,
    ) -> Result<(), ToolkitError>;

    fn delete_item(&mut self, canvas: CanvasId, item: ItemId) -> Result<(), ToolkitError>;

    /// Process pending native events (redraws included) and return the
    /// input events that arrived since the last call.
    fn update(&mut self) -> Result<Vec<ToolkitEvent>, ToolkitError>;

    fn configure_screen(
        &mut self,
        canvas: CanvasId,
        settings: &ScreenSettings,
    ) -> Result<(), ToolkitError>;

    fn create_turtle(
        &mut self,
        canvas: CanvasId,
        shape: TurtleShape,
    ) -> Result<TurtleId, ToolkitError>;

    fn turtle_command(
        &mut self,
        turtle: TurtleId,
        command: &TurtleCommand,
    ) -> Result<(), ToolkitError>;

    fn turtle_state(&self, turtle: TurtleId) -> Result<TurtleState, ToolkitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turtle_shape_names() {
        assert_eq!("turtle".parse::<TurtleShape>().unwrap(), TurtleShape::Turtle);
        assert_eq!(TurtleShape::default(), TurtleShape::Classic);
        assert_eq!(TurtleShape::Triangle.to_string(), "triangle");
        assert!("dragon".parse::<TurtleShape>().is_err());
    }

    #[test]
    fn test_setting_commands() {
        assert!(TurtleCommand::Speed(3).is_setting());
        assert!(TurtleCommand::PenColor("red".into()).is_setting());
        assert!(!TurtleCommand::Forward(10.0).is_setting());
        assert!(!TurtleCommand::PenUp.is_setting());
    }

    #[test]
    fn test_turtle_command_json() {
        let json = serde_json::to_string(&TurtleCommand::Forward(100.0)).unwrap();
        assert_eq!(json, r#"{"forward":100.0}"#);
        let json = serde_json::to_string(&TurtleCommand::PenUp).unwrap();
        assert_eq!(json, r#""pen_up""#);
    }
}
