use crate::TurtleWindow;
use canvas::{App, TurtleCommand, TurtleId, TurtleShape, TurtleState};
use easel_core::{Color, Error, Point, Result};
use serde::{Deserialize, Serialize};

/// The color and thickness of the line a turtle draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    pub thickness: f32,
}

impl Pen {
    pub fn new(color: impl Into<Color>, thickness: f32) -> Self {
        Self {
            color: color.into(),
            thickness,
        }
    }
}

/// The color a turtle fills shapes with between `begin_fill` and
/// `end_fill`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintBucket {
    pub color: Color,
}

impl PaintBucket {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// A turtle with a deliberately small set of abilities.
///
/// Distances are pixels and angles are degrees. (0, 0) is the center of
/// the window and `y` grows upward.
///
/// ```
/// use canvas::{App, HeadlessToolkit};
/// use easel_core::Point;
/// use turtle::{PaintBucket, Pen, SimpleTurtle, TurtleShape, TurtleWindow};
///
/// let app = App::new(HeadlessToolkit::new());
/// let window = TurtleWindow::new(&app)?;
/// let mut boris = SimpleTurtle::new(&window, TurtleShape::Turtle)?;
/// boris.speed = 8;
/// boris.pen = Pen::new("blue", 5.0);
/// boris.paint_bucket = PaintBucket::new("red");
///
/// boris.begin_fill()?;
/// boris.draw_regular_polygon(3, 75.0)?;
/// boris.end_fill()?;
/// boris.go_to(Point::new(100.0, -50.0))?;
/// assert_eq!(boris.x_cor()?, 100.0);
/// # Ok::<(), easel_core::Error>(())
/// ```
pub struct SimpleTurtle {
    /// 1 (slowest) to 10 (fastest).
    pub speed: u32,
    pub pen: Pen,
    pub paint_bucket: PaintBucket,
    app: App,
    id: TurtleId,
    shape: TurtleShape,
}

impl SimpleTurtle {
    pub fn new(window: &TurtleWindow, shape: TurtleShape) -> Result<Self> {
        let canvas = window.canvas_id()?;
        let app = window.app().clone();
        let id = app.with_toolkit(|toolkit| toolkit.create_turtle(canvas, shape))?;
        let turtle = Self {
            speed: 1,
            pen: Pen::new("black", 1.0),
            paint_bucket: PaintBucket::new("black"),
            app,
            id,
            shape,
        };
        turtle.sync()?;
        Ok(turtle)
    }

    pub fn id(&self) -> TurtleId {
        self.id
    }

    pub fn shape(&self) -> TurtleShape {
        self.shape
    }

    pub fn forward(&self, distance: f32) -> Result<()> {
        self.act(TurtleCommand::Forward(distance))
    }

    pub fn backward(&self, distance: f32) -> Result<()> {
        self.act(TurtleCommand::Backward(distance))
    }

    /// Spin counterclockwise by `angle` degrees.
    pub fn left(&self, angle: f32) -> Result<()> {
        self.act(TurtleCommand::Left(angle))
    }

    /// Spin clockwise by `angle` degrees.
    pub fn right(&self, angle: f32) -> Result<()> {
        self.act(TurtleCommand::Right(angle))
    }

    pub fn go_to(&self, point: Point) -> Result<()> {
        self.act(TurtleCommand::GoTo(point))
    }

    /// Point the turtle `to_angle` degrees from east: 0 is east, 90 north,
    /// 270 south. Negative angles work too.
    pub fn set_heading(&self, to_angle: f32) -> Result<()> {
        self.act(TurtleCommand::SetHeading(to_angle))
    }

    pub fn draw_circle(&self, radius: f32) -> Result<()> {
        self.act(TurtleCommand::Circle(radius))
    }

    pub fn draw_square(&self, length_of_sides: f32) -> Result<()> {
        for _ in 0..4 {
            self.forward(length_of_sides)?;
            self.left(90.0)?;
        }
        Ok(())
    }

    pub fn draw_regular_polygon(&self, number_of_sides: u32, length_of_sides: f32) -> Result<()> {
        if number_of_sides == 0 {
            return Err(Error::usage(
                "A regular polygon needs at least one side.\n\
                 Did you mean to pass a bigger number_of_sides?",
            ));
        }
        let turn = 360.0 / number_of_sides as f32;
        for _ in 0..number_of_sides {
            self.forward(length_of_sides)?;
            self.left(turn)?;
        }
        Ok(())
    }

    pub fn pen_up(&self) -> Result<()> {
        self.act(TurtleCommand::PenUp)
    }

    pub fn pen_down(&self) -> Result<()> {
        self.act(TurtleCommand::PenDown)
    }

    pub fn begin_fill(&self) -> Result<()> {
        self.act(TurtleCommand::BeginFill)
    }

    pub fn end_fill(&self) -> Result<()> {
        self.act(TurtleCommand::EndFill)
    }

    pub fn x_cor(&self) -> Result<f32> {
        Ok(self.state()?.position.x)
    }

    pub fn y_cor(&self) -> Result<f32> {
        Ok(self.state()?.position.y)
    }

    pub fn position(&self) -> Result<Point> {
        Ok(self.state()?.position)
    }

    /// Degrees in `[0, 360)`.
    pub fn heading(&self) -> Result<f32> {
        Ok(self.state()?.heading)
    }

    fn state(&self) -> Result<TurtleState> {
        Ok(self
            .app
            .with_toolkit(|toolkit| toolkit.turtle_state(self.id))?)
    }

    /// Push the current pen, paint bucket and speed, then perform one action.
    fn act(&self, command: TurtleCommand) -> Result<()> {
        self.sync()?;
        self.send(command)
    }

    fn sync(&self) -> Result<()> {
        self.send(TurtleCommand::PenColor(self.pen.color.clone()))?;
        self.send(TurtleCommand::PenSize(self.pen.thickness))?;
        self.send(TurtleCommand::FillColor(self.paint_bucket.color.clone()))?;
        self.send(TurtleCommand::Speed(self.speed))
    }

    fn send(&self, command: TurtleCommand) -> Result<()> {
        log::trace!("turtle {:?}: {:?}", self.id, command);
        self.app
            .with_toolkit(|toolkit| toolkit.turtle_command(self.id, &command))?;
        Ok(())
    }
}
