use canvas::{App, CanvasId, ContinueOptions, Handle, ScreenSettings, Window, WindowOptions};
use easel_core::{Error, Point, Result};
use shapes::Text;

/// A window whose canvas hosts turtles.
///
/// Turtles put (0, 0) at the center of the canvas. Messages shown with
/// [`TurtleWindow::display_message`] are also placed relative to the
/// center, with `y` growing downward as on any canvas.
pub struct TurtleWindow {
    window: Window,
}

impl TurtleWindow {
    pub fn new(app: &App) -> Result<Self> {
        let settings = app.settings();
        let options = WindowOptions::from_settings(settings)
            .with_size(settings.turtle_window_width, settings.turtle_window_height)
            .with_canvas_color("white");
        Ok(Self {
            window: Window::new(app, options)?,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn app(&self) -> &App {
        self.window.app()
    }

    pub fn canvas_id(&self) -> Result<CanvasId> {
        self.window
            .initial_canvas()
            .map(|canvas| canvas.id())
            .ok_or_else(|| Error::usage("This turtle window has no canvas for turtles to live on."))
    }

    /// Canvas coordinates of a point given relative to the center.
    pub fn to_canvas(&self, point: Point) -> Point {
        Point::new(
            self.window.width() as f32 / 2.0 + point.x,
            self.window.height() as f32 / 2.0 + point.y,
        )
    }

    pub fn display_message(&mut self, message: impl Into<String>, point: Point) -> Result<()> {
        let position = self.to_canvas(point);
        let canvas = self
            .window
            .initial_canvas_mut()
            .ok_or_else(|| Error::usage("This turtle window has no canvas to write on."))?;
        let text = Handle::new(Text::new(position, message));
        canvas.draw(&text);
        canvas.render_shape_now(&text)
    }

    /// Set the pause between animation steps, in milliseconds.
    pub fn delay(&self, milliseconds: Option<u32>) -> Result<()> {
        self.configure_screen(ScreenSettings {
            delay_ms: milliseconds,
            tracer: None,
        })
    }

    /// Show only every `n`-th screen update; `Some(0)` turns animation off
    /// until [`TurtleWindow::update`] is called.
    pub fn tracer(&self, n: Option<u32>, delay: Option<u32>) -> Result<()> {
        self.configure_screen(ScreenSettings {
            delay_ms: delay,
            tracer: n,
        })
    }

    pub fn update(&mut self) -> Result<()> {
        self.window.render(None)
    }

    /// Wait for a click anywhere in the window, then close it.
    pub fn close_on_mouse_click(&mut self) -> Result<Option<Point>> {
        let options = ContinueOptions::default()
            .with_message("To exit, click anywhere in this window")
            .at(self.to_canvas(Point::new(0.0, 280.0)))
            .closing();
        self.window.continue_on_mouse_click(options)
    }

    fn configure_screen(&self, settings: ScreenSettings) -> Result<()> {
        let canvas = self.canvas_id()?;
        self.app()
            .with_toolkit(|toolkit| toolkit.configure_screen(canvas, &settings))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas::{HeadlessToolkit, ToolkitOp};

    #[test]
    fn test_turtle_window_uses_turtle_size() {
        let app = App::new(HeadlessToolkit::new());
        let window = TurtleWindow::new(&app).unwrap();
        assert_eq!(window.window().width(), 800);
        assert_eq!(window.window().height(), 600);
        assert_eq!(window.to_canvas(Point::new(0.0, 280.0)), Point::new(400.0, 580.0));
    }

    #[test]
    fn test_display_message_is_drawn() {
        let toolkit = HeadlessToolkit::new();
        let app = App::new(toolkit.clone());
        let mut window = TurtleWindow::new(&app).unwrap();
        window.display_message("hello", Point::new(-100.0, 0.0)).unwrap();
        let items = toolkit.items(window.canvas_id().unwrap());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].coordinates.as_slice(), &[300.0, 300.0]);
        assert_eq!(items[0].options.text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_tracer_and_delay_reach_the_screen() {
        let toolkit = HeadlessToolkit::new();
        let app = App::new(toolkit.clone());
        let window = TurtleWindow::new(&app).unwrap();
        window.tracer(Some(0), None).unwrap();
        window.delay(Some(5)).unwrap();
        let screens: Vec<ScreenSettings> = toolkit
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                ToolkitOp::ConfigureScreen { settings, .. } => Some(settings),
                _ => None,
            })
            .collect();
        assert_eq!(screens[0].tracer, Some(0));
        assert_eq!(screens[1].delay_ms, Some(5));
    }

    #[test]
    fn test_close_on_mouse_click() {
        let toolkit = HeadlessToolkit::new();
        let app = App::new(toolkit.clone());
        let mut window = TurtleWindow::new(&app).unwrap();
        toolkit.click(window.window().surface(), Point::new(3.0, 4.0));
        let click = window.close_on_mouse_click().unwrap();
        assert_eq!(click, Some(Point::new(3.0, 4.0)));
        assert!(window.window().is_closed());
    }
}
