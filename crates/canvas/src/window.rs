use crate::input::{Keyboard, Mouse};
use crate::toolkit::{self, CanvasSpec, SurfaceId, SurfaceSpec, ToolkitEvent};
use crate::{sleep_for, App, Canvas, DrawTarget, Handle};
use easel_core::{Color, Error, Point, Result, Settings, ToolkitError};
use shapes::Text;
use std::time::Duration;

/// How to build a [`Window`].
#[derive(Clone, Debug, PartialEq)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Background of the window around its canvases
    pub color: Color,
    /// Background of the initial canvas
    pub canvas_color: Option<Color>,
    pub make_initial_canvas: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl WindowOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.window_width,
            height: settings.window_height,
            title: settings.window_title.clone(),
            color: settings.window_color.clone(),
            canvas_color: settings.canvas_color.clone(),
            make_initial_canvas: true,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_canvas_color(mut self, color: impl Into<Color>) -> Self {
        self.canvas_color = Some(color.into());
        self
    }

    /// Build the window with no canvas; add canvases with
    /// [`Window::add_canvas`].
    pub fn without_initial_canvas(mut self) -> Self {
        self.make_initial_canvas = false;
        self
    }
}

/// What [`Window::continue_on_mouse_click`] shows and does.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinueOptions {
    pub message: String,
    /// Where the message is centered. Defaults to just above the bottom
    /// edge, centered horizontally.
    pub position: Option<Point>,
    pub close_it: bool,
    pub erase_it: bool,
}

impl Default for ContinueOptions {
    fn default() -> Self {
        Self {
            message: "To continue, click anywhere in this window".to_string(),
            position: None,
            close_it: false,
            erase_it: true,
        }
    }
}

impl ContinueOptions {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn closing(mut self) -> Self {
        self.close_it = true;
        self
    }

    pub fn keeping_message(mut self) -> Self {
        self.erase_it = false;
        self
    }
}

/// A top-level window with an optional initial canvas.
pub struct Window {
    app: App,
    surface: SurfaceId,
    width: u32,
    height: u32,
    title: String,
    initial_canvas: Option<Canvas>,
    /// Canvases added after construction, in order
    canvases: Vec<Canvas>,
    mouse: Mouse,
    keyboard: Keyboard,
    is_closed: bool,
    poll_interval: Duration,
}

impl Window {
    /// Open a window. The first window opened on an `App` also initializes
    /// the toolkit's shared root.
    pub fn new(app: &App, options: WindowOptions) -> Result<Self> {
        app.ensure_root()?;
        let spec = SurfaceSpec {
            width: options.width,
            height: options.height,
            title: options.title.clone(),
            background: options.color.clone(),
        };
        let surface = app.with_toolkit(|toolkit| toolkit.create_surface(&spec))?;
        log::info!(
            "opened window {:?} ({}x{}) as surface {}",
            options.title,
            options.width,
            options.height,
            toolkit::raw_id(surface)
        );

        let initial_canvas = if options.make_initial_canvas {
            let spec = CanvasSpec {
                width: options.width,
                height: options.height,
                background: options.canvas_color.clone(),
            };
            Some(Canvas::new(app.clone(), surface, &spec)?)
        } else {
            None
        };

        Ok(Self {
            app: app.clone(),
            surface,
            width: options.width,
            height: options.height,
            title: options.title,
            initial_canvas,
            canvases: Vec::new(),
            mouse: Mouse::default(),
            keyboard: Keyboard::default(),
            is_closed: false,
            poll_interval: app.click_poll_interval(),
        })
    }

    /// A window built from the App's settings.
    pub fn with_defaults(app: &App) -> Result<Self> {
        Self::new(app, WindowOptions::from_settings(app.settings()))
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn initial_canvas(&self) -> Option<&Canvas> {
        self.initial_canvas.as_ref()
    }

    pub fn initial_canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.initial_canvas.as_mut()
    }

    pub fn canvases(&self) -> &[Canvas] {
        &self.canvases
    }

    pub fn canvas_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        self.canvases.get_mut(index)
    }

    /// Add another canvas to this window and return it.
    pub fn add_canvas(
        &mut self,
        width: u32,
        height: u32,
        background: Option<Color>,
    ) -> Result<&mut Canvas> {
        if self.is_closed {
            return Err(Error::StaleSurface);
        }
        let spec = CanvasSpec {
            width,
            height,
            background,
        };
        let canvas = Canvas::new(self.app.clone(), self.surface, &spec)?;
        self.canvases.push(canvas);
        let index = self.canvases.len() - 1;
        Ok(&mut self.canvases[index])
    }

    /// Flush the toolkit's events and apply the ones aimed at this window.
    pub fn update(&mut self) -> Result<()> {
        if self.is_closed {
            return Ok(());
        }
        self.app.pump()?;
        for event in self.app.take_events(self.surface) {
            match event {
                ToolkitEvent::MouseClick { position, .. } => {
                    self.mouse.position = Some(position);
                }
                ToolkitEvent::KeyPress { key, .. } => {
                    self.keyboard.key_pressed = Some(key);
                }
                ToolkitEvent::CloseRequested { .. } => {
                    log::info!("close requested for window {:?}", self.title);
                    self.close()?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Render every canvas on this window, flush events, then sleep for
    /// `pause` if one is given. Does nothing once the window is closed.
    pub fn render(&mut self, pause: Option<Duration>) -> Result<()> {
        if self.is_closed {
            log::warn!("skipping render of closed window {:?}", self.title);
            return Ok(());
        }
        if let Some(canvas) = self.initial_canvas.as_mut() {
            canvas.render_shapes()?;
        }
        for canvas in &mut self.canvases {
            canvas.render_shapes()?;
        }
        self.update()?;
        sleep_for(pause);
        Ok(())
    }

    /// Wait for the next mouse click on this window and return where it
    /// landed, or `None` if the window is (or gets) closed.
    ///
    /// The click stays in [`Window::mouse`] afterwards; it is cleared when
    /// the next wait begins.
    pub fn get_next_mouse_click(&mut self) -> Result<Option<Point>> {
        self.mouse.position = None;
        loop {
            self.update()?;
            if self.is_closed {
                return Ok(None);
            }
            if let Some(position) = self.mouse.position {
                return Ok(Some(position));
            }
            std::thread::sleep(self.poll_interval);
        }
    }

    /// Show a message, wait for a click, then erase the message and/or
    /// close the window as asked.
    pub fn continue_on_mouse_click(&mut self, options: ContinueOptions) -> Result<Option<Point>> {
        if self.is_closed {
            return Ok(None);
        }
        let position = options.position.unwrap_or_else(|| {
            Point::new(self.width as f32 / 2.0, self.height as f32 - 20.0)
        });
        let message = Handle::new(Text::new(position, options.message));
        if let Some(canvas) = self.initial_canvas.as_mut() {
            canvas.draw(&message);
            canvas.render_shape_now(&message)?;
        }

        let click = self.get_next_mouse_click()?;

        if options.erase_it {
            if let Some(canvas) = self.initial_canvas.as_mut() {
                canvas.undraw(&message)?;
            }
        }
        if options.close_it {
            self.close()?;
        }
        Ok(click)
    }

    pub fn close_on_mouse_click(&mut self) -> Result<Option<Point>> {
        self.continue_on_mouse_click(
            ContinueOptions::default()
                .with_message("To exit, click anywhere in this window")
                .closing(),
        )
    }

    /// Destroy the native window. Closing twice does nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.is_closed {
            return Ok(());
        }
        self.is_closed = true;
        match self
            .app
            .with_toolkit(|toolkit| toolkit.destroy_surface(self.surface))
        {
            Ok(()) | Err(ToolkitError::SurfaceGone) => {}
            Err(err) => return Err(err.into()),
        }
        self.app.pump()?;
        self.app.discard_events(self.surface);
        log::info!("closed window {:?}", self.title);
        Ok(())
    }

    /// Sorted JSON descriptions of the shapes on the initial canvas, one
    /// per line. Two windows showing equal shapes serialize equally.
    pub fn serialize_shapes(&self) -> String {
        let mut lines: Vec<String> = self
            .initial_canvas
            .iter()
            .flat_map(|canvas| canvas.describe_shapes())
            .map(|value| value.to_string())
            .collect();
        lines.sort();
        lines.join("\n")
    }
}

impl DrawTarget for Window {
    fn target_canvas(&mut self) -> Result<&mut Canvas> {
        self.initial_canvas.as_mut().ok_or_else(|| {
            Error::usage(
                "This window was made without an initial canvas,\n\
                 so shapes cannot be attached to the window itself.\n\
                 Attach them to one of its canvases instead.",
            )
        })
    }
}
