//! Windows and canvases that draw Easel shapes through a [`Toolkit`].
//!
//! A [`Canvas`] keeps an ordered list of attached shapes and, per shape,
//! the toolkit item that shows it. Items are created the first time a
//! shape is rendered and reconfigured in place afterwards, so rendering
//! every frame never piles up duplicates.

mod app;
mod handle;
pub mod headless;
mod input;
pub mod toolkit;
mod window;

pub use app::App;
pub use handle::{DrawTarget, Handle};
pub use headless::{HeadlessToolkit, ToolkitOp};
pub use input::{Keyboard, Mouse};
pub use toolkit::{
    CanvasId, CanvasSpec, ItemId, ScreenSettings, SurfaceId, SurfaceSpec, Toolkit, ToolkitEvent,
    TurtleCommand, TurtleId, TurtleShape, TurtleState,
};
pub use window::{ContinueOptions, Window, WindowOptions};

use easel_core::{Error, Result, ToolkitError};
use shapes::{Drawable, ShapeId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Attached {
    id: ShapeId,
    shape: Rc<RefCell<dyn Drawable>>,
    /// Created lazily on first render
    item: Option<ItemId>,
}

/// A drawing surface on a window, holding the shapes attached to it.
pub struct Canvas {
    app: App,
    id: CanvasId,
    width: u32,
    height: u32,
    shapes: Vec<Attached>,
}

impl Canvas {
    pub(crate) fn new(app: App, surface: SurfaceId, spec: &CanvasSpec) -> Result<Self> {
        let id = app.with_toolkit(|toolkit| toolkit.create_canvas(surface, spec))?;
        log::debug!(
            "created {}x{} canvas {}",
            spec.width,
            spec.height,
            toolkit::raw_id(id)
        );
        Ok(Self {
            app,
            id,
            width: spec.width,
            height: spec.height,
            shapes: Vec::new(),
        })
    }

    pub fn id(&self) -> CanvasId {
        self.id
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Attach a shape. Attaching a shape that is already here does nothing.
    pub fn draw<T: Drawable + 'static>(&mut self, shape: &Handle<T>) {
        if self.contains(shape) {
            return;
        }
        self.shapes.push(Attached {
            id: shape.id(),
            shape: shape.erased(),
            item: None,
        });
    }

    /// Detach a shape and remove its item from the toolkit canvas.
    /// Detaching a shape that is not attached does nothing.
    pub fn undraw<T: Drawable + 'static>(&mut self, shape: &Handle<T>) -> Result<()> {
        let Some(index) = self.position_of(shape.id()) else {
            return Ok(());
        };
        let removed = self.shapes.remove(index);
        let Some(item) = removed.item else {
            return Ok(());
        };
        match self
            .app
            .with_toolkit(|toolkit| toolkit.delete_item(self.id, item))
        {
            Ok(()) => {
                log::debug!("deleted item {} for shape {}", toolkit::raw_id(item), removed.id);
                Ok(())
            }
            // The surface took the item with it.
            Err(ToolkitError::SurfaceGone) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Push the current state of every attached shape to the toolkit.
    pub fn render_shapes(&mut self) -> Result<()> {
        for index in 0..self.shapes.len() {
            self.render_at(index)?;
        }
        Ok(())
    }

    /// Render every attached shape, flush toolkit events, then sleep for
    /// `pause` if one is given.
    pub fn render(&mut self, pause: Option<Duration>) -> Result<()> {
        self.render_shapes()?;
        self.app.pump()?;
        sleep_for(pause);
        Ok(())
    }

    /// Render one attached shape right away and flush toolkit events.
    pub fn render_shape_now<T: Drawable + 'static>(&mut self, shape: &Handle<T>) -> Result<()> {
        let index = self.position_of(shape.id()).ok_or_else(|| {
            Error::usage("That shape is not attached to this canvas,\nso it cannot be rendered on it.")
        })?;
        self.render_at(index)?;
        self.app.pump()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn contains<T>(&self, shape: &Handle<T>) -> bool
    where
        T: Drawable + 'static,
    {
        self.position_of(shape.id()).is_some()
    }

    /// The toolkit item showing `shape`, once it has been rendered.
    pub fn item_of<T: Drawable + 'static>(&self, shape: &Handle<T>) -> Option<ItemId> {
        self.position_of(shape.id())
            .and_then(|index| self.shapes[index].item)
    }

    /// JSON descriptions of the attached shapes, in attachment order.
    pub fn describe_shapes(&self) -> Vec<serde_json::Value> {
        self.shapes
            .iter()
            .map(|attached| attached.shape.borrow().describe())
            .collect()
    }

    fn position_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|attached| attached.id == id)
    }

    fn render_at(&mut self, index: usize) -> Result<()> {
        let canvas = self.id;
        let attached = &mut self.shapes[index];
        let command = attached.shape.borrow().draw_command();
        match attached.item {
            Some(item) => {
                self.app
                    .with_toolkit(|toolkit| toolkit.configure_item(canvas, item, &command))?;
            }
            None => {
                let item = self
                    .app
                    .with_toolkit(|toolkit| toolkit.create_item(canvas, &command))?;
                log::debug!(
                    "created {} item {} for shape {}",
                    command.primitive,
                    toolkit::raw_id(item),
                    attached.id
                );
                attached.item = Some(item);
            }
        }
        Ok(())
    }
}

impl DrawTarget for Canvas {
    fn target_canvas(&mut self) -> Result<&mut Canvas> {
        Ok(self)
    }
}

pub(crate) fn sleep_for(pause: Option<Duration>) {
    if let Some(pause) = pause.filter(|pause| !pause.is_zero()) {
        std::thread::sleep(pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::Point;
    use shapes::prelude::*;

    fn setup() -> (HeadlessToolkit, Window) {
        let toolkit = HeadlessToolkit::new();
        let app = App::new(toolkit.clone());
        let window = Window::new(&app, WindowOptions::default()).unwrap();
        (toolkit, window)
    }

    fn canvas_of(window: &mut Window) -> &mut Canvas {
        window.initial_canvas_mut().unwrap()
    }

    #[test]
    fn test_draw_is_idempotent() {
        let (_, mut window) = setup();
        let circle = Handle::new(Circle::new(Point::new(100.0, 75.0), 30.0));
        circle.attach_to(&mut window).unwrap();
        circle.clone().attach_to(&mut window).unwrap();
        assert_eq!(canvas_of(&mut window).shape_count(), 1);
    }

    #[test]
    fn test_render_creates_then_configures() {
        let (toolkit, mut window) = setup();
        let circle = Handle::new(Circle::new(Point::new(100.0, 75.0), 30.0));
        circle.attach_to(&mut window).unwrap();
        let canvas = canvas_of(&mut window);

        canvas.render(None).unwrap();
        let item = canvas.item_of(&circle).unwrap();
        circle.borrow_mut().move_by(10.0, 0.0);
        canvas.render(None).unwrap();

        assert_eq!(canvas.item_of(&circle), Some(item));
        assert_eq!(toolkit.item_count(canvas.id()), 1);
        let stored = toolkit.item(canvas.id(), item).unwrap();
        assert_eq!(stored.coordinates.as_slice(), &[80.0, 45.0, 140.0, 105.0]);
    }

    #[test]
    fn test_detach_attach_render_makes_one_new_item() {
        let (toolkit, mut window) = setup();
        let rect = Handle::new(Rectangle::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        rect.attach_to(&mut window).unwrap();
        let canvas = canvas_of(&mut window);
        canvas.render(None).unwrap();
        let first = canvas.item_of(&rect).unwrap();

        rect.detach_from(canvas).unwrap();
        assert!(!canvas.contains(&rect));
        assert_eq!(toolkit.item_count(canvas.id()), 0);

        rect.attach_to(canvas).unwrap();
        canvas.render(None).unwrap();
        let second = canvas.item_of(&rect).unwrap();
        assert_ne!(first, second);
        assert_eq!(toolkit.item_count(canvas.id()), 1);
    }

    #[test]
    fn test_undraw_absent_shape_is_noop() {
        let (_, mut window) = setup();
        let line = Handle::new(Line::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
        line.detach_from(&mut window).unwrap();
    }

    #[test]
    fn test_duplicate_is_a_separate_shape() {
        let (_, mut window) = setup();
        let circle = Handle::new(Circle::new(Point::new(1.0, 1.0), 1.0));
        let copy = circle.duplicate();
        circle.attach_to(&mut window).unwrap();
        copy.attach_to(&mut window).unwrap();
        assert_eq!(canvas_of(&mut window).shape_count(), 2);
    }

    #[test]
    fn test_render_after_close_is_stale_surface() {
        let (_, mut window) = setup();
        let circle = Handle::new(Circle::new(Point::new(1.0, 1.0), 1.0));
        circle.attach_to(&mut window).unwrap();
        window.close().unwrap();
        let err = canvas_of(&mut window).render(None).unwrap_err();
        assert_eq!(err, Error::StaleSurface);
    }

    #[test]
    fn test_unknown_fill_color_fails_render() {
        let (_, mut window) = setup();
        let circle = Handle::new(Circle::new(Point::new(1.0, 1.0), 1.0).with_fill_color("blurple"));
        circle.attach_to(&mut window).unwrap();
        let err = canvas_of(&mut window).render(None).unwrap_err();
        assert_eq!(err, Error::UnknownColor("blurple".into()));
    }

    #[test]
    fn test_render_shape_now_requires_attachment() {
        let (_, mut window) = setup();
        let text = Handle::new(Text::new(Point::new(5.0, 5.0), "hi"));
        let canvas = canvas_of(&mut window);
        assert!(matches!(
            canvas.render_shape_now(&text),
            Err(Error::Usage(_))
        ));
        canvas.draw(&text);
        canvas.render_shape_now(&text).unwrap();
        assert!(canvas.item_of(&text).is_some());
    }

    #[test]
    fn test_rgb_colors_render_as_hex() {
        let (toolkit, mut window) = setup();
        let square = Handle::new(
            Square::new(Point::new(50.0, 50.0), 20.0).with_fill_color(Color::rgb(255, 0, 128)),
        );
        square.attach_to(&mut window).unwrap();
        let canvas = canvas_of(&mut window);
        canvas.render(None).unwrap();
        let items = toolkit.items(canvas.id());
        assert_eq!(items[0].options.fill.as_deref(), Some("#ff0080"));
    }
}
