use crate::toolkit::{SurfaceId, Toolkit, ToolkitEvent};
use easel_core::{Result, Settings};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

struct AppState {
    toolkit: RefCell<Box<dyn Toolkit>>,
    /// Whether the toolkit's event-loop root has been set up
    root_ready: Cell<bool>,
    /// Events flushed from the toolkit but not yet taken by their window
    pending: RefCell<Vec<ToolkitEvent>>,
    settings: Settings,
}

/// The application context shared by every window.
///
/// Created once by the program's entry point and passed to each
/// [`crate::Window`]. Cloning an `App` shares the same toolkit and root.
#[derive(Clone)]
pub struct App {
    inner: Rc<AppState>,
}

impl App {
    pub fn new(toolkit: impl Toolkit + 'static) -> Self {
        Self::with_settings(toolkit, Settings::default())
    }

    pub fn with_settings(toolkit: impl Toolkit + 'static, settings: Settings) -> Self {
        Self {
            inner: Rc::new(AppState {
                toolkit: RefCell::new(Box::new(toolkit)),
                root_ready: Cell::new(false),
                pending: RefCell::new(Vec::new()),
                settings,
            }),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Run `f` against the toolkit.
    ///
    /// `f` must not call back into the `App`.
    pub fn with_toolkit<R>(&self, f: impl FnOnce(&mut dyn Toolkit) -> R) -> R {
        let mut toolkit = self.inner.toolkit.borrow_mut();
        f(toolkit.as_mut())
    }

    /// Initialize the shared root the first time a window needs it.
    pub fn ensure_root(&self) -> Result<()> {
        if !self.inner.root_ready.get() {
            self.with_toolkit(|toolkit| toolkit.init_root())?;
            self.inner.root_ready.set(true);
            log::debug!("toolkit root initialized");
        }
        Ok(())
    }

    pub fn is_root_ready(&self) -> bool {
        self.inner.root_ready.get()
    }

    /// Flush the toolkit's event queue, holding the resulting input events
    /// until the window they belong to asks for them.
    pub fn pump(&self) -> Result<()> {
        self.ensure_root()?;
        let events = self.with_toolkit(|toolkit| toolkit.update())?;
        if !events.is_empty() {
            log::trace!("{} toolkit event(s) pending", events.len());
            self.inner.pending.borrow_mut().extend(events);
        }
        Ok(())
    }

    /// Remove and return the pending events for one surface, oldest first.
    pub fn take_events(&self, surface: SurfaceId) -> Vec<ToolkitEvent> {
        let mut pending = self.inner.pending.borrow_mut();
        let (mine, others): (Vec<_>, Vec<_>) = pending
            .drain(..)
            .partition(|event| event.surface() == surface);
        *pending = others;
        mine
    }

    pub fn discard_events(&self, surface: SurfaceId) {
        self.inner
            .pending
            .borrow_mut()
            .retain(|event| event.surface() != surface);
    }

    pub fn click_poll_interval(&self) -> Duration {
        self.inner.settings.click_poll_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessToolkit;
    use crate::toolkit::SurfaceSpec;
    use easel_core::{Color, Point};

    fn surface(app: &App) -> SurfaceId {
        app.ensure_root().unwrap();
        app.with_toolkit(|toolkit| {
            toolkit.create_surface(&SurfaceSpec {
                width: 10,
                height: 10,
                title: "t".into(),
                background: Color::from("white"),
            })
        })
        .unwrap()
    }

    #[test]
    fn test_root_initialized_once() {
        let toolkit = HeadlessToolkit::new();
        let app = App::new(toolkit.clone());
        assert!(!app.is_root_ready());
        app.ensure_root().unwrap();
        app.ensure_root().unwrap();
        assert!(app.is_root_ready());
        let inits = toolkit
            .ops()
            .iter()
            .filter(|op| matches!(op, crate::headless::ToolkitOp::InitRoot))
            .count();
        assert_eq!(inits, 1);
    }

    #[test]
    fn test_events_are_routed_per_surface() {
        let toolkit = HeadlessToolkit::new();
        let app = App::new(toolkit.clone());
        let first = surface(&app);
        let second = surface(&app);
        toolkit.click(first, Point::new(1.0, 1.0));
        toolkit.click(second, Point::new(2.0, 2.0));
        app.pump().unwrap();

        let events = app.take_events(second);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].surface(), second);
        assert_eq!(app.take_events(first).len(), 1);
        assert!(app.take_events(first).is_empty());
    }
}
