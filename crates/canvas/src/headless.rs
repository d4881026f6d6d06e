//! An in-memory toolkit that records everything asked of it.
//!
//! `HeadlessToolkit` stands in for a native toolkit in tests and in the
//! demo runner. It keeps surfaces, canvases, items and turtles in slot
//! maps, simulates turtle motion, validates colors the way a native
//! toolkit would, and lets callers queue input events that are delivered
//! on the next [`Toolkit::update`].
//!
//! The toolkit is a cheap, cloneable handle: give one clone to an
//! [`crate::App`] and keep another to script input and inspect the log.

use crate::toolkit::{
    raw_id, CanvasId, CanvasSpec, ItemId, ScreenSettings, SurfaceId, SurfaceSpec, Toolkit,
    ToolkitEvent, TurtleCommand, TurtleId, TurtleShape, TurtleState,
};
use easel_core::{Color, Point, ToolkitError};
use glam::Vec2;
use serde::Serialize;
use shapes::DrawCommand;
use slotmap::SlotMap;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One recorded toolkit call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ToolkitOp {
    InitRoot,
    CreateSurface {
        surface: u64,
        title: String,
        width: u32,
        height: u32,
    },
    DestroySurface {
        surface: u64,
    },
    CreateCanvas {
        canvas: u64,
        surface: u64,
        width: u32,
        height: u32,
    },
    CreateItem {
        canvas: u64,
        item: u64,
        command: DrawCommand,
    },
    ConfigureItem {
        canvas: u64,
        item: u64,
        command: DrawCommand,
    },
    DeleteItem {
        canvas: u64,
        item: u64,
    },
    Update {
        delivered: usize,
    },
    ConfigureScreen {
        canvas: u64,
        settings: ScreenSettings,
    },
    CreateTurtle {
        turtle: u64,
        canvas: u64,
        shape: TurtleShape,
    },
    Turtle {
        turtle: u64,
        command: TurtleCommand,
    },
}

struct CanvasRecord {
    surface: SurfaceId,
    items: SlotMap<ItemId, DrawCommand>,
}

struct TurtleRecord {
    canvas: CanvasId,
    state: TurtleState,
}

#[derive(Default)]
struct HeadlessState {
    root_ready: bool,
    surfaces: SlotMap<SurfaceId, SurfaceSpec>,
    canvases: SlotMap<CanvasId, CanvasRecord>,
    turtles: SlotMap<TurtleId, TurtleRecord>,
    queued: VecDeque<ToolkitEvent>,
    /// Clicked on every live surface whenever nothing else is queued
    auto_click: Option<Point>,
    ops: Vec<ToolkitOp>,
}

impl HeadlessState {
    fn ensure_root(&self) -> Result<(), ToolkitError> {
        if self.root_ready {
            Ok(())
        } else {
            Err(ToolkitError::RootNotInitialized)
        }
    }

    /// A canvas is usable only while its surface is alive.
    fn live_canvas(&mut self, canvas: CanvasId) -> Result<&mut CanvasRecord, ToolkitError> {
        let record = self
            .canvases
            .get_mut(canvas)
            .ok_or(ToolkitError::SurfaceGone)?;
        if self.surfaces.contains_key(record.surface) {
            Ok(record)
        } else {
            Err(ToolkitError::SurfaceGone)
        }
    }

    fn live_turtle(&mut self, turtle: TurtleId) -> Result<&mut TurtleRecord, ToolkitError> {
        let record = self
            .turtles
            .get_mut(turtle)
            .ok_or(ToolkitError::UnknownTurtle)?;
        let surface = self
            .canvases
            .get(record.canvas)
            .map(|canvas| canvas.surface)
            .ok_or(ToolkitError::SurfaceGone)?;
        if self.surfaces.contains_key(surface) {
            Ok(record)
        } else {
            Err(ToolkitError::SurfaceGone)
        }
    }
}

fn check_color(name: &str) -> Result<(), ToolkitError> {
    if Color::from(name).is_known() {
        Ok(())
    } else {
        Err(ToolkitError::UnknownColor(name.to_string()))
    }
}

fn check_command_colors(command: &DrawCommand) -> Result<(), ToolkitError> {
    command.options.colors().try_for_each(check_color)
}

/// Move a turtle the way a native turtle would.
fn apply_turtle_command(state: &mut TurtleState, command: &TurtleCommand) {
    let direction = Vec2::from_angle(state.heading.to_radians());
    match command {
        TurtleCommand::Forward(distance) => {
            state.position = state.position + direction * *distance;
        }
        TurtleCommand::Backward(distance) => {
            state.position = state.position + direction * -*distance;
        }
        TurtleCommand::Left(angle) => state.heading = (state.heading + angle).rem_euclid(360.0),
        TurtleCommand::Right(angle) => state.heading = (state.heading - angle).rem_euclid(360.0),
        TurtleCommand::GoTo(point) => state.position = *point,
        TurtleCommand::SetHeading(angle) => state.heading = angle.rem_euclid(360.0),
        // A full circle ends where it started.
        TurtleCommand::Circle(_) => {}
        TurtleCommand::PenUp => state.pen_down = false,
        TurtleCommand::PenDown => state.pen_down = true,
        TurtleCommand::BeginFill => state.filling = true,
        TurtleCommand::EndFill => state.filling = false,
        TurtleCommand::Speed(_)
        | TurtleCommand::PenColor(_)
        | TurtleCommand::PenSize(_)
        | TurtleCommand::FillColor(_) => {}
    }
}

#[derive(Clone, Default)]
pub struct HeadlessToolkit {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input event for the next `update`.
    pub fn queue_event(&self, event: ToolkitEvent) {
        self.state.borrow_mut().queued.push_back(event);
    }

    pub fn click(&self, surface: SurfaceId, position: Point) {
        self.queue_event(ToolkitEvent::MouseClick { surface, position });
    }

    pub fn press_key(&self, surface: SurfaceId, key: impl Into<String>) {
        self.queue_event(ToolkitEvent::KeyPress {
            surface,
            key: key.into(),
        });
    }

    /// Answer every wait for a click by clicking `position` on each live
    /// surface, for running scenes unattended.
    pub fn set_auto_click(&self, position: Option<Point>) {
        self.state.borrow_mut().auto_click = position;
    }

    /// Simulate the user clicking the window's close button.
    pub fn request_close(&self, surface: SurfaceId) {
        self.queue_event(ToolkitEvent::CloseRequested { surface });
    }

    pub fn ops(&self) -> Vec<ToolkitOp> {
        self.state.borrow().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.state.borrow_mut().ops.clear();
    }

    pub fn surface_count(&self) -> usize {
        self.state.borrow().surfaces.len()
    }

    pub fn is_surface_alive(&self, surface: SurfaceId) -> bool {
        self.state.borrow().surfaces.contains_key(surface)
    }

    /// Items currently drawn on a canvas, in creation order.
    pub fn items(&self, canvas: CanvasId) -> Vec<DrawCommand> {
        self.state
            .borrow()
            .canvases
            .get(canvas)
            .map(|record| record.items.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn item_count(&self, canvas: CanvasId) -> usize {
        self.state
            .borrow()
            .canvases
            .get(canvas)
            .map(|record| record.items.len())
            .unwrap_or(0)
    }

    pub fn item(&self, canvas: CanvasId, item: ItemId) -> Option<DrawCommand> {
        self.state
            .borrow()
            .canvases
            .get(canvas)
            .and_then(|record| record.items.get(item).cloned())
    }

    /// Every command a turtle received, in order.
    pub fn turtle_commands(&self, turtle: TurtleId) -> Vec<TurtleCommand> {
        let raw = raw_id(turtle);
        self.state
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                ToolkitOp::Turtle { turtle, command } if *turtle == raw => Some(command.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, op: ToolkitOp) {
        self.state.borrow_mut().ops.push(op);
    }
}

impl Toolkit for HeadlessToolkit {
    fn init_root(&mut self) -> Result<(), ToolkitError> {
        self.state.borrow_mut().root_ready = true;
        self.record(ToolkitOp::InitRoot);
        Ok(())
    }

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, ToolkitError> {
        let surface = {
            let mut state = self.state.borrow_mut();
            state.ensure_root()?;
            state.surfaces.insert(spec.clone())
        };
        self.record(ToolkitOp::CreateSurface {
            surface: raw_id(surface),
            title: spec.title.clone(),
            width: spec.width,
            height: spec.height,
        });
        Ok(surface)
    }

    fn destroy_surface(&mut self, surface: SurfaceId) -> Result<(), ToolkitError> {
        {
            let mut state = self.state.borrow_mut();
            state
                .surfaces
                .remove(surface)
                .ok_or(ToolkitError::SurfaceGone)?;
            let canvases: Vec<CanvasId> = state
                .canvases
                .iter()
                .filter(|(_, record)| record.surface == surface)
                .map(|(id, _)| id)
                .collect();
            // Turtles stay so that later commands report SurfaceGone.
            for canvas in canvases {
                state.canvases.remove(canvas);
            }
        }
        self.record(ToolkitOp::DestroySurface {
            surface: raw_id(surface),
        });
        Ok(())
    }

    fn create_canvas(
        &mut self,
        surface: SurfaceId,
        spec: &CanvasSpec,
    ) -> Result<CanvasId, ToolkitError> {
        if let Some(background) = &spec.background {
            check_color(&background.to_string())?;
        }
        let canvas = {
            let mut state = self.state.borrow_mut();
            if !state.surfaces.contains_key(surface) {
                return Err(ToolkitError::SurfaceGone);
            }
            state.canvases.insert(CanvasRecord {
                surface,
                items: SlotMap::with_key(),
            })
        };
        self.record(ToolkitOp::CreateCanvas {
            canvas: raw_id(canvas),
            surface: raw_id(surface),
            width: spec.width,
            height: spec.height,
        });
        Ok(canvas)
    }

    fn create_item(
        &mut self,
        canvas: CanvasId,
        command: &DrawCommand,
    ) -> Result<ItemId, ToolkitError> {
        let item = {
            let mut state = self.state.borrow_mut();
            let record = state.live_canvas(canvas)?;
            check_command_colors(command)?;
            record.items.insert(command.clone())
        };
        self.record(ToolkitOp::CreateItem {
            canvas: raw_id(canvas),
            item: raw_id(item),
            command: command.clone(),
        });
        Ok(item)
    }

    fn configure_item(
        &mut self,
        canvas: CanvasId,
        item: ItemId,
        command: &DrawCommand,
    ) -> Result<(), ToolkitError> {
        {
            let mut state = self.state.borrow_mut();
            let record = state.live_canvas(canvas)?;
            check_command_colors(command)?;
            let existing = record.items.get_mut(item).ok_or(ToolkitError::UnknownItem)?;
            *existing = command.clone();
        }
        self.record(ToolkitOp::ConfigureItem {
            canvas: raw_id(canvas),
            item: raw_id(item),
            command: command.clone(),
        });
        Ok(())
    }

    fn delete_item(&mut self, canvas: CanvasId, item: ItemId) -> Result<(), ToolkitError> {
        {
            let mut state = self.state.borrow_mut();
            let record = state.live_canvas(canvas)?;
            record.items.remove(item).ok_or(ToolkitError::UnknownItem)?;
        }
        self.record(ToolkitOp::DeleteItem {
            canvas: raw_id(canvas),
            item: raw_id(item),
        });
        Ok(())
    }

    fn update(&mut self) -> Result<Vec<ToolkitEvent>, ToolkitError> {
        let events = {
            let mut state = self.state.borrow_mut();
            state.ensure_root()?;
            let auto_click = state.auto_click;
            let events: Vec<ToolkitEvent> = match auto_click {
                Some(position) if state.queued.is_empty() => state
                    .surfaces
                    .keys()
                    .map(|surface| ToolkitEvent::MouseClick { surface, position })
                    .collect(),
                _ => state.queued.drain(..).collect(),
            };
            events
        };
        let idle = ToolkitOp::Update { delivered: 0 };
        let repeat_idle = events.is_empty() && self.state.borrow().ops.last() == Some(&idle);
        if !repeat_idle {
            self.record(ToolkitOp::Update {
                delivered: events.len(),
            });
        }
        Ok(events)
    }

    fn configure_screen(
        &mut self,
        canvas: CanvasId,
        settings: &ScreenSettings,
    ) -> Result<(), ToolkitError> {
        self.state.borrow_mut().live_canvas(canvas)?;
        self.record(ToolkitOp::ConfigureScreen {
            canvas: raw_id(canvas),
            settings: settings.clone(),
        });
        Ok(())
    }

    fn create_turtle(
        &mut self,
        canvas: CanvasId,
        shape: TurtleShape,
    ) -> Result<TurtleId, ToolkitError> {
        let turtle = {
            let mut state = self.state.borrow_mut();
            state.live_canvas(canvas)?;
            state.turtles.insert(TurtleRecord {
                canvas,
                state: TurtleState::default(),
            })
        };
        self.record(ToolkitOp::CreateTurtle {
            turtle: raw_id(turtle),
            canvas: raw_id(canvas),
            shape,
        });
        Ok(turtle)
    }

    fn turtle_command(
        &mut self,
        turtle: TurtleId,
        command: &TurtleCommand,
    ) -> Result<(), ToolkitError> {
        {
            let mut state = self.state.borrow_mut();
            let record = state.live_turtle(turtle)?;
            match command {
                TurtleCommand::PenColor(color) | TurtleCommand::FillColor(color) => {
                    check_color(&color.to_string())?
                }
                _ => {}
            }
            apply_turtle_command(&mut record.state, command);
        }
        self.record(ToolkitOp::Turtle {
            turtle: raw_id(turtle),
            command: command.clone(),
        });
        Ok(())
    }

    fn turtle_state(&self, turtle: TurtleId) -> Result<TurtleState, ToolkitError> {
        self.state
            .borrow()
            .turtles
            .get(turtle)
            .map(|record| record.state)
            .ok_or(ToolkitError::UnknownTurtle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapes::{Circle, Drawable};

    fn surface_spec() -> SurfaceSpec {
        SurfaceSpec {
            width: 400,
            height: 300,
            title: "test".into(),
            background: Color::from("black"),
        }
    }

    fn canvas_spec() -> CanvasSpec {
        CanvasSpec {
            width: 400,
            height: 300,
            background: None,
        }
    }

    fn toolkit_with_canvas() -> (HeadlessToolkit, SurfaceId, CanvasId) {
        let mut toolkit = HeadlessToolkit::new();
        toolkit.init_root().unwrap();
        let surface = toolkit.create_surface(&surface_spec()).unwrap();
        let canvas = toolkit.create_canvas(surface, &canvas_spec()).unwrap();
        (toolkit, surface, canvas)
    }

    #[test]
    fn test_surface_requires_root() {
        let mut toolkit = HeadlessToolkit::new();
        assert_eq!(
            toolkit.create_surface(&surface_spec()),
            Err(ToolkitError::RootNotInitialized)
        );
    }

    #[test]
    fn test_item_lifecycle() {
        let (mut toolkit, _, canvas) = toolkit_with_canvas();
        let mut circle = Circle::new(Point::new(100.0, 75.0), 30.0);
        let item = toolkit.create_item(canvas, &circle.draw_command()).unwrap();
        assert_eq!(toolkit.item_count(canvas), 1);

        circle.radius = 10.0;
        toolkit
            .configure_item(canvas, item, &circle.draw_command())
            .unwrap();
        let stored = toolkit.item(canvas, item).unwrap();
        assert_eq!(stored.coordinates.as_slice(), &[90.0, 65.0, 110.0, 85.0]);

        toolkit.delete_item(canvas, item).unwrap();
        assert_eq!(toolkit.item_count(canvas), 0);
        assert_eq!(
            toolkit.delete_item(canvas, item),
            Err(ToolkitError::UnknownItem)
        );
    }

    #[test]
    fn test_destroyed_surface_is_gone() {
        let (mut toolkit, surface, canvas) = toolkit_with_canvas();
        toolkit.destroy_surface(surface).unwrap();
        let circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        assert_eq!(
            toolkit.create_item(canvas, &circle.draw_command()),
            Err(ToolkitError::SurfaceGone)
        );
        assert_eq!(
            toolkit.destroy_surface(surface),
            Err(ToolkitError::SurfaceGone)
        );
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let (mut toolkit, _, canvas) = toolkit_with_canvas();
        let mut circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        circle.outline.fill_color = Some("blurple".into());
        assert_eq!(
            toolkit.create_item(canvas, &circle.draw_command()),
            Err(ToolkitError::UnknownColor("blurple".into()))
        );
    }

    #[test]
    fn test_update_delivers_queued_events_once() {
        let (mut toolkit, surface, _) = toolkit_with_canvas();
        toolkit.click(surface, Point::new(5.0, 6.0));
        let events = toolkit.update().unwrap();
        assert_eq!(
            events,
            vec![ToolkitEvent::MouseClick {
                surface,
                position: Point::new(5.0, 6.0)
            }]
        );
        assert!(toolkit.update().unwrap().is_empty());
    }

    #[test]
    fn test_idle_updates_are_recorded_once() {
        let (mut toolkit, surface, _) = toolkit_with_canvas();
        toolkit.clear_ops();
        for _ in 0..5 {
            toolkit.update().unwrap();
        }
        toolkit.click(surface, Point::new(1.0, 1.0));
        toolkit.update().unwrap();
        toolkit.update().unwrap();
        assert_eq!(
            toolkit.ops(),
            vec![
                ToolkitOp::Update { delivered: 0 },
                ToolkitOp::Update { delivered: 1 },
                ToolkitOp::Update { delivered: 0 },
            ]
        );
    }

    #[test]
    fn test_auto_click_answers_empty_updates() {
        let (mut toolkit, surface, _) = toolkit_with_canvas();
        toolkit.set_auto_click(Some(Point::new(1.0, 1.0)));
        toolkit.press_key(surface, "q");
        assert!(matches!(
            toolkit.update().unwrap().as_slice(),
            [ToolkitEvent::KeyPress { .. }]
        ));
        assert!(matches!(
            toolkit.update().unwrap().as_slice(),
            [ToolkitEvent::MouseClick { .. }]
        ));
    }

    #[test]
    fn test_turtle_motion() {
        let (mut toolkit, _, canvas) = toolkit_with_canvas();
        let turtle = toolkit.create_turtle(canvas, TurtleShape::Turtle).unwrap();
        toolkit.turtle_command(turtle, &TurtleCommand::Left(90.0)).unwrap();
        toolkit
            .turtle_command(turtle, &TurtleCommand::Forward(200.0))
            .unwrap();
        let state = toolkit.turtle_state(turtle).unwrap();
        assert!((state.position.x - 0.0).abs() < 1e-3);
        assert!((state.position.y - 200.0).abs() < 1e-3);
        assert_eq!(state.heading, 90.0);

        toolkit.turtle_command(turtle, &TurtleCommand::Right(180.0)).unwrap();
        assert_eq!(toolkit.turtle_state(turtle).unwrap().heading, 270.0);
        assert_eq!(toolkit.turtle_commands(turtle).len(), 3);
    }

    #[test]
    fn test_turtle_on_destroyed_surface_is_gone() {
        let (mut toolkit, surface, canvas) = toolkit_with_canvas();
        let turtle = toolkit.create_turtle(canvas, TurtleShape::Classic).unwrap();
        toolkit.destroy_surface(surface).unwrap();
        assert_eq!(
            toolkit.turtle_command(turtle, &TurtleCommand::Forward(10.0)),
            Err(ToolkitError::SurfaceGone)
        );
    }

    #[test]
    fn test_turtle_pen_color_checked() {
        let (mut toolkit, _, canvas) = toolkit_with_canvas();
        let turtle = toolkit.create_turtle(canvas, TurtleShape::Classic).unwrap();
        assert_eq!(
            toolkit.turtle_command(turtle, &TurtleCommand::PenColor("nope".into())),
            Err(ToolkitError::UnknownColor("nope".into()))
        );
    }

    #[test]
    fn test_ops_serialize_with_tag() {
        let (toolkit, _, _) = toolkit_with_canvas();
        let json = serde_json::to_value(toolkit.ops()).unwrap();
        assert_eq!(json[0]["op"], "init_root");
        assert_eq!(json[1]["op"], "create_surface");
        assert_eq!(json[2]["op"], "create_canvas");
    }
}
