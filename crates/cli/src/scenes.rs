//! Small programs that exercise the library end to end.

use canvas::{App, ContinueOptions, Handle, Window, WindowOptions};
use easel_core::{Point, Result};
use shapes::prelude::*;
use std::time::Duration;
use turtle::{Pen, SimpleTurtle, TurtleShape, TurtleWindow};

pub struct Scene {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&App) -> Result<()>,
}

pub const SCENES: &[Scene] = &[
    Scene {
        name: "shapes",
        description: "One of every shape, then a circle sliding across the window",
        run: shapes_scene,
    },
    Scene {
        name: "turtles",
        description: "Shrinking squares and a fast spiral drawn by two turtles",
        run: turtles_scene,
    },
    Scene {
        name: "clicks",
        description: "Drops a dot wherever the window is clicked, three times",
        run: clicks_scene,
    },
];

pub fn find(name: &str) -> Option<&'static Scene> {
    SCENES.iter().find(|scene| scene.name == name)
}

fn shapes_scene(app: &App) -> Result<()> {
    let mut window = Window::new(
        app,
        WindowOptions::from_settings(app.settings()).with_title("Shapes"),
    )?;

    let circle = Handle::new(
        Circle::new(Point::new(100.0, 75.0), 30.0)
            .with_fill_color("green")
            .with_outline("yellow", 3.0),
    );
    let rectangle = Handle::new(
        Rectangle::new(Point::new(300.0, 50.0), Point::new(200.0, 120.0)).with_fill_color("blue"),
    );
    let ellipse = Handle::new(Ellipse::new(Point::new(40.0, 180.0), Point::new(160.0, 240.0)));
    let line = Handle::new(
        Line::new(Point::new(200.0, 200.0), Point::new(350.0, 250.0))
            .with_color("red")
            .with_thickness(3.0)
            .with_arrow(Some(Arrow::Last)),
    );
    let dot = Handle::new(Dot::new(Point::new(250.0, 160.0)));
    let text = Handle::new(Text::new(Point::new(200.0, 20.0), "Hello, shapes!"));

    circle.attach_to(&mut window)?;
    rectangle.attach_to(&mut window)?;
    ellipse.attach_to(&mut window)?;
    line.attach_to(&mut window)?;
    dot.attach_to(&mut window)?;
    text.attach_to(&mut window)?;
    window.render(None)?;

    window.continue_on_mouse_click(ContinueOptions::default())?;

    for _ in 0..5 {
        circle.borrow_mut().move_by(20.0, 0.0);
        window.render(Some(Duration::from_millis(10)))?;
    }

    ellipse.detach_from(&mut window)?;
    window.render(None)?;
    window.close_on_mouse_click()?;
    Ok(())
}

fn turtles_scene(app: &App) -> Result<()> {
    let mut window = TurtleWindow::new(app)?;

    let mut blue_turtle = SimpleTurtle::new(&window, TurtleShape::Turtle)?;
    blue_turtle.pen = Pen::new("midnight blue", 3.0);
    blue_turtle.speed = 20;

    let mut size = 300.0;
    for _ in 0..6 {
        blue_turtle.draw_square(size)?;
        blue_turtle.pen_up()?;
        blue_turtle.right(45.0)?;
        blue_turtle.forward(10.0)?;
        blue_turtle.left(45.0)?;
        blue_turtle.pen_down()?;
        size -= 12.0;
    }

    window.tracer(Some(100), None)?;

    let mut spiral = SimpleTurtle::new(&window, TurtleShape::Triangle)?;
    spiral.pen = Pen::new("magenta", 1.0);
    spiral.backward(50.0)?;
    for k in 0..100 {
        spiral.left(91.0)?;
        spiral.forward(k as f32)?;
    }

    window.update()?;
    window.close_on_mouse_click()?;
    Ok(())
}

fn clicks_scene(app: &App) -> Result<()> {
    let mut window = Window::with_defaults(app)?;
    let mut dots = Vec::new();
    for _ in 0..3 {
        let Some(click) = window.get_next_mouse_click()? else {
            return Ok(());
        };
        let dot = Handle::new(Dot::new(click).with_fill_color("white"));
        dot.attach_to(&mut window)?;
        window.render(None)?;
        dots.push(dot);
    }
    log::info!("placed {} dots", dots.len());
    window.close_on_mouse_click()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas::HeadlessToolkit;

    fn run(scene: &Scene) -> HeadlessToolkit {
        let toolkit = HeadlessToolkit::new();
        toolkit.set_auto_click(Some(Point::new(10.0, 10.0)));
        let app = App::new(toolkit.clone());
        (scene.run)(&app).unwrap();
        toolkit
    }

    #[test]
    fn test_every_scene_runs_and_closes() {
        for scene in SCENES {
            let toolkit = run(scene);
            assert_eq!(toolkit.surface_count(), 0, "scene {}", scene.name);
        }
    }

    #[test]
    fn test_find() {
        assert!(find("turtles").is_some());
        assert!(find("dragons").is_none());
    }
}
