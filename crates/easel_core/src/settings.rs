//! User-tunable defaults for windows and the click wait loop.
//!
//! Every field has a default, so a settings file only needs the values it
//! changes:
//!
//! ```json
//! { "window_width": 640, "click_poll_interval_ms": 20 }
//! ```

use crate::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Background of the window around its canvases.
    pub window_color: Color,
    /// Background of a window's initial canvas. `None` keeps the toolkit default.
    pub canvas_color: Option<Color>,
    /// How long `get_next_mouse_click` sleeps between event flushes.
    pub click_poll_interval_ms: u64,
    pub turtle_window_width: u32,
    pub turtle_window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 400,
            window_height: 300,
            window_title: "Easel".to_string(),
            window_color: Color::from("black"),
            canvas_color: None,
            click_poll_interval_ms: 50,
            turtle_window_width: 800,
            turtle_window_height: 600,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn click_poll_interval(&self) -> Duration {
        Duration::from_millis(self.click_poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "window_width": 640, "canvas_color": "white" }"#)
            .unwrap();
        assert_eq!(settings.window_width, 640);
        assert_eq!(settings.window_height, 300);
        assert_eq!(settings.canvas_color, Some(Color::from("white")));
        assert_eq!(settings.click_poll_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_rgb_color_in_json() {
        let settings =
            Settings::from_json(r#"{ "window_color": { "red": 1, "green": 2, "blue": 3 } }"#)
                .unwrap();
        assert_eq!(settings.window_color, Color::rgb(1, 2, 3));
    }
}
