use easel_core::Point;

/// Where the most recent mouse click landed, if one has been seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mouse {
    pub position: Option<Point>,
}

/// The most recent key pressed while the window had focus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub key_pressed: Option<String>,
}

impl Keyboard {
    pub fn was_pressed(&self, key: &str) -> bool {
        self.key_pressed.as_deref() == Some(key)
    }
}
