//! Color values understood by the drawing toolkit.
//!
//! A color is either a name the toolkit knows (`"red"`,
//! `"midnight blue"`) or an explicit red/green/blue triple. Names are
//! resolved with palette's named colors, ignoring case and spaces, so the
//! spelling beginners see in lessons ("light blue") matches the CSS
//! spelling ("lightblue").

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fill, outline, pen or text color.
///
/// # Examples
///
/// ```
/// use easel_core::Color;
///
/// let named = Color::from("midnight blue");
/// let custom = Color::rgb(255, 128, 0);
/// assert_eq!(custom.to_string(), "#ff8000");
/// assert!(named.to_srgb().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb { red: u8, green: u8, blue: u8 },
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// A custom color made from amounts of red, green and blue light (0-255).
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgb { red, green, blue }
    }

    /// Resolve this color to sRGB components.
    ///
    /// Supports named colors (case and spaces ignored) and hex strings
    /// (`#RGB`, `#RRGGBB`). Returns `None` for names that are not known.
    pub fn to_srgb(&self) -> Option<Srgb<u8>> {
        match self {
            Self::Rgb { red, green, blue } => Some(Srgb::new(*red, *green, *blue)),
            Self::Named(name) => {
                let name = name.trim();
                if name.starts_with('#') {
                    return name.parse::<Srgb<u8>>().ok();
                }
                let normalized: String = name
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_lowercase();
                palette::named::from_str(&normalized)
            }
        }
    }

    pub fn is_known(&self) -> bool {
        self.to_srgb().is_some()
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

/// The toolkit's spelling of this color.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Rgb { red, green, blue } => write!(f, "#{red:02x}{green:02x}{blue:02x}"),
        }
    }
}

/// Render an optional color, using `fallback` when it is absent.
pub fn color_or(color: &Option<Color>, fallback: &str) -> String {
    color
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| fallback.to_string())
}
