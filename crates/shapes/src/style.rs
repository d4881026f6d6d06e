//! Capability records shared by the concrete shapes.
//!
//! Each record holds the attributes one capability introduces, with the
//! teaching defaults, and knows how to translate itself into toolkit draw
//! options. The translations are pure.

use crate::draw::DrawOptions;
use easel_core::color::color_or;
use easel_core::Color;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Fill and outline styling, used by circles, squares, rectangles,
/// ellipses and dots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// `None` leaves the interior transparent.
    pub fill_color: Option<Color>,
    /// `None` leaves the outline transparent.
    pub outline_color: Option<Color>,
    pub outline_thickness: f32,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            fill_color: None,
            outline_color: Some(Color::from("black")),
            outline_thickness: 1.0,
        }
    }
}

impl Outline {
    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            fill: Some(color_or(&self.fill_color, "")),
            outline: Some(color_or(&self.outline_color, "")),
            width: Some(self.outline_thickness),
            ..Default::default()
        }
    }
}

/// Setters for anything that carries an [`Outline`].
pub trait Outlined {
    fn outline(&self) -> &Outline;
    fn outline_mut(&mut self) -> &mut Outline;

    fn set_fill_color(&mut self, color: impl Into<Color>) {
        self.outline_mut().fill_color = Some(color.into());
    }

    fn set_outline_color(&mut self, color: impl Into<Color>) {
        self.outline_mut().outline_color = Some(color.into());
    }

    fn set_outline_thickness(&mut self, thickness: f32) {
        self.outline_mut().outline_thickness = thickness;
    }

    fn with_fill_color(mut self, color: impl Into<Color>) -> Self
    where
        Self: Sized,
    {
        self.set_fill_color(color);
        self
    }

    fn with_outline(mut self, color: impl Into<Color>, thickness: f32) -> Self
    where
        Self: Sized,
    {
        self.set_outline_color(color);
        self.set_outline_thickness(thickness);
        self
    }
}

/// Which ends of a line get an arrow-head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Arrow {
    First,
    Last,
    Both,
}

/// A color and thickness with no separate outline, used by lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thickness {
    /// `None` draws in black.
    pub color: Option<Color>,
    pub thickness: f32,
    pub arrow: Option<Arrow>,
}

impl Default for Thickness {
    fn default() -> Self {
        Self {
            color: Some(Color::from("black")),
            thickness: 1.0,
            arrow: None,
        }
    }
}

impl Thickness {
    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            fill: Some(color_or(&self.color, "black")),
            width: Some(self.thickness),
            arrow: self.arrow,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    Roman,
    Italic,
}

/// A font in the toolkit's vocabulary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub underline: u8,
    pub overstrike: u8,
}

/// Text content plus the font and color used to display it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: u32,
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
    pub is_overstrike: bool,
    pub justify: Justify,
    /// Wrap width in pixels; `None` never wraps.
    pub text_box_width: Option<f32>,
    pub text_color: Option<Color>,
    pub text: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "helvetica".to_string(),
            font_size: 14,
            is_bold: false,
            is_italic: false,
            is_underline: false,
            is_overstrike: false,
            justify: Justify::Center,
            text_box_width: None,
            text_color: Some(Color::from("black")),
            text: String::new(),
        }
    }
}

impl TextStyle {
    pub fn font(&self) -> Font {
        Font {
            family: self.font_family.clone(),
            size: self.font_size,
            weight: if self.is_bold {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            },
            slant: if self.is_italic {
                FontSlant::Italic
            } else {
                FontSlant::Roman
            },
            underline: u8::from(self.is_underline),
            overstrike: u8::from(self.is_overstrike),
        }
    }

    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            fill: Some(color_or(&self.text_color, "black")),
            width: self.text_box_width,
            font: Some(self.font()),
            text: Some(self.text.clone()),
            justify: Some(self.justify),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_defaults_translate_to_transparent_fill() {
        let options = Outline::default().draw_options();
        assert_eq!(options.fill.as_deref(), Some(""));
        assert_eq!(options.outline.as_deref(), Some("black"));
        assert_eq!(options.width, Some(1.0));
        assert_eq!(options.arrow, None);
    }

    #[test]
    fn test_outline_without_outline_color() {
        let outline = Outline {
            fill_color: Some(Color::rgb(0, 128, 255)),
            outline_color: None,
            outline_thickness: 3.0,
        };
        let options = outline.draw_options();
        assert_eq!(options.fill.as_deref(), Some("#0080ff"));
        assert_eq!(options.outline.as_deref(), Some(""));
        assert_eq!(options.width, Some(3.0));
    }

    #[test]
    fn test_thickness_missing_color_is_black() {
        let thickness = Thickness {
            color: None,
            thickness: 4.0,
            arrow: Some(Arrow::Both),
        };
        let options = thickness.draw_options();
        assert_eq!(options.fill.as_deref(), Some("black"));
        assert_eq!(options.width, Some(4.0));
        assert_eq!(options.arrow, Some(Arrow::Both));
        assert_eq!(options.outline, None);
    }

    #[test]
    fn test_text_flags_use_toolkit_vocabulary() {
        let style = TextStyle {
            is_bold: true,
            is_underline: true,
            text: "hello".into(),
            ..Default::default()
        };
        let options = style.draw_options();
        let font = options.font.unwrap();
        assert_eq!(font.weight.to_string(), "bold");
        assert_eq!(font.slant.to_string(), "roman");
        assert_eq!(font.underline, 1);
        assert_eq!(font.overstrike, 0);
        assert_eq!(options.text.as_deref(), Some("hello"));
        assert_eq!(options.justify, Some(Justify::Center));
        assert_eq!(options.width, None);
    }

    #[test]
    fn test_text_box_width_only_when_set() {
        let style = TextStyle {
            text_box_width: Some(120.0),
            ..Default::default()
        };
        assert_eq!(style.draw_options().width, Some(120.0));
    }

    #[test]
    fn test_arrow_parses_from_lowercase() {
        assert_eq!("last".parse::<Arrow>().unwrap(), Arrow::Last);
        assert_eq!(Arrow::First.to_string(), "first");
    }
}
