use crate::style::{Arrow, Font, Justify};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use strum_macros::{Display, EnumString};

/// Toolkit coordinates for one item: `x0, y0, x1, y1` for ovals,
/// rectangles and lines, `x, y` for text.
pub type Coordinates = SmallVec<[f32; 4]>;

/// The closed set of concrete shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Ellipse,
    Line,
    Text,
    Dot,
}

impl ShapeKind {
    /// The toolkit primitive that draws this kind of shape.
    pub fn primitive(self) -> Primitive {
        match self {
            ShapeKind::Circle | ShapeKind::Ellipse | ShapeKind::Dot => Primitive::Oval,
            ShapeKind::Square | ShapeKind::Rectangle => Primitive::Rectangle,
            ShapeKind::Line => Primitive::Line,
            ShapeKind::Text => Primitive::Text,
        }
    }
}

/// Item types a toolkit canvas can create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Oval,
    Rectangle,
    Line,
    Text,
}

/// Style options passed to the toolkit when an item is created or
/// reconfigured. Only the options a capability sets are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    /// Interior color; `""` is transparent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Outline color; `""` is transparent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    /// Outline or line width, or text wrap width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow: Option<Arrow>,
}

impl DrawOptions {
    /// Colors named by these options, for validation by the toolkit.
    /// Transparent (`""`) entries are skipped.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        [self.fill.as_deref(), self.outline.as_deref()]
            .into_iter()
            .flatten()
            .filter(|c| !c.is_empty())
    }
}

/// Everything a toolkit needs to draw one shape as it is right now.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub kind: ShapeKind,
    pub primitive: Primitive,
    pub coordinates: Coordinates,
    pub options: DrawOptions,
}

/// A shape that a canvas can render.
pub trait Drawable: fmt::Debug {
    fn kind(&self) -> ShapeKind;

    /// Current toolkit coordinates.
    fn coordinates(&self) -> Coordinates;

    /// Current style options.
    fn options(&self) -> DrawOptions;

    /// Every attribute of this shape as JSON, tagged with its kind.
    fn describe(&self) -> serde_json::Value;

    fn draw_command(&self) -> DrawCommand {
        let kind = self.kind();
        DrawCommand {
            kind,
            primitive: kind.primitive(),
            coordinates: self.coordinates(),
            options: self.options(),
        }
    }
}

/// Serialize a shape and tag it with its kind. A shape that fails to
/// serialize is described as `null`.
pub(crate) fn describe_shape<T: Serialize>(kind: ShapeKind, shape: &T) -> serde_json::Value {
    serde_json::json!({
        "kind": kind,
        "attributes": serde_json::to_value(shape).unwrap_or(serde_json::Value::Null),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Outline;

    #[test]
    fn test_primitives() {
        assert_eq!(ShapeKind::Circle.primitive(), Primitive::Oval);
        assert_eq!(ShapeKind::Dot.primitive(), Primitive::Oval);
        assert_eq!(ShapeKind::Square.primitive(), Primitive::Rectangle);
        assert_eq!(ShapeKind::Line.primitive(), Primitive::Line);
        assert_eq!(ShapeKind::Text.primitive(), Primitive::Text);
        assert_eq!(Primitive::Oval.to_string(), "oval");
    }

    #[test]
    fn test_colors_skip_transparent() {
        let options = Outline::default().draw_options();
        let colors: Vec<_> = options.colors().collect();
        assert_eq!(colors, vec!["black"]);
    }

    #[test]
    fn test_options_serialize_without_absent_fields() {
        let options = DrawOptions {
            fill: Some("red".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"fill":"red"}"#);
    }
}
