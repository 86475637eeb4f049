//! Drawing actions recorded in a board's history.

mod ellipse;
mod rectangle;
mod stroke;

pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use stroke::Stroke;

use crate::error::{WorkspaceError, WorkspaceResult};
use kurbo::{BezPath, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas background. Eraser strokes paint with this color.
pub const BACKGROUND_COLOR: StrokeColor = StrokeColor::white();

/// Serializable stroke color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StrokeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> WorkspaceResult<Self> {
        let invalid = || WorkspaceError::Validation(format!("invalid color '{}'", input));

        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Self::new(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
                255,
            )),
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as `#rrggbb` (alpha is dropped when opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for StrokeColor {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Color> for StrokeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<StrokeColor> for Color {
    fn from(color: StrokeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Common geometry and paint accessors for drawable actions.
pub trait ActionShape {
    /// Axis-aligned bounds of the geometry (without stroke width).
    fn bounds(&self) -> Rect;

    /// Path to be stroked when replaying.
    fn to_path(&self) -> BezPath;

    /// Stroke color captured at commit time.
    fn color(&self) -> StrokeColor;

    /// Stroke width captured at commit time.
    fn width(&self) -> f64;
}

/// A committed, immutable entry of the drawing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawingAction {
    Stroke(Stroke),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    /// Wipes everything painted before it during replay.
    ClearAll,
}

impl DrawingAction {
    /// The drawable payload, or `None` for `ClearAll`.
    pub fn shape(&self) -> Option<&dyn ActionShape> {
        match self {
            DrawingAction::Stroke(s) => Some(s),
            DrawingAction::Rectangle(s) => Some(s),
            DrawingAction::Ellipse(s) => Some(s),
            DrawingAction::ClearAll => None,
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.shape().map(|s| s.bounds())
    }

    pub fn color(&self) -> Option<StrokeColor> {
        self.shape().map(|s| s.color())
    }

    pub fn width(&self) -> Option<f64> {
        self.shape().map(|s| s.width())
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, DrawingAction::ClearAll)
    }

    /// Short name used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawingAction::Stroke(_) => "stroke",
            DrawingAction::Rectangle(_) => "rectangle",
            DrawingAction::Ellipse(_) => "ellipse",
            DrawingAction::ClearAll => "clear",
        }
    }
}

impl From<Stroke> for DrawingAction {
    fn from(stroke: Stroke) -> Self {
        DrawingAction::Stroke(stroke)
    }
}

impl From<Rectangle> for DrawingAction {
    fn from(rect: Rectangle) -> Self {
        DrawingAction::Rectangle(rect)
    }
}

impl From<Ellipse> for DrawingAction {
    fn from(ellipse: Ellipse) -> Self {
        DrawingAction::Ellipse(ellipse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(StrokeColor::from_hex("#FF0000").unwrap(), StrokeColor::new(255, 0, 0, 255));
        assert_eq!(StrokeColor::from_hex("#0f0").unwrap(), StrokeColor::new(0, 255, 0, 255));
        assert_eq!(
            StrokeColor::from_hex("#11223380").unwrap(),
            StrokeColor::new(0x11, 0x22, 0x33, 0x80)
        );
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(StrokeColor::from_hex("red"), Err(WorkspaceError::Validation(_))));
        assert!(StrokeColor::from_hex("#12345").is_err());
        assert!(StrokeColor::from_hex("#gg0000").is_err());
        assert!(StrokeColor::from_hex("").is_err());
    }

    #[test]
    fn test_hex_display() {
        let color: StrokeColor = "#1E90FF".parse().unwrap();
        assert_eq!(color.to_string(), "#1e90ff");
    }

    #[test]
    fn test_peniko_conversion() {
        let color = StrokeColor::new(10, 20, 30, 255);
        let peniko_color: Color = color.into();
        assert_eq!(StrokeColor::from(peniko_color), color);
    }

    #[test]
    fn test_clear_has_no_paint() {
        let clear = DrawingAction::ClearAll;
        assert!(clear.is_clear());
        assert!(clear.shape().is_none());
        assert!(clear.color().is_none());

        let rect = DrawingAction::from(Rectangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            StrokeColor::black(),
            2.0,
        ));
        assert_eq!(rect.width(), Some(2.0));
        assert_eq!(rect.kind_name(), "rectangle");
    }
}
