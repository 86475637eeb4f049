//! Rectangle outline.

use super::{ActionShape, StrokeColor};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle outline spanned by a drag from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub start: Point,
    pub end: Point,
    pub color: StrokeColor,
    pub width: f64,
}

impl Rectangle {
    pub fn new(start: Point, end: Point, color: StrokeColor, width: f64) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    /// The spanned rectangle, normalized so `end < start` is valid.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

impl ActionShape for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn color(&self) -> StrokeColor {
        self.color
    }

    fn width(&self) -> f64 {
        self.width
    }
}
