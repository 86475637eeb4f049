//! Circle outline (the "ellipse" tool).

use super::{ActionShape, StrokeColor};
use kurbo::{BezPath, Circle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Circle centered on the drag start, passing through the drag end.
///
/// This is not fitted to the drag's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub start: Point,
    pub end: Point,
    pub color: StrokeColor,
    pub width: f64,
}

impl Ellipse {
    pub fn new(start: Point, end: Point, color: StrokeColor, width: f64) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    pub fn center(&self) -> Point {
        self.start
    }

    /// Euclidean distance from start to end.
    pub fn radius(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn as_circle(&self) -> Circle {
        Circle::new(self.center(), self.radius())
    }
}

impl ActionShape for Ellipse {
    fn bounds(&self) -> Rect {
        self.as_circle().bounding_box()
    }

    fn to_path(&self) -> BezPath {
        self.as_circle().to_path(0.1)
    }

    fn color(&self) -> StrokeColor {
        self.color
    }

    fn width(&self) -> f64 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_distance() {
        let circle = Ellipse::new(
            Point::new(10.0, 10.0),
            Point::new(13.0, 14.0),
            StrokeColor::black(),
            1.0,
        );
        assert!((circle.radius() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_centered_on_start() {
        let circle = Ellipse::new(
            Point::new(50.0, 50.0),
            Point::new(50.0, 80.0),
            StrokeColor::black(),
            1.0,
        );
        let bounds = circle.bounds();
        assert!((bounds.x0 - 20.0).abs() < 1e-9);
        assert!((bounds.y0 - 20.0).abs() < 1e-9);
        assert!((bounds.x1 - 80.0).abs() < 1e-9);
        assert!((bounds.y1 - 80.0).abs() < 1e-9);
    }
}
