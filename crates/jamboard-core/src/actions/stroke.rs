//! Freehand stroke (pencil and eraser).

use super::{ActionShape, StrokeColor};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand polyline painted with round joins and caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in drawing order.
    pub points: Vec<Point>,
    pub color: StrokeColor,
    pub width: f64,
}

impl Stroke {
    pub fn new(points: Vec<Point>, color: StrokeColor, width: f64) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ActionShape for Stroke {
    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |rect, point| {
                rect.union_pt(*point)
            })
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some(first) = self.points.first() else {
            return path;
        };

        path.move_to(*first);
        if self.points.len() == 1 {
            // Zero-length segment so a single click still leaves a dot.
            path.line_to(*first);
        }
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
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
    use kurbo::PathEl;

    #[test]
    fn test_bounds() {
        let stroke = Stroke::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
            ],
            StrokeColor::black(),
            3.0,
        );

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stroke() {
        let stroke = Stroke::new(Vec::new(), StrokeColor::black(), 1.0);
        assert!(stroke.is_empty());
        assert_eq!(stroke.bounds(), Rect::ZERO);
        assert_eq!(stroke.to_path().elements().len(), 0);
    }

    #[test]
    fn test_single_point_path_is_a_dot() {
        let stroke = Stroke::new(vec![Point::new(4.0, 4.0)], StrokeColor::black(), 2.0);
        let path = stroke.to_path();
        assert_eq!(
            path.elements(),
            &[PathEl::MoveTo(Point::new(4.0, 4.0)), PathEl::LineTo(Point::new(4.0, 4.0))]
        );
    }
}
