//! Tool system for the whiteboard.
//!
//! [`ToolManager`] is the pointer-driven drawing state machine. It holds no
//! settings of its own: the host passes the current [`DrawingSettings`] into
//! every transition, and the color and width in force when the action is
//! finalized are the ones captured into it.

use crate::actions::{DrawingAction, Ellipse, Rectangle, Stroke, StrokeColor, BACKGROUND_COLOR};
use crate::error::WorkspaceResult;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Thinnest selectable stroke.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Thickest selectable stroke.
pub const MAX_STROKE_WIDTH: f64 = 20.0;
/// Stroke width for a fresh session.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    Select,
    #[default]
    Pencil,
    Eraser,
    Rectangle,
    Ellipse,
    Text,
    Image,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Select,
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Text,
        ToolKind::Image,
    ];

    /// Pencil and eraser accumulate points.
    pub fn is_stroke(self) -> bool {
        matches!(self, ToolKind::Pencil | ToolKind::Eraser)
    }

    /// Rectangle and ellipse preview from the drag start.
    pub fn is_shape(self) -> bool {
        matches!(self, ToolKind::Rectangle | ToolKind::Ellipse)
    }

    /// Whether a drag with this tool commits anything.
    ///
    /// Select, Text and Image are selectable but currently draw nothing.
    pub fn produces_action(self) -> bool {
        self.is_stroke() || self.is_shape()
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Ellipse => "Circle",
            ToolKind::Text => "Text",
            ToolKind::Image => "Image",
        }
    }
}

/// Tool, color and width for the active board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Currently selected tool.
    pub tool: ToolKind,
    color: StrokeColor,
    width: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: StrokeColor::black(),
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl DrawingSettings {
    pub fn new(tool: ToolKind, color: StrokeColor, width: f64) -> Self {
        let mut settings = Self {
            tool,
            color,
            width: DEFAULT_STROKE_WIDTH,
        };
        settings.set_width(width);
        settings
    }

    /// The user-selected color.
    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn set_color(&mut self, color: StrokeColor) {
        self.color = color;
    }

    /// Parse and apply a hex color. Invalid input leaves the color unchanged.
    pub fn set_color_hex(&mut self, hex: &str) -> WorkspaceResult<()> {
        self.color = StrokeColor::from_hex(hex)?;
        Ok(())
    }

    /// Stroke width, always within 1–20.
    pub fn width(&self) -> f64 {
        if self.width.is_nan() {
            return DEFAULT_STROKE_WIDTH;
        }
        self.width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
    }

    /// Set the stroke width, clamped to 1–20.
    pub fn set_width(&mut self, width: f64) {
        self.width = if width.is_nan() {
            DEFAULT_STROKE_WIDTH
        } else {
            width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
        };
    }

    /// Color actually painted by `tool`: the eraser always paints background.
    pub fn paint_color(&self, tool: ToolKind) -> StrokeColor {
        if tool == ToolKind::Eraser {
            BACKGROUND_COLOR
        } else {
            self.color
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// Waiting for a pointer press.
    #[default]
    Idle,
    /// Pointer is down and an action is in flight.
    Tracking {
        /// Tool fixed at pointer-down.
        tool: ToolKind,
        /// Pointer-down position.
        start: Point,
        /// Last known pointer position.
        last: Point,
    },
}

/// What the host should paint in response to a pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolFeedback {
    /// Nothing to paint.
    None,
    /// Paint this segment straight onto the surface.
    Segment {
        from: Point,
        to: Point,
        color: StrokeColor,
        width: f64,
    },
    /// Replay committed history, then overlay this uncommitted shape.
    Preview(DrawingAction),
}

/// Drives a single in-flight drawing action from pointer events.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Current state of the tool.
    state: ToolState,
    /// Accumulated points for pencil/eraser strokes.
    stroke_points: Vec<Point>,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    /// Check if a tool interaction is active.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, ToolState::Tracking { .. })
    }

    /// Points accumulated so far for the in-flight stroke.
    pub fn stroke_points(&self) -> &[Point] {
        &self.stroke_points
    }

    /// Pointer pressed. Returns whether an action is now in flight.
    pub fn begin(&mut self, point: Point, settings: &DrawingSettings) -> bool {
        if self.is_tracking() {
            log::debug!("ignoring pointer down while an action is in flight");
            return false;
        }

        let tool = settings.tool;
        if !tool.produces_action() {
            log::debug!("{} tool does not draw", tool.name());
            return false;
        }

        self.stroke_points.clear();
        if tool.is_stroke() {
            self.stroke_points.push(point);
        }

        self.state = ToolState::Tracking {
            tool,
            start: point,
            last: point,
        };
        true
    }

    /// Pointer moved while pressed.
    pub fn update(&mut self, point: Point, settings: &DrawingSettings) -> ToolFeedback {
        let ToolState::Tracking { tool, start, last } = &mut self.state else {
            return ToolFeedback::None;
        };

        let previous = *last;
        *last = point;

        if tool.is_stroke() {
            self.stroke_points.push(point);
            ToolFeedback::Segment {
                from: previous,
                to: point,
                color: settings.paint_color(*tool),
                width: settings.width(),
            }
        } else {
            match build_shape(*tool, *start, point, settings) {
                Some(preview) => ToolFeedback::Preview(preview),
                None => ToolFeedback::None,
            }
        }
    }

    /// Pointer released: finalize the in-flight action.
    pub fn end(&mut self, point: Point, settings: &DrawingSettings) -> Option<DrawingAction> {
        self.finish(Some(point), settings)
    }

    /// Pointer left the surface: finalize at the last known point.
    pub fn leave(&mut self, settings: &DrawingSettings) -> Option<DrawingAction> {
        self.finish(None, settings)
    }

    /// Drop the in-flight action without producing anything.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
        self.stroke_points.clear();
    }

    fn finish(&mut self, point: Option<Point>, settings: &DrawingSettings) -> Option<DrawingAction> {
        let ToolState::Tracking { tool, start, last } = std::mem::take(&mut self.state) else {
            return None;
        };
        let end = point.unwrap_or(last);

        let action = if tool.is_stroke() {
            let mut points = std::mem::take(&mut self.stroke_points);
            if points.last() != Some(&end) {
                points.push(end);
            }
            Some(DrawingAction::Stroke(Stroke::new(
                points,
                settings.paint_color(tool),
                settings.width(),
            )))
        } else {
            self.stroke_points.clear();
            build_shape(tool, start, end, settings)
        };

        if let Some(action) = &action {
            log::debug!("finalized {} action", action.kind_name());
        }
        action
    }
}

/// Build the rectangle/ellipse action for a drag from `start` to `end`.
fn build_shape(
    tool: ToolKind,
    start: Point,
    end: Point,
    settings: &DrawingSettings,
) -> Option<DrawingAction> {
    let color = settings.paint_color(tool);
    let width = settings.width();
    match tool {
        ToolKind::Rectangle => Some(Rectangle::new(start, end, color, width).into()),
        ToolKind::Ellipse => Some(Ellipse::new(start, end, color, width).into()),
        _ => None,
    }
}
