//! Replays an action log onto a surface.

use crate::surface::Surface;
use jamboard_core::DrawingAction;
use kurbo::Rect;

/// Paint a single action on top of whatever the surface currently shows.
///
/// `ClearAll` wipes the surface; every other action strokes its outline
/// with its own color and width.
pub fn paint_action<S: Surface + ?Sized>(surface: &mut S, action: &DrawingAction) {
    match action {
        DrawingAction::ClearAll => surface.clear(),
        other => {
            if !reaches_surface(surface, other) {
                return;
            }
            if let Some(shape) = other.shape() {
                surface.stroke_path(&shape.to_path(), shape.color().into(), shape.width());
            }
        }
    }
}

/// Whether any pixel of the stroked outline can land on the surface.
fn reaches_surface<S: Surface + ?Sized>(surface: &S, action: &DrawingAction) -> bool {
    let (Some(bounds), Some(width)) = (action.bounds(), action.width()) else {
        return false;
    };
    let radius = (width / 2.0).max(0.5);
    let reach = bounds.inflate(radius, radius);
    let visible = Rect::new(0.0, 0.0, surface.width() as f64, surface.height() as f64);
    reach.x1 >= visible.x0
        && reach.x0 <= visible.x1
        && reach.y1 >= visible.y0
        && reach.y0 <= visible.y1
}

/// Clear the surface and repaint the full action log, oldest first.
///
/// The result depends only on the surface size and `actions`.
pub fn render<S: Surface + ?Sized>(surface: &mut S, actions: &[DrawingAction]) {
    log::trace!("replaying {} actions", actions.len());
    surface.clear();
    for action in actions {
        paint_action(surface, action);
    }
}

/// Replay `actions`, then paint an uncommitted preview on top.
pub fn render_with_preview<S: Surface + ?Sized>(
    surface: &mut S,
    actions: &[DrawingAction],
    preview: Option<&DrawingAction>,
) {
    render(surface, actions);
    if let Some(preview) = preview {
        paint_action(surface, preview);
    }
}
