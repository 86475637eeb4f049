//! Scripted sessions for the headless binary.

use crate::app::App;
use crate::clipboard::Clipboard;
use crate::error::AppResult;
use crate::ui::UiAction;
use jamboard_core::{PointerEvent, ToolKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One step of a script: a pointer event or a UI action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Pointer(PointerEvent),
    Action(UiAction),
}

/// Parse a JSON array of steps.
pub fn parse_script(json: &str) -> AppResult<Vec<ScriptStep>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_script(path: &Path) -> AppResult<Vec<ScriptStep>> {
    let text = std::fs::read_to_string(path)?;
    let steps = parse_script(&text)?;
    log::info!("Loaded {} steps from {:?}", steps.len(), path);
    Ok(steps)
}

/// A short drawing session: a pencil squiggle, a rectangle, a circle and an
/// eraser pass, then a save.
pub fn demo_script() -> Vec<ScriptStep> {
    use ScriptStep::{Action, Pointer};

    let mut steps = vec![
        Action(UiAction::SetTool(ToolKind::Pencil)),
        Action(UiAction::SetStrokeColor("#1e3a8a".to_string())),
        Pointer(PointerEvent::down(120.0, 360.0)),
    ];
    for i in 1..=24 {
        let x = 120.0 + i as f64 * 20.0;
        let y = 360.0 + if i % 2 == 0 { -40.0 } else { 40.0 };
        steps.push(Pointer(PointerEvent::moved(x, y)));
    }
    steps.extend([
        Pointer(PointerEvent::up(600.0, 360.0)),
        Action(UiAction::SetTool(ToolKind::Rectangle)),
        Action(UiAction::SetStrokeColor("#dc2626".to_string())),
        Action(UiAction::SetStrokeWidth(5.0)),
        Pointer(PointerEvent::down(100.0, 100.0)),
        Pointer(PointerEvent::moved(300.0, 200.0)),
        Pointer(PointerEvent::up(400.0, 250.0)),
        Action(UiAction::SetTool(ToolKind::Ellipse)),
        Action(UiAction::SetStrokeColor("#16a34a".to_string())),
        Pointer(PointerEvent::down(700.0, 200.0)),
        Pointer(PointerEvent::moved(760.0, 200.0)),
        Pointer(PointerEvent::up(800.0, 200.0)),
        Action(UiAction::SetTool(ToolKind::Eraser)),
        Action(UiAction::SetStrokeWidth(20.0)),
        Pointer(PointerEvent::down(300.0, 300.0)),
        Pointer(PointerEvent::moved(300.0, 420.0)),
        Pointer(PointerEvent::Leave),
        Action(UiAction::SaveBoard),
    ]);
    steps
}

/// Apply every step in order.
pub fn run_script<C: Clipboard>(app: &mut App<C>, steps: &[ScriptStep]) {
    for step in steps {
        match step {
            ScriptStep::Pointer(event) => app.handle_pointer(*event),
            ScriptStep::Action(action) => app.apply(action.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::AppConfig;
    use jamboard_core::DrawingAction;
    use std::io::Write;

    #[test]
    fn test_parse_script() {
        let steps = parse_script(
            r##"[
                {"action": {"SetTool": "Rectangle"}},
                {"action": {"SetStrokeColor": "#ff0000"}},
                {"pointer": {"type": "down", "position": {"x": 10.0, "y": 10.0}}},
                {"pointer": {"type": "up", "position": {"x": 40.0, "y": 30.0}}},
                {"action": "Undo"}
            ]"##,
        )
        .unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], ScriptStep::Action(UiAction::SetTool(ToolKind::Rectangle)));
        assert_eq!(steps[2], ScriptStep::Pointer(PointerEvent::down(10.0, 10.0)));
        assert_eq!(steps[4], ScriptStep::Action(UiAction::Undo));
    }

    #[test]
    fn test_parse_script_rejects_unknown_steps() {
        assert!(parse_script(r#"[{"keyboard": "z"}]"#).is_err());
    }

    #[test]
    fn test_load_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"action": "Clear"}}]"#).unwrap();
        let steps = load_script(file.path()).unwrap();
        assert_eq!(steps, vec![ScriptStep::Action(UiAction::Clear)]);
    }

    #[test]
    fn test_demo_script_draws_and_saves() {
        let mut app = App::new(AppConfig::default(), MemoryClipboard::new()).unwrap();
        run_script(&mut app, &demo_script());

        let kinds: Vec<_> = app
            .history()
            .actions()
            .iter()
            .map(DrawingAction::kind_name)
            .collect();
        assert_eq!(kinds, ["stroke", "rectangle", "ellipse", "stroke"]);
        assert!(app.boards().active().thumbnail.is_some());
        assert!(!app.surface().is_blank());
    }
}
