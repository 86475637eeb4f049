//! Keyboard shortcut registry and documentation.

use crate::ui::UiAction;
use jamboard_core::{Modifiers, ToolKind};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub action: UiAction,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: UiAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Whether a key press triggers this shortcut. Cmd counts as Ctrl.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.command()
            && self.shift == modifiers.shift
    }
}

/// Single-key binding for each tool.
fn tool_key(tool: ToolKind) -> &'static str {
    match tool {
        ToolKind::Select => "V",
        ToolKind::Pencil => "P",
        ToolKind::Eraser => "E",
        ToolKind::Rectangle => "R",
        ToolKind::Ellipse => "O",
        ToolKind::Text => "T",
        ToolKind::Image => "I",
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        let mut shortcuts = vec![
            Shortcut::new("Z", true, false, "Undo", UiAction::Undo),
            Shortcut::new("Z", true, true, "Redo", UiAction::Redo),
            Shortcut::new("Y", true, false, "Redo", UiAction::Redo),
            Shortcut::new("S", true, false, "Save board", UiAction::SaveBoard),
            Shortcut::new("E", true, false, "Export to PNG", UiAction::ExportPng),
        ];
        shortcuts.extend(ToolKind::ALL.into_iter().map(|tool| {
            Shortcut::new(tool_key(tool), false, false, tool.name(), UiAction::SetTool(tool))
        }));
        shortcuts
    }

    /// Action bound to a key press, if any.
    pub fn action_for(key: &str, modifiers: Modifiers) -> Option<UiAction> {
        if modifiers.alt {
            return None;
        }
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, modifiers))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
