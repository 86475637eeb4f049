//! Host UI state, actions and notifications.

use jamboard_core::{BoardId, DrawingSettings, History, ToolKind};
use serde::{Deserialize, Serialize};

/// Actions that can be triggered by the toolbar, board list or shortcuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiAction {
    /// Change the current tool.
    SetTool(ToolKind),
    /// Change stroke color (hex string).
    SetStrokeColor(String),
    /// Change stroke width.
    SetStrokeWidth(f64),
    /// Undo last action.
    Undo,
    /// Redo last undone action.
    Redo,
    /// Clear the board (undoable).
    Clear,
    /// Create a board with this title and switch to it.
    NewBoard(String),
    /// Switch to another board.
    SelectBoard(BoardId),
    /// Store the current surface as the active board's thumbnail.
    SaveBoard,
    /// Delete a board.
    DeleteBoard(BoardId),
    /// Rename a board.
    RenameBoard(BoardId, String),
    /// Export the surface as PNG.
    ExportPng,
    /// Copy the active board's share link.
    ShareBoard,
    /// The drawing surface changed size.
    Resize(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// UI state that persists across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Tool, color and width for new actions.
    pub settings: DrawingSettings,
    /// Committed actions on the active board.
    pub history_depth: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub active_board: BoardId,
    /// Notifications not yet shown.
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn new(active_board: BoardId) -> Self {
        Self {
            settings: DrawingSettings::default(),
            history_depth: 0,
            can_undo: false,
            can_redo: false,
            active_board,
            toasts: Vec::new(),
        }
    }

    /// Mirror history and board state into the toolbar fields.
    pub fn sync(&mut self, history: &History, active_board: BoardId) {
        self.history_depth = history.depth();
        self.can_undo = history.can_undo();
        self.can_redo = history.can_redo();
        self.active_board = active_board;
    }

    pub fn push_toast(&mut self, toast: Toast) {
        if toast.is_error() {
            log::warn!("{}", toast.message);
        } else {
            log::info!("{}", toast.message);
        }
        self.toasts.push(toast);
    }

    /// Take all pending notifications.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}
