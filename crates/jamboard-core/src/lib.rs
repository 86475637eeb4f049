//! Jamboard Core Library
//!
//! Platform-agnostic core data structures and logic for the Jamboard whiteboard:
//! drawing actions, the pointer-driven drawing state machine, undo/redo history
//! and the board list.

pub mod actions;
pub mod board;
pub mod error;
pub mod history;
pub mod input;
pub mod tools;

pub use actions::{ActionShape, DrawingAction, Ellipse, Rectangle, Stroke, StrokeColor, BACKGROUND_COLOR};
pub use board::{Board, BoardChange, BoardId, BoardManager};
pub use error::{WorkspaceError, WorkspaceResult};
pub use history::History;
pub use input::{Modifiers, PointerEvent};
pub use tools::{DrawingSettings, ToolFeedback, ToolKind, ToolManager, ToolState};
