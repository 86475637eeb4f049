//! Jamboard Application
//!
//! The headless application shell: a whiteboard session wiring pointer input,
//! the drawing state machine, history replay and the board list to a raster
//! surface, plus UI actions, shortcuts, config and scripted runs.

mod app;
mod clipboard;
mod config;
mod error;
mod script;
mod shortcuts;
mod ui;

pub use app::{App, ExportedImage};
#[cfg(feature = "native")]
pub use clipboard::SystemClipboard;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use config::{AppConfig, CONFIG_ENV, ConfigError};
pub use error::{AppError, AppResult};
pub use script::{ScriptStep, demo_script, load_script, parse_script, run_script};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{Toast, ToastKind, UiAction, UiState};
