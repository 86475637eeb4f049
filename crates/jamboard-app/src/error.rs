//! Application-level errors.

use crate::clipboard::ClipboardError;
use crate::config::ConfigError;
use jamboard_core::WorkspaceError;
use jamboard_render::RendererError;
use thiserror::Error;

/// Errors surfaced by the application shell and the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
