//! Workspace error taxonomy.

use crate::board::BoardId;
use thiserror::Error;

/// Errors raised by board and settings operations.
///
/// None of these are fatal. The host surfaces them as transient notifications
/// and the rejected operation leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    /// A required text field was empty or a value could not be parsed.
    #[error("Validation error: {0}")]
    Validation(String),
    /// The operation would break a workspace invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// No board with this id exists.
    #[error("Board not found: {0}")]
    NotFound(BoardId),
}

/// Result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
