//! Board Errors
//!
//! Every error leaves the board exactly as it was. The widget treats them as
//! silent no-ops; they exist so callers and tests can tell why nothing happened.

use thiserror::Error;

use crate::task::TaskId;

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Reasons a board operation did not apply
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The draft trims to an empty string.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// No task with this id in either list.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// The task is in the completed list and cannot be edited.
    #[error("task {0} is completed")]
    TaskCompleted(TaskId),

    /// An edit operation was requested while no task is being edited.
    #[error("no task is being edited")]
    NoEditSession,

    /// The id counter reached `u32::MAX`.
    #[error("task ids exhausted")]
    IdsExhausted,
}
