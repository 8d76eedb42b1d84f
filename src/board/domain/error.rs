//! Error types for task board validation and lookups.

use super::TaskId;
use thiserror::Error;

/// Errors returned by task board operations and domain value constructors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskBoardError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task identifier is invalid.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The stage number is invalid.
    #[error("invalid stage {0}, expected a stage number of 1 or greater")]
    InvalidStage(u32),

    /// The edit or advance target does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A seed sequence contains two tasks with the same identifier.
    #[error("duplicate task id: {0}")]
    DuplicateTaskId(TaskId),

    /// A seed task is flagged completed while outside the review stage.
    #[error("task {0} cannot be completed outside the review stage")]
    CompletedOutsideReview(TaskId),
}
