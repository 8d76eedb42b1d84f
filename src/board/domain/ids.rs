//! Identifier types for the task board domain.

use super::TaskBoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task on the board.
///
/// Identifiers are positive integers minted by the board as
/// `max(existing) + 1`, so they stay small and human-readable in the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Largest identifier that survives the JSON-speaking presentation
    /// collaborator without IEEE-754 precision loss.
    const MAX_SAFE_VALUE: u64 = (1_u64 << 53) - 1;

    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidTaskId`] when the value is zero or
    /// exceeds the safe-integer maximum (`2^53 - 1`).
    pub const fn new(value: u64) -> Result<Self, TaskBoardError> {
        if value == 0 || value > Self::MAX_SAFE_VALUE {
            return Err(TaskBoardError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
