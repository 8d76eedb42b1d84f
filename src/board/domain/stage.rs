//! Pipeline stage positions.

use super::TaskBoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a task in the backlog-to-review pipeline.
///
/// Stage 1 is the terminal review stage; stages 2 and above are backlog
/// stages unlocked strictly in order. Stage numbers have no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage(u32);

impl Stage {
    /// The terminal review stage. Only tasks here can be marked completed.
    pub const REVIEW: Self = Self(1);

    /// The backlog stage where newly created tasks land.
    pub const ENTRY: Self = Self(2);

    /// Creates a validated stage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidStage`] when the value is zero.
    pub const fn new(value: u32) -> Result<Self, TaskBoardError> {
        if value == 0 {
            return Err(TaskBoardError::InvalidStage(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying stage number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` for the terminal review stage.
    #[must_use]
    pub const fn is_review(self) -> bool {
        self.0 == Self::REVIEW.0
    }

    /// Returns the immediately preceding stage, or `None` for the review
    /// stage, which has no predecessor to gate on.
    #[must_use]
    pub const fn predecessor(self) -> Option<Self> {
        if self.0 <= 1 {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
