//! User-supplied task text, validated at the mutation boundary.

use super::TaskBoardError;
use serde::Serialize;

/// Validated title and description pair for a task.
///
/// Both fields are stored trimmed and are guaranteed non-empty. Raw text
/// re-enters the domain through [`Self::new`], never through
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetails {
    title: String,
    description: String,
}

impl TaskDetails {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::EmptyTitle`] or
    /// [`TaskBoardError::EmptyDescription`] when the corresponding field is
    /// empty after trimming. The title is checked first.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskBoardError> {
        let raw_title = title.into();
        let trimmed_title = raw_title.trim();
        if trimmed_title.is_empty() {
            return Err(TaskBoardError::EmptyTitle);
        }

        let raw_description = description.into();
        let trimmed_description = raw_description.trim();
        if trimmed_description.is_empty() {
            return Err(TaskBoardError::EmptyDescription);
        }

        Ok(Self {
            title: trimmed_title.to_owned(),
            description: trimmed_description.to_owned(),
        })
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
