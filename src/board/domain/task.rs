//! Task aggregate root and seed reconstruction data.

use super::{Stage, TaskBoardError, TaskDetails, TaskId};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task is created in the entry backlog stage and moves towards the
/// review stage through the board's advance operation. The completed flag
/// is only ever true for review-stage tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    stage: Stage,
    completed: bool,
}

/// Raw payload for reconstructing a task supplied as seed content.
///
/// Seed tasks arrive from the presentation collaborator as plain scalars and
/// are validated wholesale by [`Task::from_seed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    /// Seeded task identifier.
    pub id: u64,
    /// Seeded task title.
    pub title: String,
    /// Seeded task description.
    pub description: String,
    /// Seeded pipeline stage.
    pub stage: u32,
    /// Seeded completion flag; only valid together with stage 1.
    pub completed: bool,
}

impl SeedTask {
    /// Creates a seed payload from raw parts.
    #[must_use]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        stage: u32,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            stage,
            completed,
        }
    }
}

impl Task {
    /// Creates a new task in the entry backlog stage.
    #[must_use]
    pub const fn new(id: TaskId, details: TaskDetails) -> Self {
        Self {
            id,
            details,
            stage: Stage::ENTRY,
            completed: false,
        }
    }

    /// Reconstructs a task from seed content.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskBoardError`] when any scalar fails validation or when
    /// the seed is flagged completed outside the review stage.
    pub fn from_seed(seed: SeedTask) -> Result<Self, TaskBoardError> {
        let id = TaskId::new(seed.id)?;
        let details = TaskDetails::new(seed.title, seed.description)?;
        let stage = Stage::new(seed.stage)?;
        if seed.completed && !stage.is_review() {
            return Err(TaskBoardError::CompletedOutsideReview(id));
        }

        Ok(Self {
            id,
            details,
            stage,
            completed: seed.completed,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the validated task text.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.details.title()
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.details.description()
    }

    /// Returns the task's current pipeline stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Replaces the task text, leaving id, stage, and completion untouched.
    pub(super) fn update_details(&mut self, details: TaskDetails) {
        self.details = details;
    }

    /// Applies the advance action to this task.
    ///
    /// A review-stage task is marked completed; marking it again is a no-op.
    /// A backlog task is promoted into the review stage only when
    /// `predecessor_complete` is true, otherwise it is left untouched.
    pub(super) fn advance(&mut self, predecessor_complete: bool) {
        if self.stage.is_review() {
            self.completed = true;
        } else if predecessor_complete {
            self.stage = Stage::REVIEW;
        }
    }
}
