//! The task board collection and its stage-gating state machine.

use super::{BoardSnapshot, Stage, Task, TaskBoardError, TaskDetails, TaskId};
use std::collections::HashSet;

/// The authoritative, in-memory task collection.
///
/// All mutations flow through the four operations; tasks keep their
/// insertion order and no operation reorders survivors. The board enforces
/// the single-predecessor gating rule: a backlog task may only enter the
/// review stage once every task in the stage immediately before it has been
/// completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a board from an arbitrary starting sequence of tasks.
    ///
    /// Seed order becomes collection order. Per-task field validation
    /// happens when each task is constructed; this constructor checks the
    /// collection-level invariant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::DuplicateTaskId`] when two seed tasks share
    /// an identifier.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskBoardError> {
        let collection: Vec<Task> = tasks.into_iter().collect();
        let mut seen_ids: HashSet<TaskId> = HashSet::with_capacity(collection.len());
        for task in &collection {
            if !seen_ids.insert(task.id()) {
                return Err(TaskBoardError::DuplicateTaskId(task.id()));
            }
        }
        Ok(Self { tasks: collection })
    }

    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns all tasks whose stage is in `stages` and whose completed flag
    /// matches, in collection order. Repeated stage values change nothing.
    #[must_use]
    pub fn tasks_in_stages(&self, stages: &[Stage], completed: bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| stages.contains(&task.stage()) && task.completed() == completed)
            .cloned()
            .collect()
    }

    /// Returns whether every task currently in `stage` has been completed.
    ///
    /// A stage containing zero tasks is vacuously fully complete. Because
    /// only review-stage tasks can be completed, a backlog stage is fully
    /// complete exactly when it is empty, which is what makes gating cascade
    /// down the pipeline.
    #[must_use]
    pub fn is_stage_fully_complete(&self, stage: Stage) -> bool {
        self.tasks
            .iter()
            .filter(|task| task.stage() == stage)
            .all(Task::completed)
    }

    /// Returns the tasks eligible for a pane showing `stage`.
    ///
    /// The review stage is always visible. A backlog stage is visible only
    /// once the stage immediately before it is fully complete; a gated stage
    /// yields the empty sequence.
    #[must_use]
    pub fn displayable_in_stage(&self, stage: Stage, completed: bool) -> Vec<Task> {
        let unlocked = stage
            .predecessor()
            .is_none_or(|previous| self.is_stage_fully_complete(previous));
        if unlocked {
            self.tasks_in_stages(&[stage], completed)
        } else {
            Vec::new()
        }
    }

    /// Derives the three-pane render view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }

    /// Creates a task in the entry backlog stage and appends it.
    ///
    /// The new task receives `max(existing ids) + 1`, or 1 on an empty
    /// board. Existing tasks are not reordered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::EmptyTitle`] or
    /// [`TaskBoardError::EmptyDescription`] when the text is empty after
    /// trimming, and [`TaskBoardError::InvalidTaskId`] when the next
    /// identifier would exceed the safe-integer ceiling. The board is
    /// unchanged on any failure.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Task, TaskBoardError> {
        let details = TaskDetails::new(title, description)?;
        let id = self.next_id()?;
        let task = Task::new(id, details);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces the title and description of the task with the given id,
    /// leaving its id, stage, and completion flag untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::TaskNotFound`] when no task has the id, and
    /// the same validation errors as [`Self::create`] for empty text. The
    /// lookup happens first, so a missing id wins over invalid text. The
    /// board is unchanged on any failure.
    pub fn edit(
        &mut self,
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Task, TaskBoardError> {
        self.find(id).ok_or(TaskBoardError::TaskNotFound(id))?;
        let details = TaskDetails::new(title, description)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskBoardError::TaskNotFound(id))?;
        task.update_details(details);
        Ok(task.clone())
    }

    /// Removes the task with the given id.
    ///
    /// Absence is an idempotent no-op, not an error; no other task is
    /// affected either way.
    pub fn delete(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id() != id);
    }

    /// Applies the stage-progression action to the task with the given id.
    ///
    /// A review-stage task is marked completed (terminal; advancing again
    /// changes nothing). A backlog task is promoted into the review stage
    /// when its immediately preceding stage is fully complete, with
    /// `completed` remaining false; while the gate is shut the call succeeds
    /// but leaves the task unchanged, distinguishable from promotion only by
    /// the unchanged stage field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::TaskNotFound`] when no task has the id.
    pub fn advance(&mut self, id: TaskId) -> Result<Task, TaskBoardError> {
        let stage = self
            .find(id)
            .ok_or(TaskBoardError::TaskNotFound(id))?
            .stage();
        let predecessor_complete = stage
            .predecessor()
            .is_none_or(|previous| self.is_stage_fully_complete(previous));
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskBoardError::TaskNotFound(id))?;
        task.advance(predecessor_complete);
        Ok(task.clone())
    }

    /// Mints the identifier for the next created task.
    fn next_id(&self) -> Result<TaskId, TaskBoardError> {
        let highest = self
            .tasks
            .iter()
            .map(|task| task.id().value())
            .max()
            .unwrap_or(0);
        TaskId::new(highest + 1)
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}
