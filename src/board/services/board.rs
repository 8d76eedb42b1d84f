//! Application service exposing the board to the presentation layer.

use crate::board::domain::{BoardSnapshot, Stage, Task, TaskBoard, TaskBoardError, TaskId};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request from raw form input.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Request payload for editing an existing task's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    id: TaskId,
    title: String,
    description: String,
}

impl EditTaskRequest {
    /// Creates a request from the edit form's target and raw input.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] TaskBoardError),

    /// The shared board state is unavailable because a previous holder of
    /// the lock panicked.
    #[error("task board state is unavailable: {0}")]
    Poisoned(String),
}

/// Result type for task board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Cloneable handle guarding the board behind one mutual-exclusion boundary.
///
/// Every operation takes the lock exactly once and applies atomically with
/// respect to all other operations; mutations re-validate the target id
/// inside the lock. Clones share the same underlying board.
#[derive(Debug, Clone, Default)]
pub struct TaskBoardService {
    state: Arc<RwLock<TaskBoard>>,
}

impl TaskBoardService {
    /// Creates a service over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over a board seeded with starting content.
    #[must_use]
    pub fn from_board(board: TaskBoard) -> Self {
        Self {
            state: Arc::new(RwLock::new(board)),
        }
    }

    /// Creates a task from form input and appends it to the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the text fails validation.
    pub fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let CreateTaskRequest { title, description } = request;
        let mut board = self.write()?;
        Ok(board.create(title, description)?)
    }

    /// Replaces the text of the task named by the request.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the task does not exist or
    /// the text fails validation.
    pub fn edit_task(&self, request: EditTaskRequest) -> BoardServiceResult<Task> {
        let EditTaskRequest {
            id,
            title,
            description,
        } = request;
        let mut board = self.write()?;
        Ok(board.edit(id, title, description)?)
    }

    /// Removes the task with the given id; absence is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn delete_task(&self, id: TaskId) -> BoardServiceResult<()> {
        let mut board = self.write()?;
        board.delete(id);
        Ok(())
    }

    /// Applies the stage-progression action to the task with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the task does not exist.
    pub fn advance_task(&self, id: TaskId) -> BoardServiceResult<Task> {
        let mut board = self.write()?;
        Ok(board.advance(id)?)
    }

    /// Returns the task with the given id, if present.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn find_task(&self, id: TaskId) -> BoardServiceResult<Option<Task>> {
        let board = self.read()?;
        Ok(board.find(id).cloned())
    }

    /// Returns every task in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn tasks(&self) -> BoardServiceResult<Vec<Task>> {
        let board = self.read()?;
        Ok(board.tasks().to_vec())
    }

    /// Returns tasks whose stage is in `stages` and whose completed flag
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn tasks_in_stages(
        &self,
        stages: &[Stage],
        completed: bool,
    ) -> BoardServiceResult<Vec<Task>> {
        let board = self.read()?;
        Ok(board.tasks_in_stages(stages, completed))
    }

    /// Returns whether every task currently in `stage` has been completed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn is_stage_fully_complete(&self, stage: Stage) -> BoardServiceResult<bool> {
        let board = self.read()?;
        Ok(board.is_stage_fully_complete(stage))
    }

    /// Returns the tasks eligible for a pane showing `stage`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn displayable_in_stage(
        &self,
        stage: Stage,
        completed: bool,
    ) -> BoardServiceResult<Vec<Task>> {
        let board = self.read()?;
        Ok(board.displayable_in_stage(stage, completed))
    }

    /// Derives the three-pane render view from one consistent reading of
    /// the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Poisoned`] when the shared state is
    /// unavailable.
    pub fn snapshot(&self) -> BoardServiceResult<BoardSnapshot> {
        let board = self.read()?;
        Ok(board.snapshot())
    }

    fn read(&self) -> BoardServiceResult<RwLockReadGuard<'_, TaskBoard>> {
        self.state
            .read()
            .map_err(|err| BoardServiceError::Poisoned(err.to_string()))
    }

    fn write(&self) -> BoardServiceResult<RwLockWriteGuard<'_, TaskBoard>> {
        self.state
            .write()
            .map_err(|err| BoardServiceError::Poisoned(err.to_string()))
    }
}
