//! Immutable three-pane render view of the board.

use super::{Stage, Task, TaskBoard};
use serde::Serialize;

/// The three panes the presentation collaborator renders, derived from one
/// consistent reading of the board.
///
/// The To-Do pane is not gated: backlog tasks are listed and counted there
/// even while their stage pane is locked, so the To-Do count can disagree
/// with what [`TaskBoard::displayable_in_stage`] exposes. The In Progress
/// pane contains only review-stage tasks. Pane counts are the pane lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Every non-completed task outside the review stage, gated or not.
    pub todo: Vec<Task>,
    /// Review-stage tasks still awaiting completion.
    pub in_progress: Vec<Task>,
    /// Review-stage tasks that have been completed.
    pub completed: Vec<Task>,
}

impl BoardSnapshot {
    /// Derives the panes from the board's current state.
    #[must_use]
    pub fn capture(board: &TaskBoard) -> Self {
        let todo = board
            .tasks()
            .iter()
            .filter(|task| !task.completed() && !task.stage().is_review())
            .cloned()
            .collect();
        let in_progress = board.displayable_in_stage(Stage::REVIEW, false);
        let completed = board.tasks_in_stages(&[Stage::REVIEW], true);
        Self {
            todo,
            in_progress,
            completed,
        }
    }
}
