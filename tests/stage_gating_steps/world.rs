//! Shared world state for stage gating BDD scenarios.

use aalto::board::domain::Task;
use aalto::board::services::{BoardServiceError, TaskBoardService};
use rstest::fixture;

/// Scenario world for stage gating behaviour tests.
pub struct BoardWorld {
    pub service: TaskBoardService,
    pub last_task: Option<Task>,
    pub last_error: Option<BoardServiceError>,
}

impl BoardWorld {
    /// Creates a world over an empty board with no recorded outcomes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskBoardService::new(),
            last_task: None,
            last_error: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
