//! Domain model for the staged task board.
//!
//! The domain owns the task collection, the validated scalar types, and the
//! stage-gating state machine, keeping every infrastructure concern outside
//! of the domain boundary.

mod board;
mod details;
mod error;
mod ids;
mod snapshot;
mod stage;
mod task;

pub use board::TaskBoard;
pub use details::TaskDetails;
pub use error::TaskBoardError;
pub use ids::TaskId;
pub use snapshot::BoardSnapshot;
pub use stage::Stage;
pub use task::{SeedTask, Task};
