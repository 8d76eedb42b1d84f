//! Application services coordinating access to the task board.

mod board;

pub use board::{
    BoardServiceError, BoardServiceResult, CreateTaskRequest, EditTaskRequest, TaskBoardService,
};
