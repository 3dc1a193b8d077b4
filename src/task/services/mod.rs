//! Application services for the kanban board.

mod board;

pub use board::{
    BoardCard, BoardView, CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService,
};
