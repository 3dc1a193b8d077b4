//! Domain model for tasks, comments, and the kanban board.
//!
//! The task domain models task creation, status movement, time tracking, and
//! status-based board grouping while keeping all infrastructure concerns
//! outside of the domain boundary.

pub mod board;
mod comment;
mod error;
mod ids;
mod task;

pub use board::{TaskBoard, group_by_status};
pub use comment::Comment;
pub use error::TaskDomainError;
pub use ids::{CommentId, TaskId};
pub use task::{NewTaskData, PersistedTaskData, Task, TaskPriority, TaskStatus};
