//! Status-based grouping of a project's task set.

use super::{Task, TaskStatus};
use serde::Serialize;

/// A project's tasks partitioned into the four status buckets.
///
/// Every input task lands in exactly the bucket matching its status, and
/// relative input order is preserved within each bucket. Buckets for unused
/// statuses are present and empty, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskBoard {
    /// Tasks in [`TaskStatus::Todo`].
    pub todo: Vec<Task>,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: Vec<Task>,
    /// Tasks in [`TaskStatus::Review`].
    pub review: Vec<Task>,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: Vec<Task>,
}

impl TaskBoard {
    /// Returns the bucket for one status.
    #[must_use]
    pub fn bucket(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Review => &self.review,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Returns the total number of tasks across all buckets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.review.len() + self.completed.len()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions `tasks` into status buckets.
#[must_use]
pub fn group_by_status(tasks: Vec<Task>) -> TaskBoard {
    let mut board = TaskBoard::default();
    for task in tasks {
        match task.status() {
            TaskStatus::Todo => board.todo.push(task),
            TaskStatus::InProgress => board.in_progress.push(task),
            TaskStatus::Review => board.review.push(task),
            TaskStatus::Completed => board.completed.push(task),
        }
    }
    board
}
