//! Error types for task domain validation and parsing.

use crate::project::domain::{ProjectId, UserId};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The status value is not one of the four recognized statuses.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),

    /// The priority value is not one of the three recognized priorities.
    #[error("unknown task priority: {0}")]
    InvalidPriority(String),

    /// An hours figure is negative or not finite.
    #[error("invalid hours value: {0}")]
    InvalidHours(f64),

    /// The assignee is not a member of the task's project.
    #[error("user {assignee} is not a member of project {project}")]
    AssigneeNotMember {
        /// Assignee that failed the membership check.
        assignee: UserId,
        /// Project the task belongs to.
        project: ProjectId,
    },

    /// The comment body is empty after trimming.
    #[error("comment body must not be empty")]
    EmptyCommentBody,
}
