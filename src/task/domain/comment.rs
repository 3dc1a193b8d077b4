//! Task comments.
//!
//! Comments are owned by their task. Metrics only ever consume counts; the
//! body is for display.

use super::{CommentId, TaskDomainError, TaskId};
use crate::project::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One comment on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    body: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentBody`] for a blank body.
    pub fn new(
        task_id: TaskId,
        author_id: UserId,
        body: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(TaskDomainError::EmptyCommentBody);
        }
        Ok(Self {
            id: CommentId::new(),
            task_id,
            author_id,
            body,
            created_at: clock.utc(),
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author identifier.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the comment body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
