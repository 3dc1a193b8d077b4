//! Repository port for append-only activity event storage.

use crate::activity::domain::{ActivityEvent, EventId};
use crate::project::domain::ProjectId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity repository operations.
pub type ActivityRepositoryResult<T> = Result<T, ActivityRepositoryError>;

/// Activity event persistence contract.
///
/// The store is append-only: there is no update or delete operation.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Appends a new event.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::DuplicateEvent`] when the event ID
    /// already exists.
    async fn append(&self, event: &ActivityEvent) -> ActivityRepositoryResult<()>;

    /// Returns all events for one project, in append order.
    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>>;

    /// Returns all events for a set of projects, in append order.
    async fn list_by_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>>;
}

/// Errors returned by activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRepositoryError {
    /// An event with the same identifier already exists.
    #[error("duplicate event identifier: {0}")]
    DuplicateEvent(EventId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
