//! In-memory append-only activity event store.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{ActivityEvent, EventId},
    feed,
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};
use crate::project::domain::ProjectId;

/// Thread-safe in-memory activity event store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    state: Arc<RwLock<InMemoryActivityState>>,
}

#[derive(Debug, Default)]
struct InMemoryActivityState {
    events: Vec<ActivityEvent>,
    ids: HashSet<EventId>,
}

impl InMemoryActivityRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn append(&self, event: &ActivityEvent) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.ids.insert(event.id()) {
            return Err(ActivityRepositoryError::DuplicateEvent(event.id()));
        }
        state.events.push(event.clone());
        Ok(())
    }

    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>> {
        self.list_by_projects(&[project_id]).await
    }

    async fn list_by_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>> {
        let state = self.state.read().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(feed::restrict_to_projects(state.events.clone(), project_ids))
    }
}
