//! Membership-checked project activity feed.

use crate::activity::{
    domain::ActivityEvent,
    feed,
    ports::{ActivityRepository, ActivityRepositoryError},
};
use crate::project::{
    domain::{AccessError, ProjectId, UserId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for activity feed queries.
#[derive(Debug, Error)]
pub enum ActivityFeedError {
    /// The caller failed the membership check.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Project lookup failed.
    #[error(transparent)]
    Project(#[from] ProjectRepositoryError),
    /// Event lookup failed.
    #[error(transparent)]
    Activity(#[from] ActivityRepositoryError),
}

/// Result type for activity feed service operations.
pub type ActivityFeedResult<T> = Result<T, ActivityFeedError>;

/// Project-scoped activity feed service.
#[derive(Clone)]
pub struct ActivityService<P, A>
where
    P: ProjectRepository,
    A: ActivityRepository,
{
    projects: Arc<P>,
    activity: Arc<A>,
}

impl<P, A> ActivityService<P, A>
where
    P: ProjectRepository,
    A: ActivityRepository,
{
    /// Creates a new activity feed service.
    #[must_use]
    pub const fn new(projects: Arc<P>, activity: Arc<A>) -> Self {
        Self { projects, activity }
    }

    /// Returns the full feed for one project, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ProjectNotFound`] when the project does not
    /// exist and [`AccessError::NotAuthorized`] when the caller is not a
    /// member.
    pub async fn project_feed(
        &self,
        project_id: ProjectId,
        caller: UserId,
    ) -> ActivityFeedResult<Vec<ActivityEvent>> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(AccessError::ProjectNotFound(project_id))?;
        if !project.is_member(caller) {
            return Err(AccessError::NotAuthorized {
                user: caller,
                project: project_id,
            }
            .into());
        }

        let mut events = self.activity.list_by_project(project_id).await?;
        feed::sort_newest_first(&mut events);
        Ok(events)
    }
}
