//! Caller-facing analytics and dashboard reads.
//!
//! Every read assembles a fresh snapshot from the repositories and
//! recomputes the view; nothing is materialized or cached here. Change
//! notification, if any, is an external concern layered over the entity
//! store.

use crate::activity::ports::{ActivityRepository, ActivityRepositoryError};
use crate::analytics::{
    metrics,
    views::{ProjectAnalytics, UserDashboard},
};
use crate::project::{
    domain::{AccessError, ProjectId, UserId},
    ports::{
        ProjectRepository, ProjectRepositoryError, UserRepository, UserRepositoryError,
    },
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for analytics reads.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The caller failed the membership check.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Project lookup failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Event lookup failed.
    #[error(transparent)]
    Activity(#[from] ActivityRepositoryError),
}

/// Result type for analytics service operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Analytics and dashboard read service.
#[derive(Clone)]
pub struct AnalyticsService<T, P, U, A, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    users: Arc<U>,
    activity: Arc<A>,
    clock: Arc<C>,
}

impl<T, P, U, A, C> AnalyticsService<T, P, U, A, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new analytics service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        projects: Arc<P>,
        users: Arc<U>,
        activity: Arc<A>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            projects,
            users,
            activity,
            clock,
        }
    }

    /// Computes the analytics view for one project.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ProjectNotFound`] when the project does not
    /// exist and [`AccessError::NotAuthorized`] when the caller is not a
    /// member.
    pub async fn project_analytics(
        &self,
        project_id: ProjectId,
        caller: UserId,
    ) -> AnalyticsResult<ProjectAnalytics> {
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

        let tasks = self.tasks.find_by_project(project_id).await?;
        let events = self.activity.list_by_project(project_id).await?;
        let members = self.users.find_by_ids(project.member_ids()).await?;
        Ok(metrics::project_analytics(
            &tasks,
            &events,
            &members,
            self.clock.utc(),
        ))
    }

    /// Computes the caller's cross-project dashboard.
    ///
    /// Always succeeds for a resolved caller; a caller with no projects gets
    /// a zero-filled view.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] only when a repository lookup fails.
    pub async fn user_dashboard(&self, caller: UserId) -> AnalyticsResult<UserDashboard> {
        let projects = self.projects.find_by_member(caller).await?;
        let project_ids: Vec<ProjectId> = projects.iter().map(|project| project.id()).collect();

        let assigned_tasks: Vec<_> = self
            .tasks
            .find_by_assignee(caller)
            .await?
            .into_iter()
            .filter(|task| project_ids.contains(&task.project_id()))
            .collect();
        let events = self.activity.list_by_projects(&project_ids).await?;

        Ok(metrics::user_dashboard(
            caller,
            &projects,
            &assigned_tasks,
            &events,
            self.clock.utc(),
        ))
    }
}
