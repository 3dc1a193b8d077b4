//! Service layer for project creation, membership, and accessible-project
//! queries.

use crate::activity::{
    domain::ActivityEvent,
    ports::{ActivityRepository, ActivityRepositoryError},
};
use crate::project::{
    domain::{AccessError, Project, ProjectDomainError, ProjectId, User, UserId},
    ports::{
        ProjectRepository, ProjectRepositoryError, UserRepository, UserRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The caller failed an access check.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Activity append failed.
    #[error(transparent)]
    Activity(#[from] ActivityRepositoryError),
    /// A referenced user does not exist.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
}

/// Result type for project lifecycle service operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectService<P, U, A, C>
where
    P: ProjectRepository,
    U: UserRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    users: Arc<U>,
    activity: Arc<A>,
    clock: Arc<C>,
}

impl<P, U, A, C> ProjectService<P, U, A, C>
where
    P: ProjectRepository,
    U: UserRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(projects: Arc<P>, users: Arc<U>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            projects,
            users,
            activity,
            clock,
        }
    }

    /// Creates a project owned by the caller and records the creation event.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] for a blank name and
    /// [`ProjectLifecycleError::UnknownUser`] when the caller cannot be
    /// resolved.
    pub async fn create_project(
        &self,
        name: impl Into<String> + Send,
        description: impl Into<String> + Send,
        caller: UserId,
    ) -> ProjectLifecycleResult<Project> {
        let actor = self.resolve_user(caller).await?;
        let project = Project::new(name, description, caller, &*self.clock)?;
        self.projects.store(&project).await?;

        let description = format!("{} created project {}", actor.display_name(), project.name());
        let event = ActivityEvent::new(project.id(), description, &*self.clock);
        self.activity.append(&event).await?;
        Ok(project)
    }

    /// Adds a user to a project's member list.
    ///
    /// Only the project owner may add members. Adding an existing member is
    /// a no-op and records no event.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the project is missing or the caller is
    /// not the owner, and [`ProjectLifecycleError::UnknownUser`] when the new
    /// member cannot be resolved.
    pub async fn add_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        caller: UserId,
    ) -> ProjectLifecycleResult<Project> {
        let mut project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(AccessError::ProjectNotFound(project_id))?;
        if project.owner_id() != caller {
            return Err(AccessError::NotAuthorized {
                user: caller,
                project: project_id,
            }
            .into());
        }
        let actor = self.resolve_user(caller).await?;
        let member = self.resolve_user(user_id).await?;

        if !project.add_member(user_id) {
            return Ok(project);
        }
        self.projects.update(&project).await?;

        let description = format!(
            "{} added {} to {}",
            actor.display_name(),
            member.display_name(),
            project.name()
        );
        let event = ActivityEvent::new(project_id, description, &*self.clock);
        self.activity.append(&event).await?;
        Ok(project)
    }

    /// Returns every project the caller is a member of, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the lookup fails.
    pub async fn projects_for_user(&self, caller: UserId) -> ProjectLifecycleResult<Vec<Project>> {
        Ok(self.projects.find_by_member(caller).await?)
    }

    async fn resolve_user(&self, id: UserId) -> ProjectLifecycleResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(ProjectLifecycleError::UnknownUser(id))
    }
}
