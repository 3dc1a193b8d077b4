//! Service layer for task creation, status movement, board reads, and
//! comments.

use crate::activity::{
    domain::ActivityEvent,
    ports::{ActivityRepository, ActivityRepositoryError},
};
use crate::project::{
    domain::{AccessError, Project, ProjectId, User, UserId},
    ports::{
        ProjectRepository, ProjectRepositoryError, UserRepository, UserRepositoryError,
    },
};
use crate::task::{
    domain::{
        self, Comment, NewTaskData, Task, TaskDomainError, TaskId, TaskPriority, TaskStatus,
    },
    ports::{
        CommentRepository, CommentRepositoryError, TaskRepository, TaskRepositoryError,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee_id: Option<UserId>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: Option<f64>,
    tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            assignee_id: None,
            priority: None,
            due_date: None,
            estimated_hours: None,
            tags: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the priority from its storage string (`low`/`medium`/`high`).
    ///
    /// Left unset, the task defaults to medium.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the estimate in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Sets the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// One task on the board, annotated with its comment count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCard {
    /// The task itself.
    pub task: Task,
    /// Number of comments on the task.
    pub comment_count: usize,
}

/// A project's board: four status columns of annotated cards, in task
/// creation order within each column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardView {
    /// Cards in `todo`.
    pub todo: Vec<BoardCard>,
    /// Cards in `in_progress`.
    pub in_progress: Vec<BoardCard>,
    /// Cards in `review`.
    pub review: Vec<BoardCard>,
    /// Cards in `completed`.
    pub completed: Vec<BoardCard>,
}

impl BoardView {
    /// Returns the column for one status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[BoardCard] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Review => &self.review,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Returns the total number of cards across all columns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.review.len() + self.completed.len()
    }

    /// Returns whether the board holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The caller failed an access check.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Comment repository operation failed.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),
    /// Project lookup failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Activity append failed.
    #[error(transparent)]
    Activity(#[from] ActivityRepositoryError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// A referenced user does not exist.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Kanban board orchestration service.
///
/// Every operation takes the resolved caller identity explicitly and checks
/// project membership before touching any state. Validation runs before any
/// write: a rejected request persists nothing and records no activity.
#[derive(Clone)]
pub struct TaskBoardService<T, Cm, P, U, A, C>
where
    T: TaskRepository,
    Cm: CommentRepository,
    P: ProjectRepository,
    U: UserRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    comments: Arc<Cm>,
    projects: Arc<P>,
    users: Arc<U>,
    activity: Arc<A>,
    clock: Arc<C>,
}

impl<T, Cm, P, U, A, C> TaskBoardService<T, Cm, P, U, A, C>
where
    T: TaskRepository,
    Cm: CommentRepository,
    P: ProjectRepository,
    U: UserRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        comments: Arc<Cm>,
        projects: Arc<P>,
        users: Arc<U>,
        activity: Arc<A>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            comments,
            projects,
            users,
            activity,
            clock,
        }
    }

    /// Creates a task in the requested project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank title,
    /// [`TaskDomainError::InvalidPriority`] for an unrecognized priority
    /// string, [`TaskDomainError::AssigneeNotMember`] when the assignee is
    /// not a project member, and [`AccessError`] when the project is missing
    /// or the caller is not a member.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        caller: UserId,
    ) -> TaskBoardResult<Task> {
        let project = self.authorized_project(request.project_id, caller).await?;
        let actor = self.resolve_user(caller).await?;

        let priority = match request.priority.as_deref() {
            Some(raw) => TaskPriority::try_from(raw).map_err(TaskBoardError::Domain)?,
            None => TaskPriority::default(),
        };
        if let Some(assignee_id) = request.assignee_id
            && !project.is_member(assignee_id)
        {
            return Err(TaskDomainError::AssigneeNotMember {
                assignee: assignee_id,
                project: project.id(),
            }
            .into());
        }

        let task = Task::new(
            NewTaskData {
                project_id: request.project_id,
                title: request.title,
                description: request.description,
                priority,
                assignee_id: request.assignee_id,
                due_date: request.due_date,
                estimated_hours: request.estimated_hours,
                tags: request.tags,
                creator_id: caller,
            },
            &*self.clock,
        )?;
        self.tasks.store(&task).await?;

        self.record_event(
            project.id(),
            format!("{} created task {}", actor.display_name(), task.title()),
        )
        .await?;
        Ok(task)
    }

    /// Moves a task to the status named by `status`.
    ///
    /// Any recognized status is a valid target, including the task's current
    /// one; each call bumps the task's last-modified timestamp and records
    /// one activity event.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] for an unrecognized status
    /// string, [`TaskBoardError::TaskNotFound`] for a missing task, and
    /// [`AccessError::NotAuthorized`] when the caller is not a member of the
    /// task's project.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        status: &str,
        caller: UserId,
    ) -> TaskBoardResult<Task> {
        let new_status = TaskStatus::try_from(status).map_err(TaskBoardError::Domain)?;
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskBoardError::TaskNotFound(task_id))?;
        let _ = self.authorized_project(task.project_id(), caller).await?;
        let actor = self.resolve_user(caller).await?;

        task.set_status(new_status, &*self.clock);
        self.tasks.update(&task).await?;

        self.record_event(
            task.project_id(),
            format!(
                "{} changed status of {} to {}",
                actor.display_name(),
                task.title(),
                new_status.as_str()
            ),
        )
        .await?;
        Ok(task)
    }

    /// Records hours actually spent on a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidHours`] for a negative or
    /// non-finite value, plus the usual lookup and access errors.
    pub async fn record_actual_hours(
        &self,
        task_id: TaskId,
        hours: f64,
        caller: UserId,
    ) -> TaskBoardResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskBoardError::TaskNotFound(task_id))?;
        let _ = self.authorized_project(task.project_id(), caller).await?;
        let actor = self.resolve_user(caller).await?;

        task.record_actual_hours(hours, &*self.clock)?;
        self.tasks.update(&task).await?;

        self.record_event(
            task.project_id(),
            format!(
                "{} logged {hours}h on {}",
                actor.display_name(),
                task.title()
            ),
        )
        .await?;
        Ok(task)
    }

    /// Adds a comment to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentBody`] for a blank body, plus
    /// the usual lookup and access errors.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        body: impl Into<String> + Send,
        caller: UserId,
    ) -> TaskBoardResult<Comment> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskBoardError::TaskNotFound(task_id))?;
        let _ = self.authorized_project(task.project_id(), caller).await?;
        let actor = self.resolve_user(caller).await?;

        let comment = Comment::new(task_id, caller, body, &*self.clock)?;
        self.comments.store(&comment).await?;

        self.record_event(
            task.project_id(),
            format!("{} commented on {}", actor.display_name(), task.title()),
        )
        .await?;
        Ok(comment)
    }

    /// Returns the project's board grouped by status, each card annotated
    /// with its comment count.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the project is missing or the caller is
    /// not a member.
    pub async fn board(&self, project_id: ProjectId, caller: UserId) -> TaskBoardResult<BoardView> {
        let _ = self.authorized_project(project_id, caller).await?;
        let tasks = self.tasks.find_by_project(project_id).await?;
        let grouped = domain::group_by_status(tasks);

        let mut view = BoardView::default();
        for status in TaskStatus::ALL {
            for task in grouped.bucket(status) {
                let comment_count = self.comments.count_by_task(task.id()).await?;
                let card = BoardCard {
                    task: task.clone(),
                    comment_count,
                };
                match status {
                    TaskStatus::Todo => view.todo.push(card),
                    TaskStatus::InProgress => view.in_progress.push(card),
                    TaskStatus::Review => view.review.push(card),
                    TaskStatus::Completed => view.completed.push(card),
                }
            }
        }
        Ok(view)
    }

    async fn authorized_project(
        &self,
        project_id: ProjectId,
        caller: UserId,
    ) -> TaskBoardResult<Project> {
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
        Ok(project)
    }

    async fn resolve_user(&self, id: UserId) -> TaskBoardResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(TaskBoardError::UnknownUser(id))
    }

    async fn record_event(
        &self,
        project_id: ProjectId,
        description: String,
    ) -> TaskBoardResult<()> {
        let event = ActivityEvent::new(project_id, description, &*self.clock);
        self.activity.append(&event).await?;
        Ok(())
    }
}
