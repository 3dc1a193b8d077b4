//! Shared test helpers for in-memory service integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use taskflow::activity::adapters::memory::InMemoryActivityRepository;
use taskflow::activity::services::ActivityService;
use taskflow::analytics::services::AnalyticsService;
use taskflow::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryUserRepository},
    domain::{User, UserId},
    ports::UserRepository,
    services::ProjectService,
};
use taskflow::task::{
    adapters::memory::{InMemoryCommentRepository, InMemoryTaskRepository},
    services::TaskBoardService,
};
use tokio::runtime::Runtime;

/// The full service stack wired over shared in-memory repositories.
pub struct Stack {
    /// Project lifecycle service.
    pub projects: ProjectService<
        InMemoryProjectRepository,
        InMemoryUserRepository,
        InMemoryActivityRepository,
        DefaultClock,
    >,
    /// Kanban board service.
    pub board: TaskBoardService<
        InMemoryTaskRepository,
        InMemoryCommentRepository,
        InMemoryProjectRepository,
        InMemoryUserRepository,
        InMemoryActivityRepository,
        DefaultClock,
    >,
    /// Analytics read service.
    pub analytics: AnalyticsService<
        InMemoryTaskRepository,
        InMemoryProjectRepository,
        InMemoryUserRepository,
        InMemoryActivityRepository,
        DefaultClock,
    >,
    /// Project activity feed service.
    pub feed: ActivityService<InMemoryProjectRepository, InMemoryActivityRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl Stack {
    /// Registers a user directly in the shared user repository.
    ///
    /// # Panics
    ///
    /// Panics if the store operation fails.
    pub fn register_user(&self, rt: &Runtime, name: &str, email: &str, role: &str) -> UserId {
        let user = User::new(name, email, role);
        rt.block_on(self.users.store(&user)).expect("user stored");
        user.id()
    }
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh service stack for each test.
#[fixture]
pub fn stack() -> Stack {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let comments = Arc::new(InMemoryCommentRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let activity = Arc::new(InMemoryActivityRepository::new());
    let clock = Arc::new(DefaultClock);

    Stack {
        projects: ProjectService::new(
            Arc::clone(&projects),
            Arc::clone(&users),
            Arc::clone(&activity),
            Arc::clone(&clock),
        ),
        board: TaskBoardService::new(
            Arc::clone(&tasks),
            comments,
            Arc::clone(&projects),
            Arc::clone(&users),
            Arc::clone(&activity),
            Arc::clone(&clock),
        ),
        analytics: AnalyticsService::new(
            tasks,
            Arc::clone(&projects),
            Arc::clone(&users),
            Arc::clone(&activity),
            clock,
        ),
        feed: ActivityService::new(projects, activity),
        users,
    }
}
