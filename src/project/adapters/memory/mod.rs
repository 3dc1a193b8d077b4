//! In-memory adapters for the project context.

mod project;
mod user;

pub use project::InMemoryProjectRepository;
pub use user::InMemoryUserRepository;
