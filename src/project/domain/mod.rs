//! Domain model for projects, users, and membership-based access control.
//!
//! Projects own their member list; every authorization decision in the crate
//! reduces to "is the caller in this project's member list". Infrastructure
//! concerns stay outside the domain boundary.

mod error;
mod ids;
mod project;
mod user;

pub use error::{AccessError, ProjectDomainError};
pub use ids::{ProjectId, UserId};
pub use project::{PersistedProjectData, Project};
pub use user::User;
