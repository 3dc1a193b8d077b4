//! Error types for project domain validation and access control.

use super::ids::{ProjectId, UserId};
use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,
}

/// Errors returned when a caller cannot act on a project.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The caller is not a member of the project.
    #[error("user {user} is not a member of project {project}")]
    NotAuthorized {
        /// Caller identity that failed the membership check.
        user: UserId,
        /// Project the caller attempted to act on.
        project: ProjectId,
    },
}
