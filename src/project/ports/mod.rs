//! Port contracts for project and user persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;

pub use repository::{
    ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, UserRepository,
    UserRepositoryError, UserRepositoryResult,
};
