//! Port contracts for task and comment persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{
    CommentRepository, CommentRepositoryError, CommentRepositoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};
