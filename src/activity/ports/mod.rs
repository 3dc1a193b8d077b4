//! Port contracts for activity event storage.

pub mod repository;

pub use repository::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult};
