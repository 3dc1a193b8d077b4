//! Application services for project lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{ProjectLifecycleError, ProjectLifecycleResult, ProjectService};
