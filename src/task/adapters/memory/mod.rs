//! In-memory adapters for the task context.

mod comment;
mod task;

pub use comment::InMemoryCommentRepository;
pub use task::InMemoryTaskRepository;
