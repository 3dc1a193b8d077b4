//! In-memory adapters for the activity context.

mod event;

pub use event::InMemoryActivityRepository;
