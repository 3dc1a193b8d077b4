//! Domain model for the activity context.

mod event;

pub use event::{ActivityEvent, EventId};
