//! Pure ordering and filtering over activity events.
//!
//! Events are facts; the feed never deduplicates or merges them. Callers
//! decide truncation: the dashboard keeps the newest five, the project-level
//! view is unbounded.

use crate::activity::domain::ActivityEvent;
use crate::project::domain::ProjectId;
use std::cmp::Reverse;

/// Sorts events newest first.
///
/// Ordering is total: events created at the same instant are ordered by
/// event id, so feed order is stable across calls for the same input.
pub fn sort_newest_first(events: &mut [ActivityEvent]) {
    events.sort_by_key(|event| (Reverse(event.created_at()), event.id()));
}

/// Keeps only events belonging to one of the given projects, preserving
/// input order.
#[must_use]
pub fn restrict_to_projects(
    events: Vec<ActivityEvent>,
    project_ids: &[ProjectId],
) -> Vec<ActivityEvent> {
    events
        .into_iter()
        .filter(|event| project_ids.contains(&event.project_id()))
        .collect()
}

/// Returns the `limit` newest events, newest first.
#[must_use]
pub fn newest(mut events: Vec<ActivityEvent>, limit: usize) -> Vec<ActivityEvent> {
    sort_newest_first(&mut events);
    events.truncate(limit);
    events
}
