//! Shared builders for deterministic analytics snapshots.

use crate::activity::domain::{ActivityEvent, EventId};
use crate::project::domain::{ProjectId, UserId};
use crate::task::domain::{PersistedTaskData, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed reference instant used as `now` throughout the analytics tests.
pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Baseline persisted task; tests override individual fields before
/// reconstructing the aggregate.
pub fn persisted_task(project_id: ProjectId) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::new(),
        project_id,
        title: "task".to_owned(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        assignee_id: None,
        due_date: None,
        estimated_hours: None,
        actual_hours: None,
        tags: Vec::new(),
        creator_id: UserId::new(),
        created_at: noon(),
        updated_at: noon(),
    }
}

/// Event with a fixed timestamp.
pub fn event_at(project_id: ProjectId, created_at: DateTime<Utc>) -> ActivityEvent {
    ActivityEvent::from_persisted(
        EventId::new(),
        project_id,
        "updated the board".to_owned(),
        created_at,
    )
}
