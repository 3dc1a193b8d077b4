//! Derived view types served to the presentation layer.
//!
//! Field names serialize in camelCase and timestamps as epoch milliseconds,
//! matching what the dashboard UI consumes. Every counting map is a struct
//! with one field per key, so zero-filled keys are present by construction.

use crate::activity::domain::EventId;
use crate::project::domain::UserId;
use crate::task::domain::{TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Task counts per status, all four statuses always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Tasks in `todo`.
    pub todo: usize,
    /// Tasks in `in_progress`.
    pub in_progress: usize,
    /// Tasks in `review`.
    pub review: usize,
    /// Tasks in `completed`.
    pub completed: usize,
}

impl StatusCounts {
    /// Increments the counter for one status.
    pub const fn increment(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Todo => self.todo += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Review => self.review += 1,
            TaskStatus::Completed => self.completed += 1,
        }
    }

    /// Returns the counter for one status.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Review => self.review,
            TaskStatus::Completed => self.completed,
        }
    }

    /// Returns the sum over all statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.todo + self.in_progress + self.review + self.completed
    }
}

/// Task counts per priority, all three priorities always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    /// Low-priority tasks.
    pub low: usize,
    /// Medium-priority tasks.
    pub medium: usize,
    /// High-priority tasks.
    pub high: usize,
}

impl PriorityCounts {
    /// Increments the counter for one priority.
    pub const fn increment(&mut self, priority: TaskPriority) {
        match priority {
            TaskPriority::Low => self.low += 1,
            TaskPriority::Medium => self.medium += 1,
            TaskPriority::High => self.high += 1,
        }
    }

    /// Returns the counter for one priority.
    #[must_use]
    pub const fn get(&self, priority: TaskPriority) -> usize {
        match priority {
            TaskPriority::Low => self.low,
            TaskPriority::Medium => self.medium,
            TaskPriority::High => self.high,
        }
    }

    /// Returns the sum over all priorities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Aggregate time-tracking figures, in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TimeTracking {
    /// Sum of estimates over tasks with an estimate.
    pub estimated: f64,
    /// Sum of recorded actuals over tasks with one.
    pub actual: f64,
    /// `actual - estimated`; positive means the work ran over.
    pub variance: f64,
}

/// Activity volume for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    /// Start of the UTC day.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Events created during that day.
    pub count: usize,
}

/// Completed-task tally for one project member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProductivity {
    /// Member identifier.
    pub user_id: UserId,
    /// Member display name.
    pub name: String,
    /// Informational role.
    pub role: String,
    /// Tasks assigned to the member that are completed.
    pub completed_tasks: usize,
}

/// Per-project analytics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalytics {
    /// Number of tasks in the project.
    pub total_tasks: usize,
    /// Rounded percentage of completed tasks, 0 for an empty project.
    pub completion_rate: u8,
    /// Tasks past due and not completed.
    pub overdue_tasks: usize,
    /// Per-status counts, zero-filled.
    pub status_counts: StatusCounts,
    /// Per-priority counts, zero-filled.
    pub priority_counts: PriorityCounts,
    /// Events in the trailing seven-day window.
    pub recent_activity_count: usize,
    /// Aggregate time tracking.
    pub time_tracking: TimeTracking,
    /// Exactly seven entries, oldest day first, newest day last.
    pub activity_by_day: Vec<DayActivity>,
    /// One entry per member, in member-list order.
    pub member_productivity: Vec<MemberProductivity>,
}

/// One of the caller's next due tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingTask {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Due date.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub due_date: DateTime<Utc>,
    /// Task priority.
    pub priority: TaskPriority,
}

/// One activity feed entry, annotated with its project's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Event identifier.
    pub id: EventId,
    /// Human-readable description.
    pub description: String,
    /// Name of the owning project.
    pub project_name: String,
    /// Event creation time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Cross-project personal dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDashboard {
    /// Projects the caller is a member of.
    pub total_projects: usize,
    /// Tasks assigned to the caller across those projects.
    pub total_assigned_tasks: usize,
    /// Assigned tasks past due and not completed.
    pub overdue_tasks: usize,
    /// Assigned tasks due within the next seven days.
    pub tasks_due_this_week: usize,
    /// Assigned-task counts per status, zero-filled.
    pub my_task_status: StatusCounts,
    /// Next due tasks, ascending by due date, at most five.
    pub upcoming_tasks: Vec<UpcomingTask>,
    /// Newest events across accessible projects, at most five.
    pub recent_activity: Vec<ActivityEntry>,
}
