//! Pure snapshot aggregation.
//!
//! Every function here is deterministic given its inputs: aggregation reads
//! an immutable snapshot plus an explicit `now` and computes a view, with no
//! clock, storage, or shared state behind it. All calendar-day bucketing
//! uses UTC day boundaries; rolling windows (`recent_activity_count`, the
//! due-this-week count) are plain duration arithmetic from `now`.

use crate::activity::{domain::ActivityEvent, feed};
use crate::project::domain::{Project, User, UserId};
use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Days, NaiveTime, TimeDelta, Utc};

use super::views::{
    ActivityEntry, DayActivity, MemberProductivity, PriorityCounts, ProjectAnalytics,
    StatusCounts, TimeTracking, UpcomingTask, UserDashboard,
};

/// Number of upcoming tasks shown on the dashboard.
pub const UPCOMING_TASKS_LIMIT: usize = 5;

/// Number of feed entries shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Days covered by the activity-by-day chart and the rolling windows.
pub const WINDOW_DAYS: i64 = 7;

/// Computes the per-project analytics view from a project snapshot.
///
/// `members` must be the project's members in member-list order; the
/// productivity section preserves that order, which keeps it stable across
/// calls for the same snapshot.
#[must_use]
pub fn project_analytics(
    tasks: &[Task],
    events: &[ActivityEvent],
    members: &[User],
    now: DateTime<Utc>,
) -> ProjectAnalytics {
    let mut status_counts = StatusCounts::default();
    let mut priority_counts = PriorityCounts::default();
    let mut overdue_tasks = 0;
    for task in tasks {
        status_counts.increment(task.status());
        priority_counts.increment(task.priority());
        if task.is_overdue(now) {
            overdue_tasks += 1;
        }
    }

    let window_start = now - week();
    let recent_activity_count = events
        .iter()
        .filter(|event| event.created_at() >= window_start)
        .count();

    ProjectAnalytics {
        total_tasks: tasks.len(),
        completion_rate: completion_rate(status_counts.completed, tasks.len()),
        overdue_tasks,
        status_counts,
        priority_counts,
        recent_activity_count,
        time_tracking: time_tracking(tasks),
        activity_by_day: activity_by_day(events, now),
        member_productivity: member_productivity(tasks, members),
    }
}

/// Computes the cross-project dashboard for one user.
///
/// `projects` are the user's accessible projects, `assigned_tasks` the tasks
/// assigned to the user within them, and `events` the activity of all
/// accessible projects. A user with no projects gets a zero-filled view.
#[must_use]
pub fn user_dashboard(
    user_id: UserId,
    projects: &[Project],
    assigned_tasks: &[Task],
    events: &[ActivityEvent],
    now: DateTime<Utc>,
) -> UserDashboard {
    debug_assert!(
        assigned_tasks
            .iter()
            .all(|task| task.assignee_id() == Some(user_id)),
        "dashboard snapshot must only contain the user's assigned tasks"
    );

    let mut my_task_status = StatusCounts::default();
    let mut overdue_tasks = 0;
    let mut tasks_due_this_week = 0;
    let week_end = now + week();
    for task in assigned_tasks {
        my_task_status.increment(task.status());
        if task.is_overdue(now) {
            overdue_tasks += 1;
        }
        if task
            .due_date()
            .is_some_and(|due| due >= now && due < week_end)
        {
            tasks_due_this_week += 1;
        }
    }

    UserDashboard {
        total_projects: projects.len(),
        total_assigned_tasks: assigned_tasks.len(),
        overdue_tasks,
        tasks_due_this_week,
        my_task_status,
        upcoming_tasks: upcoming_tasks(assigned_tasks),
        recent_activity: recent_activity(projects, events),
    }
}

/// Rounded completion percentage; 0 when there are no tasks.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = completed as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

fn time_tracking(tasks: &[Task]) -> TimeTracking {
    let estimated: f64 = tasks.iter().filter_map(Task::estimated_hours).sum();
    let actual: f64 = tasks.iter().filter_map(Task::actual_hours).sum();
    TimeTracking {
        estimated,
        actual,
        variance: actual - estimated,
    }
}

/// Buckets events into the last seven UTC calendar days, oldest first.
///
/// The newest bucket is the UTC day containing `now`; the result always has
/// exactly seven entries regardless of how many events exist.
fn activity_by_day(events: &[ActivityEvent], now: DateTime<Utc>) -> Vec<DayActivity> {
    let today = now.date_naive();
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let day = today - Days::new(offset.unsigned_abs());
            let count = events
                .iter()
                .filter(|event| event.created_at().date_naive() == day)
                .count();
            DayActivity {
                date: day.and_time(NaiveTime::MIN).and_utc(),
                count,
            }
        })
        .collect()
}

fn member_productivity(tasks: &[Task], members: &[User]) -> Vec<MemberProductivity> {
    members
        .iter()
        .map(|member| {
            let completed_tasks = tasks
                .iter()
                .filter(|task| {
                    task.status() == TaskStatus::Completed
                        && task.assignee_id() == Some(member.id())
                })
                .count();
            MemberProductivity {
                user_id: member.id(),
                name: member.display_name().to_owned(),
                role: member.role().to_owned(),
                completed_tasks,
            }
        })
        .collect()
}

fn upcoming_tasks(assigned_tasks: &[Task]) -> Vec<UpcomingTask> {
    let mut upcoming: Vec<&Task> = assigned_tasks
        .iter()
        .filter(|task| task.status() != TaskStatus::Completed && task.due_date().is_some())
        .collect();
    upcoming.sort_by_key(|task| (task.due_date(), task.id()));
    upcoming
        .into_iter()
        .take(UPCOMING_TASKS_LIMIT)
        .filter_map(|task| {
            task.due_date().map(|due_date| UpcomingTask {
                id: task.id(),
                title: task.title().to_owned(),
                due_date,
                priority: task.priority(),
            })
        })
        .collect()
}

fn recent_activity(projects: &[Project], events: &[ActivityEvent]) -> Vec<ActivityEntry> {
    feed::newest(events.to_vec(), RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(|event| {
            let project_name = projects
                .iter()
                .find(|project| project.id() == event.project_id())
                .map_or_else(String::new, |project| project.name().to_owned());
            ActivityEntry {
                id: event.id(),
                description: event.description().to_owned(),
                project_name,
                created_at: event.created_at(),
            }
        })
        .collect()
}

fn week() -> TimeDelta {
    TimeDelta::days(WINDOW_DAYS)
}
