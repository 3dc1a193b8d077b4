//! End-to-end analytics and dashboard flows over the in-memory stack.

use crate::in_memory::helpers::{runtime, stack, Stack};
use chrono::{TimeDelta, Utc};
use rstest::rstest;
use std::io;
use taskflow::analytics::services::AnalyticsError;
use taskflow::project::domain::{AccessError, ProjectId};
use taskflow::task::services::CreateTaskRequest;
use tokio::runtime::Runtime;

#[rstest]
fn project_analytics_reflects_board_activity(runtime: io::Result<Runtime>, stack: Stack) {
    let rt = runtime.expect("runtime creation");
    let alice = stack.register_user(&rt, "Alice", "alice@example.com", "engineer");
    let bob = stack.register_user(&rt, "Bob", "bob@example.com", "designer");

    let project = rt
        .block_on(stack.projects.create_project("Apollo", "", alice))
        .expect("project created");
    rt.block_on(stack.projects.add_member(project.id(), bob, alice))
        .expect("member added");

    let shipped = rt
        .block_on(stack.board.create_task(
            CreateTaskRequest::new(project.id(), "Shipped")
                .with_assignee(bob)
                .with_priority("high")
                .with_estimated_hours(10.0),
            alice,
        ))
        .expect("task created");
    rt.block_on(stack.board.update_status(shipped.id(), "completed", bob))
        .expect("status updated");
    rt.block_on(stack.board.record_actual_hours(shipped.id(), 14.0, bob))
        .expect("hours recorded");
    let overdue = rt
        .block_on(stack.board.create_task(
            CreateTaskRequest::new(project.id(), "Slipping")
                .with_due_date(Utc::now() - TimeDelta::days(2)),
            alice,
        ))
        .expect("task created");
    rt.block_on(stack.board.update_status(overdue.id(), "in_progress", alice))
        .expect("status updated");

    let analytics = rt
        .block_on(stack.analytics.project_analytics(project.id(), alice))
        .expect("analytics read");

    assert_eq!(analytics.total_tasks, 2);
    assert_eq!(analytics.completion_rate, 50);
    assert_eq!(analytics.overdue_tasks, 1);
    assert_eq!(analytics.status_counts.completed, 1);
    assert_eq!(analytics.status_counts.in_progress, 1);
    assert_eq!(analytics.priority_counts.high, 1);
    assert_eq!(analytics.priority_counts.medium, 1);
    assert_eq!(analytics.time_tracking.estimated, 10.0);
    assert_eq!(analytics.time_tracking.actual, 14.0);
    assert_eq!(analytics.time_tracking.variance, 4.0);
    // Project creation, member addition, and five task mutations all
    // happened within the trailing week.
    assert_eq!(analytics.recent_activity_count, 7);
    assert_eq!(analytics.activity_by_day.len(), 7);
    let bucketed: usize = analytics.activity_by_day.iter().map(|day| day.count).sum();
    assert_eq!(bucketed, 7);

    let productivity = &analytics.member_productivity;
    assert_eq!(productivity.len(), 2);
    assert_eq!(productivity.first().map(|m| m.user_id), Some(alice));
    assert_eq!(
        productivity.iter().map(|m| m.completed_tasks).sum::<usize>(),
        1
    );
}

#[rstest]
fn dashboard_aggregates_across_projects(runtime: io::Result<Runtime>, stack: Stack) {
    let rt = runtime.expect("runtime creation");
    let alice = stack.register_user(&rt, "Alice", "alice@example.com", "engineer");
    let bob = stack.register_user(&rt, "Bob", "bob@example.com", "designer");

    let apollo = rt
        .block_on(stack.projects.create_project("Apollo", "", alice))
        .expect("project created");
    rt.block_on(stack.projects.add_member(apollo.id(), bob, alice))
        .expect("member added");
    let borealis = rt
        .block_on(stack.projects.create_project("Borealis", "", bob))
        .expect("project created");

    rt.block_on(stack.board.create_task(
        CreateTaskRequest::new(apollo.id(), "Apollo work")
            .with_assignee(bob)
            .with_due_date(Utc::now() + TimeDelta::days(1)),
        alice,
    ))
    .expect("task created");
    rt.block_on(stack.board.create_task(
        CreateTaskRequest::new(borealis.id(), "Borealis work").with_assignee(bob),
        bob,
    ))
    .expect("task created");
    // Assigned to Alice, so it never shows on Bob's dashboard.
    rt.block_on(stack.board.create_task(
        CreateTaskRequest::new(apollo.id(), "Alice's own").with_assignee(alice),
        alice,
    ))
    .expect("task created");

    let dashboard = rt
        .block_on(stack.analytics.user_dashboard(bob))
        .expect("dashboard read");

    assert_eq!(dashboard.total_projects, 2);
    assert_eq!(dashboard.total_assigned_tasks, 2);
    assert_eq!(dashboard.tasks_due_this_week, 1);
    assert_eq!(dashboard.my_task_status.todo, 2);
    assert_eq!(dashboard.upcoming_tasks.len(), 1);
    assert_eq!(
        dashboard.upcoming_tasks.first().map(|task| task.title.as_str()),
        Some("Apollo work")
    );
    assert_eq!(dashboard.recent_activity.len(), 5);
    let names: Vec<_> = dashboard
        .recent_activity
        .iter()
        .map(|entry| entry.project_name.as_str())
        .collect();
    assert!(names.iter().all(|name| *name == "Apollo" || *name == "Borealis"));
}

#[rstest]
fn analytics_requires_membership(runtime: io::Result<Runtime>, stack: Stack) {
    let rt = runtime.expect("runtime creation");
    let alice = stack.register_user(&rt, "Alice", "alice@example.com", "engineer");
    let mallory = stack.register_user(&rt, "Mallory", "mallory@example.com", "visitor");

    let project = rt
        .block_on(stack.projects.create_project("Apollo", "", alice))
        .expect("project created");

    let denied = rt.block_on(stack.analytics.project_analytics(project.id(), mallory));
    assert!(matches!(
        denied,
        Err(AnalyticsError::Access(AccessError::NotAuthorized { .. }))
    ));

    let missing = rt.block_on(stack.analytics.project_analytics(ProjectId::new(), alice));
    assert!(matches!(
        missing,
        Err(AnalyticsError::Access(AccessError::ProjectNotFound(_)))
    ));
}
