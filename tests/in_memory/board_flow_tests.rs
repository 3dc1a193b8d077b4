//! End-to-end kanban flows over the in-memory stack.
//!
//! Covers project setup, task lifecycle, board reads, and the project
//! activity feed as one continuous scenario per test.

use crate::in_memory::helpers::{runtime, stack, Stack};
use rstest::rstest;
use std::io;
use taskflow::activity::services::ActivityFeedError;
use taskflow::project::domain::AccessError;
use taskflow::task::domain::TaskStatus;
use taskflow::task::services::{CreateTaskRequest, TaskBoardError};
use tokio::runtime::Runtime;

#[rstest]
fn full_board_lifecycle(runtime: io::Result<Runtime>, stack: Stack) {
    let rt = runtime.expect("runtime creation");
    let alice = stack.register_user(&rt, "Alice", "alice@example.com", "engineer");
    let bob = stack.register_user(&rt, "Bob", "bob@example.com", "designer");

    let project = rt
        .block_on(stack.projects.create_project("Apollo", "Launch readiness", alice))
        .expect("project created");
    rt.block_on(stack.projects.add_member(project.id(), bob, alice))
        .expect("member added");

    let design = rt
        .block_on(stack.board.create_task(
            CreateTaskRequest::new(project.id(), "Design the board")
                .with_assignee(bob)
                .with_priority("high"),
            alice,
        ))
        .expect("task created");
    let wiring = rt
        .block_on(stack.board.create_task(
            CreateTaskRequest::new(project.id(), "Wire the services"),
            alice,
        ))
        .expect("task created");

    rt.block_on(stack.board.update_status(design.id(), "in_progress", bob))
        .expect("status updated");
    rt.block_on(stack.board.add_comment(design.id(), "Mockups attached", bob))
        .expect("comment added");
    rt.block_on(stack.board.update_status(wiring.id(), "completed", alice))
        .expect("status updated");

    let board = rt
        .block_on(stack.board.board(project.id(), bob))
        .expect("board read");
    assert_eq!(board.len(), 2);
    assert_eq!(board.column(TaskStatus::InProgress).len(), 1);
    assert_eq!(board.column(TaskStatus::Completed).len(), 1);
    let card = board
        .column(TaskStatus::InProgress)
        .first()
        .expect("card present");
    assert_eq!(card.task.title(), "Design the board");
    assert_eq!(card.comment_count, 1);

    let feed = rt
        .block_on(stack.feed.project_feed(project.id(), alice))
        .expect("feed read");
    let descriptions: Vec<_> = feed.iter().map(|event| event.description()).collect();
    assert_eq!(descriptions.len(), 6);
    assert!(descriptions.contains(&"Alice created project Apollo"));
    assert!(descriptions.contains(&"Alice added Bob to Apollo"));
    assert!(descriptions.contains(&"Bob commented on Design the board"));
    assert!(descriptions.contains(&"Alice changed status of Wire the services to completed"));
    assert!(feed.windows(2).all(|pair| {
        pair.first()
            .zip(pair.get(1))
            .is_some_and(|(newer, older)| newer.created_at() >= older.created_at())
    }));
}

#[rstest]
fn outsiders_are_denied_every_project_surface(runtime: io::Result<Runtime>, stack: Stack) {
    let rt = runtime.expect("runtime creation");
    let alice = stack.register_user(&rt, "Alice", "alice@example.com", "engineer");
    let mallory = stack.register_user(&rt, "Mallory", "mallory@example.com", "visitor");

    let project = rt
        .block_on(stack.projects.create_project("Apollo", "", alice))
        .expect("project created");

    let board = rt.block_on(stack.board.board(project.id(), mallory));
    assert!(matches!(
        board,
        Err(TaskBoardError::Access(AccessError::NotAuthorized { .. }))
    ));

    let create = rt.block_on(
        stack
            .board
            .create_task(CreateTaskRequest::new(project.id(), "Sneaky"), mallory),
    );
    assert!(matches!(
        create,
        Err(TaskBoardError::Access(AccessError::NotAuthorized { .. }))
    ));

    let feed = rt.block_on(stack.feed.project_feed(project.id(), mallory));
    assert!(matches!(
        feed,
        Err(ActivityFeedError::Access(AccessError::NotAuthorized { .. }))
    ));

    let listed = rt
        .block_on(stack.projects.projects_for_user(mallory))
        .expect("projects listed");
    assert!(listed.is_empty());
}

#[rstest]
fn failed_mutations_leave_the_feed_untouched(runtime: io::Result<Runtime>, stack: Stack) {
    let rt = runtime.expect("runtime creation");
    let alice = stack.register_user(&rt, "Alice", "alice@example.com", "engineer");

    let project = rt
        .block_on(stack.projects.create_project("Apollo", "", alice))
        .expect("project created");
    let before = rt
        .block_on(stack.feed.project_feed(project.id(), alice))
        .expect("feed read");

    let blank = rt.block_on(
        stack
            .board
            .create_task(CreateTaskRequest::new(project.id(), "   "), alice),
    );
    assert!(blank.is_err());
    let bad_priority = rt.block_on(stack.board.create_task(
        CreateTaskRequest::new(project.id(), "Prioritized").with_priority("urgent"),
        alice,
    ));
    assert!(bad_priority.is_err());

    let after = rt
        .block_on(stack.feed.project_feed(project.id(), alice))
        .expect("feed read");
    assert_eq!(before.len(), after.len());
}
