//! Service orchestration tests for project lifecycle operations.

use std::sync::Arc;

use crate::activity::adapters::memory::InMemoryActivityRepository;
use crate::activity::ports::ActivityRepository;
use crate::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryUserRepository},
    domain::{AccessError, Project, ProjectDomainError, ProjectId, User, UserId},
    ports::UserRepository,
    services::{ProjectLifecycleError, ProjectService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = ProjectService<
    InMemoryProjectRepository,
    InMemoryUserRepository,
    InMemoryActivityRepository,
    DefaultClock,
>;

struct Harness {
    service: TestService,
    activity: Arc<InMemoryActivityRepository>,
    alice: UserId,
    bob: UserId,
}

#[fixture]
async fn harness() -> Harness {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let activity = Arc::new(InMemoryActivityRepository::new());

    let alice = User::new("Alice", "alice@example.com", "engineer");
    let bob = User::new("Bob", "bob@example.com", "designer");
    let alice_id = alice.id();
    let bob_id = bob.id();
    for user in [&alice, &bob] {
        users.store(user).await.expect("user stored");
    }

    let service = ProjectService::new(projects, users, Arc::clone(&activity), Arc::new(DefaultClock));
    Harness {
        service,
        activity,
        alice: alice_id,
        bob: bob_id,
    }
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn create_project_stores_and_emits_event(#[future] harness: Harness) {
    let project = harness
        .service
        .create_project("Apollo", "Launch readiness", harness.alice)
        .await
        .expect("project created");

    assert_eq!(project.owner_id(), harness.alice);
    assert_eq!(project.member_ids(), [harness.alice]);
    let listed = harness
        .service
        .projects_for_user(harness.alice)
        .await
        .expect("projects listed");
    assert_eq!(listed, [project.clone()]);
    let events = harness
        .activity
        .list_by_project(project.id())
        .await
        .expect("events listed");
    assert_eq!(
        events.first().map(|event| event.description()),
        Some("Alice created project Apollo")
    );
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn create_project_rejects_blank_name(#[future] harness: Harness) {
    let result = harness.service.create_project("  ", "", harness.alice).await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::Domain(ProjectDomainError::EmptyName))
    ));
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn create_project_rejects_unknown_caller(#[future] harness: Harness) {
    let stranger = UserId::new();

    let result = harness.service.create_project("Apollo", "", stranger).await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::UnknownUser(id)) if id == stranger
    ));
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_grants_access_and_emits_event(#[future] harness: Harness) {
    let project = harness
        .service
        .create_project("Apollo", "", harness.alice)
        .await
        .expect("project created");

    let updated = harness
        .service
        .add_member(project.id(), harness.bob, harness.alice)
        .await
        .expect("member added");

    assert_eq!(updated.member_ids(), [harness.alice, harness.bob]);
    let listed = harness
        .service
        .projects_for_user(harness.bob)
        .await
        .expect("projects listed");
    assert_eq!(listed.len(), 1);
    let events = harness
        .activity
        .list_by_project(project.id())
        .await
        .expect("events listed");
    assert_eq!(
        events.last().map(|event| event.description()),
        Some("Alice added Bob to Apollo")
    );
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_twice_is_a_silent_no_op(#[future] harness: Harness) {
    let project = harness
        .service
        .create_project("Apollo", "", harness.alice)
        .await
        .expect("project created");

    for _ in 0..2 {
        harness
            .service
            .add_member(project.id(), harness.bob, harness.alice)
            .await
            .expect("member added");
    }

    let events = harness
        .activity
        .list_by_project(project.id())
        .await
        .expect("events listed");
    let additions = events
        .iter()
        .filter(|event| event.description().contains("added"))
        .count();
    assert_eq!(additions, 1);
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_requires_ownership(#[future] harness: Harness) {
    let project = harness
        .service
        .create_project("Apollo", "", harness.alice)
        .await
        .expect("project created");
    harness
        .service
        .add_member(project.id(), harness.bob, harness.alice)
        .await
        .expect("member added");

    let result = harness
        .service
        .add_member(project.id(), UserId::new(), harness.bob)
        .await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::Access(AccessError::NotAuthorized { .. }))
    ));
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_rejects_missing_project(#[future] harness: Harness) {
    let result = harness
        .service
        .add_member(ProjectId::new(), harness.bob, harness.alice)
        .await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::Access(AccessError::ProjectNotFound(_)))
    ));
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread")]
async fn projects_for_user_excludes_other_projects(#[future] harness: Harness) {
    harness
        .service
        .create_project("Apollo", "", harness.alice)
        .await
        .expect("project created");
    harness
        .service
        .create_project("Borealis", "", harness.bob)
        .await
        .expect("project created");

    let listed = harness
        .service
        .projects_for_user(harness.bob)
        .await
        .expect("projects listed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(Project::name), Some("Borealis"));
}
