// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    MemoryStore, create_seeded_store, create_test_actor, create_test_cause, user_id,
};
use crate::{
    CoreError, OUTSIDE_LIFECYCLE, TaskCommand, TaskRepository, TaskTransition, apply_task,
    delete_task,
};
use elegant_events_audit::Actor;
use elegant_events_domain::{
    DomainError, ErrorKind, Identity, TaskCategory, TaskStatus, WeddingAssignment,
};
use time::macros::datetime;

fn create(store: &mut MemoryStore, protocol_id: Option<i64>) -> TaskTransition {
    apply_task(
        store,
        TaskCommand::Create {
            wedding_id: 42,
            title: String::from("Setup chairs"),
            description: Some(String::from("Two hundred chairs in the garden")),
            category: Some(String::from("logistics")),
            assigned_role: Some(String::from("PROTOCOL")),
            assigned_protocol_id: protocol_id,
            due_date: Some(String::from("2026-06-20T09:00:00")),
        },
        Actor::anonymous(),
        create_test_cause(),
    )
    .unwrap()
}

fn run(store: &mut MemoryStore, command: TaskCommand) -> Result<TaskTransition, CoreError> {
    apply_task(store, command, create_test_actor(), create_test_cause())
}

#[test]
fn test_delegated_task_waits_for_acceptance() {
    let mut store = create_seeded_store();
    let proto = user_id(&store, "proto1");

    let created = create(&mut store, Some(proto));

    assert_eq!(created.task.status, TaskStatus::PendingAcceptance);
    assert_eq!(created.task.category, TaskCategory::Logistics);
    assert_eq!(created.task.due_date, Some(datetime!(2026-06-20 09:00:00)));
    assert_eq!(created.audit_event.action.name, "CreateTask");
    assert_eq!(created.audit_event.subject.task_id, created.task.task_id);
    assert!(created.audit_event.actor.is_anonymous());
}

#[test]
fn test_undelegated_task_is_accepted() {
    let mut store = create_seeded_store();

    let created = create(&mut store, None);

    assert_eq!(created.task.status, TaskStatus::Accepted);
}

#[test]
fn test_unknown_category_falls_back_to_general() {
    let mut store = create_seeded_store();

    let created = run(
        &mut store,
        TaskCommand::Create {
            wedding_id: 42,
            title: String::from("Flowers"),
            description: None,
            category: Some(String::from("floristry")),
            assigned_role: None,
            assigned_protocol_id: None,
            due_date: None,
        },
    )
    .unwrap();

    assert_eq!(created.task.category, TaskCategory::General);
}

#[test]
fn test_create_requires_wedding_and_protocol_user() {
    let mut store = create_seeded_store();

    let missing_wedding = run(
        &mut store,
        TaskCommand::Create {
            wedding_id: 9,
            title: String::from("x"),
            description: None,
            category: None,
            assigned_role: None,
            assigned_protocol_id: None,
            due_date: None,
        },
    );
    assert_eq!(
        missing_wedding,
        Err(CoreError::DomainViolation(DomainError::WeddingNotFound(9)))
    );

    let missing_user = run(
        &mut store,
        TaskCommand::Create {
            wedding_id: 42,
            title: String::from("x"),
            description: None,
            category: None,
            assigned_role: None,
            assigned_protocol_id: Some(9999),
            due_date: None,
        },
    );
    assert_eq!(
        missing_user,
        Err(CoreError::DomainViolation(DomainError::UserIdNotFound(9999)))
    );
    assert!(store.tasks.is_empty());
}

#[test]
fn test_create_rejects_bad_due_date() {
    let mut store = create_seeded_store();

    let result = run(
        &mut store,
        TaskCommand::Create {
            wedding_id: 42,
            title: String::from("x"),
            description: None,
            category: None,
            assigned_role: None,
            assigned_protocol_id: None,
            due_date: Some(String::from("tomorrow-ish")),
        },
    );

    match result {
        Err(CoreError::DomainViolation(err)) => assert_eq!(err.kind(), ErrorKind::InvalidArgument),
        other => panic!("expected invalid argument, got {other:?}"),
    }
}

#[test]
fn test_reject_then_accept_clears_reason() {
    let mut store = create_seeded_store();
    let proto = user_id(&store, "proto1");
    let task_id = create(&mut store, Some(proto)).task.task_id.unwrap();

    let rejected = run(
        &mut store,
        TaskCommand::Reject {
            task_id,
            reason: Some(String::from("too busy")),
        },
    )
    .unwrap();
    assert_eq!(rejected.task.status, TaskStatus::Rejected);
    assert_eq!(rejected.task.rejection_reason.as_deref(), Some("too busy"));
    assert!(!rejected.outside_lifecycle);

    let accepted = run(&mut store, TaskCommand::Accept { task_id }).unwrap();
    assert_eq!(accepted.task.status, TaskStatus::Accepted);
    assert_eq!(accepted.task.rejection_reason, None);
    assert!(!accepted.outside_lifecycle);
}

#[test]
fn test_delegated_task_scenario() {
    let mut store = create_seeded_store();
    let proto = user_id(&store, "proto1");
    let task_id = create(&mut store, Some(proto)).task.task_id.unwrap();

    let accepted = run(&mut store, TaskCommand::Accept { task_id }).unwrap();
    assert_eq!(accepted.task.status, TaskStatus::Accepted);

    let completed = run(&mut store, TaskCommand::Complete { task_id }).unwrap();
    assert_eq!(completed.task.status, TaskStatus::Completed);
    assert!(!completed.outside_lifecycle);
    assert_eq!(store.tasks_for_protocol(proto).unwrap().len(), 1);
}

#[test]
fn test_complete_from_pending_is_allowed_but_flagged() {
    let mut store = create_seeded_store();
    let proto = user_id(&store, "proto1");
    let task_id = create(&mut store, Some(proto)).task.task_id.unwrap();

    let completed = run(&mut store, TaskCommand::Complete { task_id }).unwrap();

    assert_eq!(completed.task.status, TaskStatus::Completed);
    assert!(completed.outside_lifecycle);
    assert!(
        completed
            .audit_event
            .action
            .details
            .unwrap()
            .contains(OUTSIDE_LIFECYCLE)
    );
}

#[test]
fn test_update_status_bypasses_lifecycle() {
    let mut store = create_seeded_store();
    let task_id = create(&mut store, None).task.task_id.unwrap();
    run(&mut store, TaskCommand::Complete { task_id }).unwrap();

    let reopened = run(
        &mut store,
        TaskCommand::UpdateStatus {
            task_id,
            status: String::from("in_progress"),
        },
    )
    .unwrap();

    assert_eq!(reopened.task.status, TaskStatus::InProgress);
    assert!(reopened.outside_lifecycle);
    assert_eq!(reopened.audit_event.action.name, "UpdateTaskStatus");
}

#[test]
fn test_update_status_bogus_leaves_task_unchanged() {
    let mut store = create_seeded_store();
    let created = create(&mut store, None).task;
    let task_id = created.task_id.unwrap();

    let result = run(
        &mut store,
        TaskCommand::UpdateStatus {
            task_id,
            status: String::from("bogus"),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidTaskStatus(
            String::from("bogus")
        )))
    );
    assert_eq!(store.tasks, vec![created]);
}

#[test]
fn test_operations_on_missing_task() {
    let mut store = create_seeded_store();

    for command in [
        TaskCommand::Accept { task_id: 5 },
        TaskCommand::Reject {
            task_id: 5,
            reason: None,
        },
        TaskCommand::Complete { task_id: 5 },
        TaskCommand::UpdateStatus {
            task_id: 5,
            status: String::from("ACCEPTED"),
        },
    ] {
        assert_eq!(
            run(&mut store, command),
            Err(CoreError::DomainViolation(DomainError::TaskNotFound(5)))
        );
    }
}

#[test]
fn test_missing_task_is_reported_before_bad_status() {
    let mut store = create_seeded_store();

    let result = run(
        &mut store,
        TaskCommand::UpdateStatus {
            task_id: 9999,
            status: String::from("bogus"),
        },
    );

    let err = result.unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::TaskNotFound(9999))
    );
    let CoreError::DomainViolation(domain) = err else {
        panic!("expected a domain violation");
    };
    assert_eq!(domain.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_task_is_unconditional() {
    let mut store = create_seeded_store();
    let task_id = create(&mut store, None).task.task_id.unwrap();

    let event = delete_task(&mut store, task_id, create_test_actor(), create_test_cause()).unwrap();
    assert_eq!(event.map(|e| e.action.name), Some(String::from("DeleteTask")));
    assert!(store.tasks.is_empty());

    let repeat = delete_task(&mut store, task_id, create_test_actor(), create_test_cause()).unwrap();
    assert!(repeat.is_none());
}

#[test]
fn test_delete_task_leaves_assignment_alone() {
    let mut store = create_seeded_store();
    store
        .assignments
        .push(WeddingAssignment::pending(42, Identity::new("couple1")));
    let task_id = create(&mut store, None).task.task_id.unwrap();

    delete_task(&mut store, task_id, create_test_actor(), create_test_cause()).unwrap();

    assert_eq!(store.assignments.len(), 1);
}
