// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task coordination.
//!
//! The dedicated accept/reject/complete commands and the generic status
//! override are all permissive: none of them refuses an edge outside the
//! documented lifecycle. Such edges are flagged on the returned
//! [`TaskTransition`] and in the audit action details instead.

use crate::command::TaskCommand;
use crate::error::CoreError;
use crate::state::{TaskTransition, snapshot_task};
use crate::store::{IdentityDirectory, TaskRepository, WeddingRegistry};
use elegant_events_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot, Subject};
use elegant_events_domain::{
    DomainError, Task, TaskCategory, TaskStatus, parse_due_date,
};

/// Marker appended to audit details for edges outside the task lifecycle.
pub const OUTSIDE_LIFECYCLE: &str = "outside_lifecycle";

/// Applies a task command and stores the result.
///
/// # Errors
///
/// Returns an error if:
/// - The due date cannot be parsed (`InvalidDueDate`)
/// - The wedding, delegated user, or task does not exist
/// - A status name is not a task status (`InvalidTaskStatus`); the task is left unchanged
pub fn apply_task<S>(
    store: &mut S,
    command: TaskCommand,
    actor: Actor,
    cause: Cause,
) -> Result<TaskTransition, CoreError>
where
    S: IdentityDirectory + WeddingRegistry + TaskRepository + ?Sized,
{
    match command {
        TaskCommand::Create {
            wedding_id,
            title,
            description,
            category,
            assigned_role,
            assigned_protocol_id,
            due_date,
        } => {
            let due_date = due_date.as_deref().map(parse_due_date).transpose()?;
            if store.find_wedding(wedding_id)?.is_none() {
                return Err(DomainError::WeddingNotFound(wedding_id).into());
            }
            if let Some(user_id) = assigned_protocol_id
                && store.find_user_by_id(user_id)?.is_none()
            {
                return Err(DomainError::UserIdNotFound(user_id).into());
            }

            let task = Task::new(
                wedding_id,
                title,
                description,
                TaskCategory::parse_lenient(category.as_deref()),
                assigned_role,
                assigned_protocol_id,
                due_date,
            );
            let stored = store.save_task(&task)?;
            let task_id = stored.task_id.unwrap_or_default();
            let details = format!(
                "Created task {task_id} '{}' in status {}",
                stored.title, stored.status
            );
            let audit_event = AuditEvent::new(
                actor,
                cause,
                Action::new(String::from("CreateTask"), Some(details)),
                StateSnapshot::absent(),
                snapshot_task(&stored),
                Subject::task(wedding_id, task_id),
            );
            Ok(TaskTransition {
                task: stored,
                audit_event,
                outside_lifecycle: false,
            })
        }
        TaskCommand::Accept { task_id } => {
            let task = load_task(store, task_id)?;
            transition(store, task_id, task, "AcceptTask", actor, cause, Task::accept)
        }
        TaskCommand::Reject { task_id, reason } => {
            let task = load_task(store, task_id)?;
            transition(store, task_id, task, "RejectTask", actor, cause, |task| {
                task.reject(reason);
            })
        }
        TaskCommand::Complete { task_id } => {
            let task = load_task(store, task_id)?;
            transition(store, task_id, task, "CompleteTask", actor, cause, Task::complete)
        }
        TaskCommand::UpdateStatus { task_id, status } => {
            // A missing task is reported before a bad status name.
            let task = load_task(store, task_id)?;
            let status: TaskStatus = status.parse()?;
            transition(store, task_id, task, "UpdateTaskStatus", actor, cause, |task| {
                task.override_status(status);
            })
        }
    }
}

/// Deletes a task by id.
///
/// Deleting a missing task succeeds. An audit event is only produced when
/// the task existed.
///
/// # Errors
///
/// Returns `CoreError::Storage` if the lookup or delete fails.
pub fn delete_task<S>(
    store: &mut S,
    task_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<Option<AuditEvent>, CoreError>
where
    S: TaskRepository + ?Sized,
{
    let existing = store.find_task(task_id)?;
    store.delete_task(task_id)?;

    Ok(existing.map(|task| {
        AuditEvent::new(
            actor,
            cause,
            Action::new(
                String::from("DeleteTask"),
                Some(format!("Deleted task {task_id} '{}'", task.title)),
            ),
            snapshot_task(&task),
            StateSnapshot::absent(),
            Subject::task(task.wedding_id, task_id),
        )
    }))
}

fn load_task<S>(store: &mut S, task_id: i64) -> Result<Task, CoreError>
where
    S: TaskRepository + ?Sized,
{
    Ok(store
        .find_task(task_id)?
        .ok_or(DomainError::TaskNotFound(task_id))?)
}

fn transition<S, F>(
    store: &mut S,
    task_id: i64,
    mut task: Task,
    action_name: &str,
    actor: Actor,
    cause: Cause,
    mutate: F,
) -> Result<TaskTransition, CoreError>
where
    S: TaskRepository + ?Sized,
    F: FnOnce(&mut Task),
{
    let before = snapshot_task(&task);
    let from = task.status;
    mutate(&mut task);
    let to = task.status;
    let outside_lifecycle = !from.is_lifecycle_edge(to);

    let stored = store.save_task(&task)?;
    let mut details = format!("Task {task_id}: {from} -> {to}");
    if outside_lifecycle {
        details.push_str(" (");
        details.push_str(OUTSIDE_LIFECYCLE);
        details.push(')');
    }
    if let Some(reason) = stored.rejection_reason.as_deref()
        && to == TaskStatus::Rejected
    {
        details.push_str(": ");
        details.push_str(reason);
    }

    let audit_event = AuditEvent::new(
        actor,
        cause,
        Action::new(action_name.to_string(), Some(details)),
        before,
        snapshot_task(&stored),
        Subject::task(stored.wedding_id, task_id),
    );
    Ok(TaskTransition {
        task: stored,
        audit_event,
        outside_lifecycle,
    })
}
