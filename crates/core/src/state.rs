// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use elegant_events_audit::{AuditEvent, StateSnapshot};
use elegant_events_domain::{Identity, Task, WeddingAssignment};

/// The stored assignment after a successful command, with its audit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTransition {
    pub assignment: WeddingAssignment,
    pub audit_event: AuditEvent,
}

/// The stored task after a successful command, with its audit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTransition {
    pub task: Task,
    pub audit_event: AuditEvent,
    /// True when the status change left the documented task lifecycle.
    pub outside_lifecycle: bool,
}

pub(crate) fn snapshot_assignment(assignment: &WeddingAssignment) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={} manager={} protocol={} job={} rating={}",
        assignment.status,
        display_or_none(assignment.manager_identity.as_ref().map(Identity::value)),
        display_or_none(assignment.protocol_identity.as_ref().map(Identity::value)),
        display_or_none(assignment.protocol_job.as_deref()),
        assignment
            .protocol_rating
            .map_or_else(|| String::from("none"), |r| r.value().to_string()),
    ))
}

pub(crate) fn snapshot_task(task: &Task) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={} category={} protocol_id={} rejection_reason={}",
        task.status,
        task.category,
        task.assigned_protocol_id
            .map_or_else(|| String::from("none"), |id| id.to_string()),
        display_or_none(task.rejection_reason.as_deref()),
    ))
}

fn display_or_none(value: Option<&str>) -> &str {
    value.unwrap_or("none")
}
