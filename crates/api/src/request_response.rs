// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Enum values travel as their
//! upper-case names (`ASSIGNED_TO_MANAGER`, `PENDING_ACCEPTANCE`, `VIP`).

use elegant_events_audit::AuditEvent;
use elegant_events_domain::{DirectoryUser, Task, Wedding, WeddingAssignment, format_due_date};
use serde::{Deserialize, Serialize};
use time::macros::format_description;

/// Read model of a wedding assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInfo {
    pub assignment_id: Option<i64>,
    pub wedding_id: i64,
    pub couple_identity: String,
    pub manager_identity: Option<String>,
    pub protocol_identity: Option<String>,
    pub protocol_job: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub protocol_rating: Option<u8>,
    pub protocol_feedback: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<&WeddingAssignment> for AssignmentInfo {
    fn from(assignment: &WeddingAssignment) -> Self {
        Self {
            assignment_id: assignment.assignment_id,
            wedding_id: assignment.wedding_id,
            couple_identity: assignment.couple_identity.value().to_string(),
            manager_identity: assignment
                .manager_identity
                .as_ref()
                .map(ToString::to_string),
            protocol_identity: assignment
                .protocol_identity
                .as_ref()
                .map(ToString::to_string),
            protocol_job: assignment.protocol_job.clone(),
            status: assignment.status.as_str().to_string(),
            notes: assignment.notes.clone(),
            protocol_rating: assignment.protocol_rating.map(|r| r.value()),
            protocol_feedback: assignment.protocol_feedback.clone(),
            created_at: assignment.created_at.clone(),
            updated_at: assignment.updated_at.clone(),
        }
    }
}

/// Read model of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub task_id: Option<i64>,
    pub wedding_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub category: String,
    pub assigned_role: Option<String>,
    pub assigned_protocol_id: Option<i64>,
    /// `YYYY-MM-DDTHH:MM:SS`, UTC when the caller supplied an offset.
    pub due_date: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: Option<String>,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.task_id,
            wedding_id: task.wedding_id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            category: task.category.as_str().to_string(),
            assigned_role: task.assigned_role.clone(),
            assigned_protocol_id: task.assigned_protocol_id,
            due_date: task.due_date.and_then(|d| format_due_date(d).ok()),
            rejection_reason: task.rejection_reason.clone(),
            created_at: task.created_at.clone(),
        }
    }
}

/// Read model of a directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: Option<i64>,
    pub identity: String,
    pub display_name: String,
    pub role: String,
}

impl From<&DirectoryUser> for UserInfo {
    fn from(user: &DirectoryUser) -> Self {
        Self {
            user_id: user.user_id,
            identity: user.identity.value().to_string(),
            display_name: user.display_name.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}

/// Read model of a wedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingInfo {
    pub wedding_id: Option<i64>,
    pub couple_identity: String,
    pub partners_name: Option<String>,
    /// `YYYY-MM-DD`.
    pub wedding_date: Option<String>,
}

impl From<&Wedding> for WeddingInfo {
    fn from(wedding: &Wedding) -> Self {
        Self {
            wedding_id: wedding.wedding_id,
            couple_identity: wedding.couple_identity.value().to_string(),
            partners_name: wedding.partners_name.clone(),
            wedding_date: wedding
                .wedding_date
                .and_then(|d| d.format(format_description!("[year]-[month]-[day]")).ok()),
        }
    }
}

/// Read model of an audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEventInfo {
    pub event_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub before_snapshot: String,
    pub after_snapshot: String,
    pub wedding_id: i64,
    pub task_id: Option<i64>,
}

impl From<&AuditEvent> for AuditEventInfo {
    fn from(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action_name: event.action.name.clone(),
            action_details: event.action.details.clone(),
            before_snapshot: event.before.data.clone(),
            after_snapshot: event.after.data.clone(),
            wedding_id: event.subject.wedding_id,
            task_id: event.subject.task_id,
        }
    }
}

/// Envelope returned by every assignment mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AssignmentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssignmentResponse {
    #[must_use]
    pub fn ok(assignment: &WeddingAssignment) -> Self {
        Self {
            success: true,
            assignment: Some(assignment.into()),
            error: None,
        }
    }
}

/// Envelope returned by every task mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskResponse {
    #[must_use]
    pub fn ok(task: &Task) -> Self {
        Self {
            success: true,
            task: Some(task.into()),
            error: None,
        }
    }
}

/// Envelope returned by task deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskResponse {
    pub success: bool,
    pub task_id: i64,
    /// False when no task had the id. Deleting a missing task still succeeds.
    pub deleted: bool,
}

/// Envelope returned by directory registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// Envelope returned by wedding registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingResponse {
    pub success: bool,
    pub wedding: WeddingInfo,
}

/// Optional body of the wedding completion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteWeddingRequest {
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Body of the task creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub wedding_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub assigned_role: Option<String>,
    #[serde(default)]
    pub assigned_protocol_id: Option<i64>,
    /// ISO-8601 offset date-time, or a local date-time.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Body of the task rejection request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectTaskRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of the generic task status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: String,
}

/// Body of the directory user registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub identity: String,
    pub display_name: String,
    pub role: String,
}

/// Body of the wedding registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWeddingRequest {
    pub couple_identity: String,
    #[serde(default)]
    pub partners_name: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub wedding_date: Option<String>,
}
