// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every mutation applies a core command against the persistence adapter,
//! records the resulting audit event fire-and-forget, and returns the
//! success envelope. Reads return the read model directly and report absence
//! as `ApiError::ResourceNotFound`.

use elegant_events::{
    AssignmentCommand, AssignmentTransition, TaskCommand, TaskTransition, apply_assignment,
    apply_task, resolve_actor,
};
use elegant_events_audit::{Actor, Cause};
use elegant_events_domain::{DomainError, Identity, Role};
use elegant_events_persistence::{Persistence, PersistenceError};
use time::Date;
use time::macros::format_description;
use tracing::{info, warn};

use crate::audit_sink::record_audit_event;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AssignmentInfo, AssignmentResponse, AuditEventInfo, CompleteWeddingRequest, CreateTaskRequest,
    DeleteTaskResponse, RegisterUserRequest, RegisterWeddingRequest, RejectTaskRequest, TaskInfo,
    TaskResponse, UpdateTaskStatusRequest, UserInfo, UserResponse, WeddingInfo, WeddingResponse,
};

fn storage_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

fn run_assignment(
    persistence: &mut Persistence,
    command: AssignmentCommand,
    cause: Cause,
) -> Result<AssignmentResponse, ApiError> {
    let AssignmentTransition {
        assignment,
        audit_event,
    } = apply_assignment(persistence, command, cause).map_err(translate_core_error)?;
    record_audit_event(persistence, &audit_event);
    Ok(AssignmentResponse::ok(&assignment))
}

fn task_actor(
    persistence: &mut Persistence,
    acting_identity: Option<&str>,
) -> Result<Actor, ApiError> {
    let acting: Option<Identity> = acting_identity.map(Identity::new);
    resolve_actor(persistence, acting.as_ref()).map_err(translate_core_error)
}

fn run_task(
    persistence: &mut Persistence,
    command: TaskCommand,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<TaskResponse, ApiError> {
    let actor = task_actor(persistence, acting_identity)?;
    let TaskTransition {
        task,
        audit_event,
        outside_lifecycle,
    } = apply_task(persistence, command, actor, cause).map_err(translate_core_error)?;

    if outside_lifecycle {
        warn!(
            task_id = ?task.task_id,
            status = %task.status,
            details = ?audit_event.action.details,
            "Task status changed outside the documented lifecycle"
        );
    }
    record_audit_event(persistence, &audit_event);
    Ok(TaskResponse::ok(&task))
}

// ============================================================================
// Assignments
// ============================================================================

/// Assigns (or re-assigns) a manager to a wedding.
///
/// # Errors
///
/// Returns an error if:
/// - `admin_identity` is not an admin (`Unauthorized`)
/// - `manager_identity` is unknown (`ResourceNotFound`) or not a manager (`InvalidInput`)
/// - The wedding does not exist (`ResourceNotFound`)
/// - The assignment is already completed (`InvalidInput`)
pub fn assign_manager(
    persistence: &mut Persistence,
    wedding_id: i64,
    manager_identity: &str,
    admin_identity: &str,
    cause: Cause,
) -> Result<AssignmentResponse, ApiError> {
    let response = run_assignment(
        persistence,
        AssignmentCommand::AssignManager {
            wedding_id,
            manager: Identity::new(manager_identity),
            acting_admin: Identity::new(admin_identity),
        },
        cause,
    )?;
    info!(wedding_id, manager = manager_identity, "Assigned manager to wedding");
    Ok(response)
}

/// Delegates a wedding to a protocol officer.
///
/// # Errors
///
/// Returns an error if:
/// - `manager_identity` is not a manager (`Unauthorized`)
/// - `protocol_identity` is unknown or not a protocol officer
/// - No assignment with a manager exists (`ResourceNotFound`)
/// - `manager_identity` is not the manager on record (`Forbidden`)
pub fn assign_protocol(
    persistence: &mut Persistence,
    wedding_id: i64,
    protocol_identity: &str,
    manager_identity: &str,
    protocol_job: Option<String>,
    cause: Cause,
) -> Result<AssignmentResponse, ApiError> {
    let response = run_assignment(
        persistence,
        AssignmentCommand::AssignProtocol {
            wedding_id,
            protocol: Identity::new(protocol_identity),
            acting_manager: Identity::new(manager_identity),
            protocol_job,
        },
        cause,
    )?;
    info!(wedding_id, protocol = protocol_identity, "Assigned protocol officer to wedding");
    Ok(response)
}

/// Completes a wedding and rates its protocol officer.
///
/// # Errors
///
/// Returns an error if:
/// - No assignment exists (`ResourceNotFound`)
/// - `manager_identity` is not the manager on record (`Forbidden`)
/// - `rating` is outside 1 through 5 (`InvalidInput`)
/// - The assignment is already completed (`InvalidInput`)
pub fn complete_wedding(
    persistence: &mut Persistence,
    wedding_id: i64,
    manager_identity: &str,
    rating: i64,
    request: CompleteWeddingRequest,
    cause: Cause,
) -> Result<AssignmentResponse, ApiError> {
    let response = run_assignment(
        persistence,
        AssignmentCommand::Complete {
            wedding_id,
            acting_manager: Identity::new(manager_identity),
            rating,
            feedback: request.feedback,
        },
        cause,
    )?;
    info!(wedding_id, rating, "Completed wedding");
    Ok(response)
}

/// Lists every assignment.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the query fails.
pub fn list_assignments(persistence: &mut Persistence) -> Result<Vec<AssignmentInfo>, ApiError> {
    let assignments = persistence.get_all_assignments().map_err(storage_error)?;
    Ok(assignments.iter().map(AssignmentInfo::from).collect())
}

/// Lists the assignments a manager holds.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the query fails.
pub fn assignments_for_manager(
    persistence: &mut Persistence,
    manager_identity: &str,
) -> Result<Vec<AssignmentInfo>, ApiError> {
    let assignments = persistence
        .get_assignments_for_manager(manager_identity)
        .map_err(storage_error)?;
    Ok(assignments.iter().map(AssignmentInfo::from).collect())
}

/// Lists the assignments delegated to a protocol officer.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the query fails.
pub fn assignments_for_protocol(
    persistence: &mut Persistence,
    protocol_identity: &str,
) -> Result<Vec<AssignmentInfo>, ApiError> {
    let assignments = persistence
        .get_assignments_for_protocol(protocol_identity)
        .map_err(storage_error)?;
    Ok(assignments.iter().map(AssignmentInfo::from).collect())
}

/// Returns the assignment for a wedding.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the wedding has no assignment.
pub fn assignment_for_wedding(
    persistence: &mut Persistence,
    wedding_id: i64,
) -> Result<AssignmentInfo, ApiError> {
    persistence
        .get_assignment_by_wedding(wedding_id)
        .map_err(storage_error)?
        .map(|a| AssignmentInfo::from(&a))
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Wedding assignment"),
            message: format!("No assignment found for wedding {wedding_id}"),
        })
}

/// Returns the assignment for a couple.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the couple has no assignment.
pub fn assignment_for_couple(
    persistence: &mut Persistence,
    couple_identity: &str,
) -> Result<AssignmentInfo, ApiError> {
    persistence
        .get_assignment_by_couple(couple_identity)
        .map_err(storage_error)?
        .map(|a| AssignmentInfo::from(&a))
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Wedding assignment"),
            message: format!("No assignment found for couple '{couple_identity}'"),
        })
}

/// Returns the audit trail of a wedding, assignment and task events alike.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the wedding does not exist.
pub fn wedding_audit_trail(
    persistence: &mut Persistence,
    wedding_id: i64,
) -> Result<Vec<AuditEventInfo>, ApiError> {
    if persistence
        .get_wedding(wedding_id)
        .map_err(storage_error)?
        .is_none()
    {
        return Err(translate_domain_error(DomainError::WeddingNotFound(
            wedding_id,
        )));
    }
    let events = persistence
        .get_audit_events_for_wedding(wedding_id)
        .map_err(storage_error)?;
    Ok(events.iter().map(AuditEventInfo::from).collect())
}

// ============================================================================
// Tasks
// ============================================================================

/// Creates a task for a wedding.
///
/// # Errors
///
/// Returns an error if:
/// - The due date cannot be parsed (`InvalidInput`)
/// - The wedding or the delegated protocol user does not exist (`ResourceNotFound`)
pub fn create_task(
    persistence: &mut Persistence,
    request: CreateTaskRequest,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<TaskResponse, ApiError> {
    let wedding_id = request.wedding_id;
    let response = run_task(
        persistence,
        TaskCommand::Create {
            wedding_id,
            title: request.title,
            description: request.description,
            category: request.category,
            assigned_role: request.assigned_role,
            assigned_protocol_id: request.assigned_protocol_id,
            due_date: request.due_date,
        },
        acting_identity,
        cause,
    )?;
    info!(
        wedding_id,
        task_id = ?response.task.as_ref().and_then(|t| t.task_id),
        "Created task"
    );
    Ok(response)
}

/// Accepts a task and clears any rejection reason.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the task does not exist.
pub fn accept_task(
    persistence: &mut Persistence,
    task_id: i64,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<TaskResponse, ApiError> {
    run_task(
        persistence,
        TaskCommand::Accept { task_id },
        acting_identity,
        cause,
    )
}

/// Rejects a task, recording the reason.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the task does not exist.
pub fn reject_task(
    persistence: &mut Persistence,
    task_id: i64,
    request: RejectTaskRequest,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<TaskResponse, ApiError> {
    run_task(
        persistence,
        TaskCommand::Reject {
            task_id,
            reason: request.reason,
        },
        acting_identity,
        cause,
    )
}

/// Completes a task.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the task does not exist.
pub fn complete_task(
    persistence: &mut Persistence,
    task_id: i64,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<TaskResponse, ApiError> {
    run_task(
        persistence,
        TaskCommand::Complete { task_id },
        acting_identity,
        cause,
    )
}

/// Sets a task status by name, bypassing the lifecycle.
///
/// # Errors
///
/// Returns an error if:
/// - The status is not a task status (`InvalidInput`); the task is unchanged
/// - The task does not exist (`ResourceNotFound`)
pub fn update_task_status(
    persistence: &mut Persistence,
    task_id: i64,
    request: UpdateTaskStatusRequest,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<TaskResponse, ApiError> {
    run_task(
        persistence,
        TaskCommand::UpdateStatus {
            task_id,
            status: request.status,
        },
        acting_identity,
        cause,
    )
}

/// Deletes a task. Deleting a missing task succeeds.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the delete fails.
pub fn delete_task(
    persistence: &mut Persistence,
    task_id: i64,
    acting_identity: Option<&str>,
    cause: Cause,
) -> Result<DeleteTaskResponse, ApiError> {
    let actor = task_actor(persistence, acting_identity)?;
    let event = elegant_events::delete_task(persistence, task_id, actor, cause)
        .map_err(translate_core_error)?;

    let deleted = event.is_some();
    if let Some(event) = event {
        record_audit_event(persistence, &event);
    }
    info!(task_id, deleted, "Handled task delete");
    Ok(DeleteTaskResponse {
        success: true,
        task_id,
        deleted,
    })
}

/// Lists a wedding's tasks.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the query fails.
pub fn tasks_for_wedding(
    persistence: &mut Persistence,
    wedding_id: i64,
) -> Result<Vec<TaskInfo>, ApiError> {
    let tasks = persistence
        .get_tasks_for_wedding(wedding_id)
        .map_err(storage_error)?;
    Ok(tasks.iter().map(TaskInfo::from).collect())
}

/// Lists the tasks delegated to a protocol user id.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the query fails.
pub fn tasks_for_protocol(
    persistence: &mut Persistence,
    protocol_user_id: i64,
) -> Result<Vec<TaskInfo>, ApiError> {
    let tasks = persistence
        .get_tasks_for_protocol(protocol_user_id)
        .map_err(storage_error)?;
    Ok(tasks.iter().map(TaskInfo::from).collect())
}

// ============================================================================
// Directory
// ============================================================================

/// Registers a directory user.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the identity is blank or taken, or the
/// role is unknown.
pub fn register_user(
    persistence: &mut Persistence,
    request: RegisterUserRequest,
) -> Result<UserResponse, ApiError> {
    let role: Role = request.role.parse().map_err(translate_domain_error)?;
    let user = elegant_events::register_user(
        persistence,
        &request.identity,
        request.display_name,
        role,
    )
    .map_err(translate_core_error)?;

    info!(identity = %user.identity, role = %user.role, "Registered user");
    Ok(UserResponse {
        success: true,
        user: UserInfo::from(&user),
    })
}

/// Looks up a directory user.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no user has the identity.
pub fn get_user(persistence: &mut Persistence, identity: &str) -> Result<UserInfo, ApiError> {
    persistence
        .get_user_by_identity(identity)
        .map_err(storage_error)?
        .map(|u| UserInfo::from(&u))
        .ok_or_else(|| translate_domain_error(DomainError::UserNotFound(identity.to_string())))
}

/// Registers a wedding for a couple already in the directory.
///
/// # Errors
///
/// Returns an error if the couple is unknown, already has a wedding, or the
/// date is not `YYYY-MM-DD`.
pub fn register_wedding(
    persistence: &mut Persistence,
    request: RegisterWeddingRequest,
) -> Result<WeddingResponse, ApiError> {
    let wedding_date: Option<Date> = request
        .wedding_date
        .as_deref()
        .map(|d| Date::parse(d, format_description!("[year]-[month]-[day]")))
        .transpose()
        .map_err(|e| ApiError::InvalidInput {
            field: String::from("weddingDate"),
            message: format!("Invalid wedding date: {e}"),
        })?;

    let wedding = elegant_events::register_wedding(
        persistence,
        &Identity::new(&request.couple_identity),
        request.partners_name,
        wedding_date,
    )
    .map_err(translate_core_error)?;

    info!(wedding_id = ?wedding.wedding_id, couple = %wedding.couple_identity, "Registered wedding");
    Ok(WeddingResponse {
        success: true,
        wedding: WeddingInfo::from(&wedding),
    })
}

/// Looks up a wedding.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the wedding does not exist.
pub fn get_wedding(persistence: &mut Persistence, wedding_id: i64) -> Result<WeddingInfo, ApiError> {
    persistence
        .get_wedding(wedding_id)
        .map_err(storage_error)?
        .map(|w| WeddingInfo::from(&w))
        .ok_or_else(|| translate_domain_error(DomainError::WeddingNotFound(wedding_id)))
}
