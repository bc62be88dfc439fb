// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::authorization::{actor_for, authorize_actor, require_target_role, resolve_actor};
use crate::command::AssignmentCommand;
use crate::error::CoreError;
use crate::state::{AssignmentTransition, snapshot_assignment};
use crate::store::{AssignmentRepository, IdentityDirectory, WeddingRegistry};
use elegant_events_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot, Subject};
use elegant_events_domain::{DomainError, ProtocolRating, Role, WeddingAssignment};

/// Applies an assignment command and stores the result.
///
/// # Arguments
///
/// * `store` - Directory, wedding registry and assignment repository
/// * `command` - The assignment command to apply
/// * `cause` - The request that triggered the command
///
/// # Returns
///
/// * `Ok(AssignmentTransition)` containing the stored assignment and audit event
/// * `Err(CoreError)` if a rule is violated or storage fails
///
/// # Errors
///
/// Returns an error if:
/// - The acting identity is missing or holds the wrong role (`Unauthorized`)
/// - The target identity is unknown (`UserNotFound`) or holds the wrong role (`InvalidRole`)
/// - The wedding or its assignment does not exist (`WeddingNotFound`, `AssignmentNotFound`)
/// - The acting manager does not own the assignment (`NotAssignmentOwner`)
/// - The rating is out of range or the assignment is already completed
#[allow(clippy::too_many_lines)]
pub fn apply_assignment<S>(
    store: &mut S,
    command: AssignmentCommand,
    cause: Cause,
) -> Result<AssignmentTransition, CoreError>
where
    S: IdentityDirectory + WeddingRegistry + AssignmentRepository + ?Sized,
{
    match command {
        AssignmentCommand::AssignManager {
            wedding_id,
            manager,
            acting_admin,
        } => {
            let admin = authorize_actor(store, &acting_admin, Role::Admin)?;
            require_target_role(store, &manager, Role::Manager)?;
            let wedding = store
                .find_wedding(wedding_id)?
                .ok_or(DomainError::WeddingNotFound(wedding_id))?;

            let mut assignment =
                store.get_or_create_assignment(wedding_id, &wedding.couple_identity)?;
            let before = before_snapshot(&assignment);
            let previous_manager = assignment.manager_identity.clone();
            assignment.assign_manager(manager.clone())?;

            let details = previous_manager.map_or_else(
                || format!("Assigned manager '{manager}' to wedding {wedding_id}"),
                |previous| {
                    format!(
                        "Re-assigned wedding {wedding_id} from manager '{previous}' to '{manager}'"
                    )
                },
            );
            finish(
                store,
                &assignment,
                before,
                actor_for(&admin),
                cause,
                Action::new(String::from("AssignManager"), Some(details)),
            )
        }
        AssignmentCommand::AssignProtocol {
            wedding_id,
            protocol,
            acting_manager,
            protocol_job,
        } => {
            let manager = authorize_actor(store, &acting_manager, Role::Manager)?;
            require_target_role(store, &protocol, Role::Protocol)?;
            let mut assignment = store
                .find_assignment_by_wedding(wedding_id)?
                .ok_or(DomainError::AssignmentNotFound { wedding_id })?;

            let before = before_snapshot(&assignment);
            let details = protocol_job.as_ref().map_or_else(
                || format!("Assigned protocol '{protocol}' to wedding {wedding_id}"),
                |job| format!("Assigned protocol '{protocol}' to wedding {wedding_id} as {job}"),
            );
            assignment.assign_protocol(&acting_manager, protocol, protocol_job)?;

            finish(
                store,
                &assignment,
                before,
                actor_for(&manager),
                cause,
                Action::new(String::from("AssignProtocol"), Some(details)),
            )
        }
        AssignmentCommand::Complete {
            wedding_id,
            acting_manager,
            rating,
            feedback,
        } => {
            let mut assignment = store
                .find_assignment_by_wedding(wedding_id)?
                .ok_or(DomainError::AssignmentNotFound { wedding_id })?;
            assignment.ensure_managed_by(&acting_manager)?;
            let rating = ProtocolRating::new(rating)?;

            let before = before_snapshot(&assignment);
            assignment.complete(&acting_manager, rating, feedback)?;

            let actor = resolve_actor(store, Some(&acting_manager))?;
            let details = format!(
                "Completed wedding {wedding_id} with protocol rating {}",
                rating.value()
            );
            finish(
                store,
                &assignment,
                before,
                actor,
                cause,
                Action::new(String::from("CompleteWedding"), Some(details)),
            )
        }
    }
}

fn before_snapshot(assignment: &WeddingAssignment) -> StateSnapshot {
    if assignment.assignment_id.is_some() {
        snapshot_assignment(assignment)
    } else {
        StateSnapshot::absent()
    }
}

fn finish<S>(
    store: &mut S,
    assignment: &WeddingAssignment,
    before: StateSnapshot,
    actor: Actor,
    cause: Cause,
    action: Action,
) -> Result<AssignmentTransition, CoreError>
where
    S: AssignmentRepository + ?Sized,
{
    let stored = store.save_assignment(assignment)?;
    let audit_event = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        snapshot_assignment(&stored),
        Subject::wedding(stored.wedding_id),
    );
    Ok(AssignmentTransition {
        assignment: stored,
        audit_event,
    })
}
