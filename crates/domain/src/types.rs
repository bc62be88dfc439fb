// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment_status::AssignmentStatus;
use crate::error::DomainError;
use crate::role::{Identity, Role};
use crate::task_status::{TaskCategory, TaskStatus};
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

/// A user as known to the identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Numeric id assigned by storage. `None` until persisted.
    pub user_id: Option<i64>,
    pub identity: Identity,
    pub display_name: String,
    pub role: Role,
}

impl DirectoryUser {
    #[must_use]
    pub const fn new(identity: Identity, display_name: String, role: Role) -> Self {
        Self {
            user_id: None,
            identity,
            display_name,
            role,
        }
    }
}

/// A wedding as known to the wedding registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wedding {
    /// Numeric id assigned by storage. `None` until persisted.
    pub wedding_id: Option<i64>,
    /// Identity of the couple account that owns the wedding.
    pub couple_identity: Identity,
    pub partners_name: Option<String>,
    pub wedding_date: Option<Date>,
}

/// Protocol rating recorded when a wedding is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolRating(u8);

impl ProtocolRating {
    /// Validates a rating in the range 1 through 5.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` if the value is out of range.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v @ 1..=5) => Ok(Self(v)),
            _ => Err(DomainError::InvalidRating(value)),
        }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// The record linking one wedding to its manager and protocol officer.
///
/// Invariants upheld by the mutating methods:
/// - the protocol officer can only be set while a manager is on record,
///   and only by that manager
/// - only the manager on record can complete the assignment
/// - a completed assignment is never changed again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingAssignment {
    /// Numeric id assigned by storage. `None` until persisted.
    pub assignment_id: Option<i64>,
    pub wedding_id: i64,
    /// Copied from the wedding when the assignment is created.
    pub couple_identity: Identity,
    pub manager_identity: Option<Identity>,
    pub protocol_identity: Option<Identity>,
    pub protocol_job: Option<String>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub protocol_rating: Option<ProtocolRating>,
    pub protocol_feedback: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl WeddingAssignment {
    /// Creates an unsaved assignment in `Pending` for the given wedding.
    #[must_use]
    pub const fn pending(wedding_id: i64, couple_identity: Identity) -> Self {
        Self {
            assignment_id: None,
            wedding_id,
            couple_identity,
            manager_identity: None,
            protocol_identity: None,
            protocol_job: None,
            status: AssignmentStatus::Pending,
            notes: None,
            protocol_rating: None,
            protocol_feedback: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets (or replaces) the manager on record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAssignmentTransition` if the assignment is completed.
    pub fn assign_manager(&mut self, manager: Identity) -> Result<(), DomainError> {
        self.status
            .validate_transition(AssignmentStatus::AssignedToManager)?;
        self.manager_identity = Some(manager);
        self.status = AssignmentStatus::AssignedToManager;
        Ok(())
    }

    /// Delegates the wedding to a protocol officer.
    ///
    /// # Errors
    ///
    /// - `AssignmentNotFound` if no manager is on record
    /// - `NotAssignmentOwner` if `acting_manager` is not the manager on record
    /// - `InvalidAssignmentTransition` if the assignment is completed
    pub fn assign_protocol(
        &mut self,
        acting_manager: &Identity,
        protocol: Identity,
        protocol_job: Option<String>,
    ) -> Result<(), DomainError> {
        if self.manager_identity.is_none() {
            return Err(DomainError::AssignmentNotFound {
                wedding_id: self.wedding_id,
            });
        }
        self.ensure_managed_by(acting_manager)?;
        self.status
            .validate_transition(AssignmentStatus::AssignedToProtocol)?;

        self.protocol_identity = Some(protocol);
        self.protocol_job = protocol_job;
        self.status = AssignmentStatus::AssignedToProtocol;
        Ok(())
    }

    /// Completes the wedding and records the protocol rating and feedback.
    ///
    /// A protocol officer does not need to have been assigned.
    ///
    /// # Errors
    ///
    /// - `NotAssignmentOwner` if `acting_manager` is not the manager on record
    /// - `InvalidAssignmentTransition` if the assignment is not in a manager stage
    pub fn complete(
        &mut self,
        acting_manager: &Identity,
        rating: ProtocolRating,
        feedback: Option<String>,
    ) -> Result<(), DomainError> {
        self.ensure_managed_by(acting_manager)?;
        self.status.validate_transition(AssignmentStatus::Completed)?;

        self.status = AssignmentStatus::Completed;
        self.protocol_rating = Some(rating);
        self.protocol_feedback = feedback;
        Ok(())
    }

    /// Verifies that `identity` is the manager on record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotAssignmentOwner` otherwise.
    pub fn ensure_managed_by(&self, identity: &Identity) -> Result<(), DomainError> {
        if self.manager_identity.as_ref() == Some(identity) {
            Ok(())
        } else {
            Err(DomainError::NotAssignmentOwner {
                wedding_id: self.wedding_id,
                identity: identity.value().to_string(),
            })
        }
    }
}

/// A unit of wedding-day work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Numeric id assigned by storage. `None` until persisted.
    pub task_id: Option<i64>,
    pub wedding_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub category: TaskCategory,
    /// Display-only label such as `MANAGER`, `COUPLE` or `PROTOCOL`.
    pub assigned_role: Option<String>,
    /// Directory user id of the delegated protocol officer.
    pub assigned_protocol_id: Option<i64>,
    pub due_date: Option<PrimitiveDateTime>,
    pub rejection_reason: Option<String>,
    pub created_at: Option<String>,
}

impl Task {
    /// Creates an unsaved task.
    ///
    /// A delegated task waits for the protocol officer to accept it; an
    /// undelegated task has nobody to confirm and starts `Accepted`.
    #[must_use]
    pub fn new(
        wedding_id: i64,
        title: String,
        description: Option<String>,
        category: TaskCategory,
        assigned_role: Option<String>,
        assigned_protocol_id: Option<i64>,
        due_date: Option<PrimitiveDateTime>,
    ) -> Self {
        let status = if assigned_protocol_id.is_some() {
            TaskStatus::PendingAcceptance
        } else {
            TaskStatus::Accepted
        };
        Self {
            task_id: None,
            wedding_id,
            title,
            description,
            status,
            category,
            assigned_role,
            assigned_protocol_id,
            due_date,
            rejection_reason: None,
            created_at: None,
        }
    }

    /// Marks the task accepted and clears any earlier rejection reason.
    pub fn accept(&mut self) {
        self.status = TaskStatus::Accepted;
        self.rejection_reason = None;
    }

    pub fn reject(&mut self, reason: Option<String>) {
        self.status = TaskStatus::Rejected;
        self.rejection_reason = reason;
    }

    pub const fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// Sets the status verbatim. No lifecycle rule is applied.
    pub const fn override_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
