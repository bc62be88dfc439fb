// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator interfaces the assignment and task operations run against.
//!
//! Every method takes `&mut self` because storage backends hold a single
//! connection that is borrowed mutably for reads as well as writes.

use crate::error::CoreError;
use elegant_events_audit::AuditEvent;
use elegant_events_domain::{DirectoryUser, Identity, Task, Wedding, WeddingAssignment};

/// Resolves identities to directory users.
pub trait IdentityDirectory {
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_user_by_identity(
        &mut self,
        identity: &Identity,
    ) -> Result<Option<DirectoryUser>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_user_by_id(&mut self, user_id: i64) -> Result<Option<DirectoryUser>, CoreError>;

    /// Stores a new directory user and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the insert fails.
    fn insert_user(&mut self, user: &DirectoryUser) -> Result<DirectoryUser, CoreError>;
}

/// Owns wedding records.
pub trait WeddingRegistry {
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_wedding(&mut self, wedding_id: i64) -> Result<Option<Wedding>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_wedding_by_couple(
        &mut self,
        couple_identity: &Identity,
    ) -> Result<Option<Wedding>, CoreError>;

    /// Stores a new wedding and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the insert fails.
    fn insert_wedding(&mut self, wedding: &Wedding) -> Result<Wedding, CoreError>;
}

/// Owns wedding assignments. At most one assignment exists per wedding.
pub trait AssignmentRepository {
    /// Returns the stored assignment for the wedding, or a fresh unsaved
    /// `Pending` assignment seeded with the wedding's couple identity.
    ///
    /// Nothing is written until [`AssignmentRepository::save_assignment`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn get_or_create_assignment(
        &mut self,
        wedding_id: i64,
        couple_identity: &Identity,
    ) -> Result<WeddingAssignment, CoreError> {
        Ok(self
            .find_assignment_by_wedding(wedding_id)?
            .unwrap_or_else(|| WeddingAssignment::pending(wedding_id, couple_identity.clone())))
    }

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_assignment_by_wedding(
        &mut self,
        wedding_id: i64,
    ) -> Result<Option<WeddingAssignment>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_assignment_by_couple(
        &mut self,
        couple_identity: &Identity,
    ) -> Result<Option<WeddingAssignment>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn list_assignments(&mut self) -> Result<Vec<WeddingAssignment>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn assignments_for_manager(
        &mut self,
        manager_identity: &Identity,
    ) -> Result<Vec<WeddingAssignment>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn assignments_for_protocol(
        &mut self,
        protocol_identity: &Identity,
    ) -> Result<Vec<WeddingAssignment>, CoreError>;

    /// Inserts an unsaved assignment or overwrites a stored one.
    ///
    /// Returns the stored record with its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the write fails.
    fn save_assignment(
        &mut self,
        assignment: &WeddingAssignment,
    ) -> Result<WeddingAssignment, CoreError>;
}

/// Owns wedding tasks.
pub trait TaskRepository {
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn find_task(&mut self, task_id: i64) -> Result<Option<Task>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn tasks_for_wedding(&mut self, wedding_id: i64) -> Result<Vec<Task>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn tasks_for_protocol(&mut self, protocol_user_id: i64) -> Result<Vec<Task>, CoreError>;

    /// Inserts an unsaved task or overwrites a stored one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the write fails.
    fn save_task(&mut self, task: &Task) -> Result<Task, CoreError>;

    /// Deletes a task by id. Deleting a missing task is not an error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the delete fails.
    fn delete_task(&mut self, task_id: i64) -> Result<(), CoreError>;
}

/// Receives audit events for downstream display.
pub trait AuditSink {
    /// Records an event and returns it with its storage id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the event cannot be recorded.
    fn record_event(&mut self, event: &AuditEvent) -> Result<AuditEvent, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the lookup fails.
    fn events_for_wedding(&mut self, wedding_id: i64) -> Result<Vec<AuditEvent>, CoreError>;
}
