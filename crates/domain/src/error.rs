// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment_status::AssignmentStatus;
use crate::role::Role;

/// Broad classification of domain failures.
///
/// Boundary layers map these onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced entity does not exist.
    NotFound,
    /// The acting identity lacks the role the operation requires.
    Unauthorized,
    /// The acting identity does not own the entity it tried to change.
    Forbidden,
    /// A value supplied by the caller is malformed or out of range.
    InvalidArgument,
    /// Reserved for concurrent-modification detection. Never produced today.
    Conflict,
}

/// Errors that can occur while applying assignment and task rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Wedding does not exist.
    WeddingNotFound(i64),
    /// No assignment (or no assignment with a manager) exists for the wedding.
    AssignmentNotFound {
        /// The wedding the assignment was looked up for.
        wedding_id: i64,
    },
    /// Task does not exist.
    TaskNotFound(i64),
    /// No directory user has the given identity.
    UserNotFound(String),
    /// No directory user has the given numeric id.
    UserIdNotFound(i64),
    /// The acting identity is missing or does not hold the required role.
    Unauthorized {
        /// The acting identity.
        identity: String,
        /// The role the operation requires.
        required_role: Role,
    },
    /// The target identity holds the wrong role for the operation.
    InvalidRole {
        /// The target identity.
        identity: String,
        /// The role the target must hold.
        expected: Role,
        /// The role the target actually holds.
        actual: Role,
    },
    /// The acting manager is not the manager on record for the assignment.
    NotAssignmentOwner {
        /// The wedding whose assignment was touched.
        wedding_id: i64,
        /// The acting identity.
        identity: String,
    },
    /// Task status string is not a known status.
    InvalidTaskStatus(String),
    /// Assignment status string is not a known status.
    InvalidAssignmentStatus(String),
    /// Role string is not a known role.
    InvalidRoleName(String),
    /// Protocol rating is outside 1 through 5.
    InvalidRating(i64),
    /// Due date string matched none of the accepted formats.
    InvalidDueDate(String),
    /// Identity string is empty.
    InvalidIdentity(String),
    /// Assignment status change is not permitted.
    InvalidAssignmentTransition {
        /// The current status.
        from: AssignmentStatus,
        /// The requested status.
        to: AssignmentStatus,
    },
    /// A directory user with the identity already exists.
    DuplicateIdentity(String),
    /// The couple already has a registered wedding.
    DuplicateCoupleWedding(String),
    /// Concurrent modification detected.
    Conflict {
        /// Description of the conflicting write.
        reason: String,
    },
}

impl DomainError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::WeddingNotFound(_)
            | Self::AssignmentNotFound { .. }
            | Self::TaskNotFound(_)
            | Self::UserNotFound(_)
            | Self::UserIdNotFound(_) => ErrorKind::NotFound,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::NotAssignmentOwner { .. } => ErrorKind::Forbidden,
            Self::InvalidRole { .. }
            | Self::InvalidTaskStatus(_)
            | Self::InvalidAssignmentStatus(_)
            | Self::InvalidRoleName(_)
            | Self::InvalidRating(_)
            | Self::InvalidDueDate(_)
            | Self::InvalidIdentity(_)
            | Self::InvalidAssignmentTransition { .. }
            | Self::DuplicateIdentity(_)
            | Self::DuplicateCoupleWedding(_) => ErrorKind::InvalidArgument,
            Self::Conflict { .. } => ErrorKind::Conflict,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeddingNotFound(id) => write!(f, "Wedding {id} not found"),
            Self::AssignmentNotFound { wedding_id } => write!(
                f,
                "Wedding {wedding_id} has no manager assignment. Assign a manager first"
            ),
            Self::TaskNotFound(id) => write!(f, "Task {id} not found"),
            Self::UserNotFound(identity) => write!(f, "User '{identity}' not found"),
            Self::UserIdNotFound(id) => write!(f, "User with id {id} not found"),
            Self::Unauthorized {
                identity,
                required_role,
            } => write!(
                f,
                "User '{identity}' is not authorized: role {required_role} required"
            ),
            Self::InvalidRole {
                identity,
                expected,
                actual,
            } => write!(
                f,
                "User '{identity}' has role {actual}, expected {expected}"
            ),
            Self::NotAssignmentOwner {
                wedding_id,
                identity,
            } => write!(
                f,
                "Manager '{identity}' is not assigned to wedding {wedding_id}"
            ),
            Self::InvalidTaskStatus(status) => write!(f, "Invalid status: {status}"),
            Self::InvalidAssignmentStatus(status) => {
                write!(f, "Invalid assignment status: {status}")
            }
            Self::InvalidRoleName(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidRating(rating) => {
                write!(f, "Invalid rating: {rating}. Must be between 1 and 5")
            }
            Self::InvalidDueDate(value) => write!(f, "Invalid due date: {value}"),
            Self::InvalidIdentity(msg) => write!(f, "Invalid identity: {msg}"),
            Self::InvalidAssignmentTransition { from, to } => {
                write!(f, "Cannot move assignment from {from} to {to}")
            }
            Self::DuplicateIdentity(identity) => {
                write!(f, "User '{identity}' already exists")
            }
            Self::DuplicateCoupleWedding(identity) => {
                write!(f, "Couple '{identity}' already has a wedding")
            }
            Self::Conflict { reason } => write!(f, "Conflict: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
