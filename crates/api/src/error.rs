// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use elegant_events::CoreError;
use elegant_events_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// The display text is what callers see in the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A requested resource was not found.
    #[error("{message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        message: String,
    },
    /// The acting identity lacks the required role.
    #[error("{message}")]
    Unauthorized { message: String },
    /// The acting identity does not own the resource.
    #[error("{message}")]
    Forbidden { message: String },
    /// Invalid input was provided.
    #[error("{message}")]
    InvalidInput {
        /// The request field that was invalid.
        field: String,
        message: String,
    },
    /// Concurrent modification. Not produced by any handler today.
    #[error("{message}")]
    Conflict { message: String },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message,
    }
}

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message = err.to_string();
    match err {
        DomainError::WeddingNotFound(_) => not_found("Wedding", message),
        DomainError::AssignmentNotFound { .. } => not_found("Wedding assignment", message),
        DomainError::TaskNotFound(_) => not_found("Task", message),
        DomainError::UserNotFound(_) | DomainError::UserIdNotFound(_) => {
            not_found("User", message)
        }
        DomainError::Unauthorized { .. } => ApiError::Unauthorized { message },
        DomainError::NotAssignmentOwner { .. } => ApiError::Forbidden { message },
        DomainError::InvalidRole { .. } | DomainError::InvalidRoleName(_) => {
            invalid("role", message)
        }
        DomainError::InvalidTaskStatus(_)
        | DomainError::InvalidAssignmentStatus(_)
        | DomainError::InvalidAssignmentTransition { .. } => invalid("status", message),
        DomainError::InvalidRating(_) => invalid("rating", message),
        DomainError::InvalidDueDate(_) => invalid("dueDate", message),
        DomainError::InvalidIdentity(_) | DomainError::DuplicateIdentity(_) => {
            invalid("identity", message)
        }
        DomainError::DuplicateCoupleWedding(_) => invalid("coupleIdentity", message),
        DomainError::Conflict { .. } => ApiError::Conflict { message },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Storage(msg) => ApiError::Internal { message: msg },
    }
}
