// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role checks shared by every guarded operation.

use crate::error::CoreError;
use crate::store::IdentityDirectory;
use elegant_events_audit::Actor;
use elegant_events_domain::{DirectoryUser, DomainError, Identity, Role};

/// Resolves the acting identity and requires it to hold `required_role`.
///
/// A missing user and a user with another role are both reported as
/// `Unauthorized`.
///
/// # Errors
///
/// Returns `DomainError::Unauthorized` if the acting identity is unknown or
/// holds a different role.
pub fn authorize_actor<D: IdentityDirectory + ?Sized>(
    directory: &mut D,
    acting: &Identity,
    required_role: Role,
) -> Result<DirectoryUser, CoreError> {
    match directory.find_user_by_identity(acting)? {
        Some(user) if user.role == required_role => Ok(user),
        _ => Err(DomainError::Unauthorized {
            identity: acting.value().to_string(),
            required_role,
        }
        .into()),
    }
}

/// Resolves the target of an assignment and requires it to hold `expected`.
///
/// # Errors
///
/// - `DomainError::UserNotFound` if the identity is unknown
/// - `DomainError::InvalidRole` if the user holds a different role
pub fn require_target_role<D: IdentityDirectory + ?Sized>(
    directory: &mut D,
    target: &Identity,
    expected: Role,
) -> Result<DirectoryUser, CoreError> {
    let user = directory
        .find_user_by_identity(target)?
        .ok_or_else(|| DomainError::UserNotFound(target.value().to_string()))?;

    if user.role != expected {
        return Err(DomainError::InvalidRole {
            identity: target.value().to_string(),
            expected,
            actual: user.role,
        }
        .into());
    }
    Ok(user)
}

/// Builds the audit actor for an operation that does not require a role.
///
/// Unknown identities are still recorded, with an `UNVERIFIED` actor type.
///
/// # Errors
///
/// Returns `CoreError::Storage` if the directory lookup fails.
pub fn resolve_actor<D: IdentityDirectory + ?Sized>(
    directory: &mut D,
    acting: Option<&Identity>,
) -> Result<Actor, CoreError> {
    let Some(identity) = acting else {
        return Ok(Actor::anonymous());
    };
    let actor_type = directory
        .find_user_by_identity(identity)?
        .map_or_else(|| String::from("UNVERIFIED"), |u| u.role.as_str().to_string());
    Ok(Actor::new(identity.value().to_string(), actor_type))
}

/// Builds the audit actor for a user that has already been authorized.
#[must_use]
pub fn actor_for(user: &DirectoryUser) -> Actor {
    Actor::new(
        user.identity.value().to_string(),
        user.role.as_str().to_string(),
    )
}
