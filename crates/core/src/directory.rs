// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bootstrap of directory users and weddings.

use crate::error::CoreError;
use crate::store::{IdentityDirectory, WeddingRegistry};
use elegant_events_domain::{DirectoryUser, DomainError, Identity, Role, Wedding};
use time::Date;

/// Registers a directory user.
///
/// # Errors
///
/// - `InvalidIdentity` if the identity is blank
/// - `DuplicateIdentity` if the identity is already registered
pub fn register_user<S>(
    store: &mut S,
    identity: &str,
    display_name: String,
    role: Role,
) -> Result<DirectoryUser, CoreError>
where
    S: IdentityDirectory + ?Sized,
{
    let identity = Identity::parse(identity)?;
    if store.find_user_by_identity(&identity)?.is_some() {
        return Err(DomainError::DuplicateIdentity(identity.value().to_string()).into());
    }
    store.insert_user(&DirectoryUser::new(identity, display_name, role))
}

/// Registers a wedding for an existing couple account.
///
/// # Errors
///
/// - `UserNotFound` if the couple identity is not in the directory
/// - `DuplicateCoupleWedding` if the couple already has a wedding
pub fn register_wedding<S>(
    store: &mut S,
    couple_identity: &Identity,
    partners_name: Option<String>,
    wedding_date: Option<Date>,
) -> Result<Wedding, CoreError>
where
    S: IdentityDirectory + WeddingRegistry + ?Sized,
{
    if store.find_user_by_identity(couple_identity)?.is_none() {
        return Err(DomainError::UserNotFound(couple_identity.value().to_string()).into());
    }
    if store.find_wedding_by_couple(couple_identity)?.is_some() {
        return Err(DomainError::DuplicateCoupleWedding(couple_identity.value().to_string()).into());
    }
    store.insert_wedding(&Wedding {
        wedding_id: None,
        couple_identity: couple_identity.clone(),
        partners_name,
        wedding_date,
    })
}
