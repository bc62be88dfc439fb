// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory user and wedding lookups.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_domain::{DirectoryUser, Wedding};
use tracing::debug;

use crate::data_models::{UserRow, WeddingRow};
use crate::diesel_schema::{users, weddings};
use crate::error::PersistenceError;

backend_fn! {
/// Looks up a directory user by external identity.
///
/// Identities are matched exactly (case-sensitive).
///
/// # Errors
///
/// Returns an error if the query fails or the stored role is unknown.
pub fn find_user_by_identity(
    conn: &mut _,
    identity: &str,
) -> Result<Option<DirectoryUser>, PersistenceError> {
    debug!(identity, "Looking up directory user");

    users::table
        .filter(users::external_identity.eq(identity))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(DirectoryUser::try_from)
        .transpose()
}
}

backend_fn! {
/// Looks up a directory user by numeric id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored role is unknown.
pub fn find_user_by_id(
    conn: &mut _,
    user_id: i64,
) -> Result<Option<DirectoryUser>, PersistenceError> {
    debug!(user_id, "Looking up directory user by id");

    users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(DirectoryUser::try_from)
        .transpose()
}
}

backend_fn! {
/// Looks up a wedding by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored date is malformed.
pub fn find_wedding(conn: &mut _, wedding_id: i64) -> Result<Option<Wedding>, PersistenceError> {
    weddings::table
        .filter(weddings::wedding_id.eq(wedding_id))
        .select(WeddingRow::as_select())
        .first(conn)
        .optional()?
        .map(Wedding::try_from)
        .transpose()
}
}

backend_fn! {
/// Looks up the wedding owned by a couple identity.
///
/// # Errors
///
/// Returns an error if the query fails or the stored date is malformed.
pub fn find_wedding_by_couple(
    conn: &mut _,
    couple_identity: &str,
) -> Result<Option<Wedding>, PersistenceError> {
    weddings::table
        .filter(weddings::couple_identity.eq(couple_identity))
        .select(WeddingRow::as_select())
        .first(conn)
        .optional()?
        .map(Wedding::try_from)
        .transpose()
}
}
