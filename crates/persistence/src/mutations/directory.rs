// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_domain::{DirectoryUser, Wedding};
use tracing::info;

use super::now_timestamp;
use crate::backend::StoreBackend;
use crate::data_models::format_wedding_date;
use crate::diesel_schema::{users, weddings};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a directory user and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails, including a duplicate identity.
pub fn insert_user(
    conn: &mut _,
    user: &DirectoryUser,
) -> Result<DirectoryUser, PersistenceError> {
    diesel::insert_into(users::table)
        .values((
            users::external_identity.eq(user.identity.value()),
            users::display_name.eq(&user.display_name),
            users::role.eq(user.role.as_str()),
            users::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.last_insert_id()?;
    info!(user_id, identity = %user.identity, role = %user.role, "Registered directory user");

    let mut stored = user.clone();
    stored.user_id = Some(user_id);
    Ok(stored)
}
}

backend_fn! {
/// Inserts a wedding and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails, including an unknown couple identity.
pub fn insert_wedding(conn: &mut _, wedding: &Wedding) -> Result<Wedding, PersistenceError> {
    let wedding_date: Option<String> = wedding.wedding_date.map(format_wedding_date).transpose()?;

    diesel::insert_into(weddings::table)
        .values((
            weddings::couple_identity.eq(wedding.couple_identity.value()),
            weddings::partners_name.eq(wedding.partners_name.as_deref()),
            weddings::wedding_date.eq(wedding_date),
            weddings::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let wedding_id: i64 = conn.last_insert_id()?;
    info!(wedding_id, couple = %wedding.couple_identity, "Registered wedding");

    let mut stored = wedding.clone();
    stored.wedding_id = Some(wedding_id);
    Ok(stored)
}
}
