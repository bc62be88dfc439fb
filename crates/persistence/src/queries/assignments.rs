// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wedding assignment queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_domain::WeddingAssignment;
use tracing::debug;

use crate::data_models::{AssignmentRow, convert_rows};
use crate::diesel_schema::wedding_assignments;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves the assignment for a wedding, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_assignment_by_wedding(
    conn: &mut _,
    wedding_id: i64,
) -> Result<Option<WeddingAssignment>, PersistenceError> {
    debug!(wedding_id, "Looking up wedding assignment");

    wedding_assignments::table
        .filter(wedding_assignments::wedding_id.eq(wedding_id))
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?
        .map(WeddingAssignment::try_from)
        .transpose()
}
}

backend_fn! {
/// Retrieves the assignment for a couple, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_assignment_by_couple(
    conn: &mut _,
    couple_identity: &str,
) -> Result<Option<WeddingAssignment>, PersistenceError> {
    wedding_assignments::table
        .filter(wedding_assignments::couple_identity.eq(couple_identity))
        .order(wedding_assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?
        .map(WeddingAssignment::try_from)
        .transpose()
}
}

backend_fn! {
/// Lists every assignment, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_assignments(conn: &mut _) -> Result<Vec<WeddingAssignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = wedding_assignments::table
        .order(wedding_assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;
    convert_rows(rows)
}
}

backend_fn! {
/// Lists the assignments a manager holds.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn assignments_for_manager(
    conn: &mut _,
    manager_identity: &str,
) -> Result<Vec<WeddingAssignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = wedding_assignments::table
        .filter(wedding_assignments::manager_identity.eq(manager_identity))
        .order(wedding_assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;
    convert_rows(rows)
}
}

backend_fn! {
/// Lists the assignments delegated to a protocol officer.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn assignments_for_protocol(
    conn: &mut _,
    protocol_identity: &str,
) -> Result<Vec<WeddingAssignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = wedding_assignments::table
        .filter(wedding_assignments::protocol_identity.eq(protocol_identity))
        .order(wedding_assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;
    convert_rows(rows)
}
}
