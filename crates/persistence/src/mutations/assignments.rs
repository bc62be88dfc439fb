// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_domain::{Identity, WeddingAssignment};
use tracing::debug;

use super::now_timestamp;
use crate::backend::StoreBackend;
use crate::diesel_schema::wedding_assignments;
use crate::error::PersistenceError;

fn rating_column(assignment: &WeddingAssignment) -> Option<i32> {
    assignment
        .protocol_rating
        .map(|rating| i32::from(rating.value()))
}

backend_fn! {
/// Inserts a new assignment and returns it with its id and timestamps.
///
/// # Errors
///
/// Returns an error if the insert fails, including a second assignment for
/// the same wedding.
pub fn insert_assignment(
    conn: &mut _,
    assignment: &WeddingAssignment,
) -> Result<WeddingAssignment, PersistenceError> {
    let now: String = now_timestamp()?;

    diesel::insert_into(wedding_assignments::table)
        .values((
            wedding_assignments::wedding_id.eq(assignment.wedding_id),
            wedding_assignments::couple_identity.eq(assignment.couple_identity.value()),
            wedding_assignments::manager_identity
                .eq(assignment.manager_identity.as_ref().map(Identity::value)),
            wedding_assignments::protocol_identity
                .eq(assignment.protocol_identity.as_ref().map(Identity::value)),
            wedding_assignments::protocol_job.eq(assignment.protocol_job.as_deref()),
            wedding_assignments::status.eq(assignment.status.as_str()),
            wedding_assignments::notes.eq(assignment.notes.as_deref()),
            wedding_assignments::protocol_rating.eq(rating_column(assignment)),
            wedding_assignments::protocol_feedback.eq(assignment.protocol_feedback.as_deref()),
            wedding_assignments::created_at.eq(&now),
            wedding_assignments::updated_at.eq(&now),
        ))
        .execute(conn)?;

    let assignment_id: i64 = conn.last_insert_id()?;
    debug!(assignment_id, wedding_id = assignment.wedding_id, "Inserted wedding assignment");

    let mut stored = assignment.clone();
    stored.assignment_id = Some(assignment_id);
    stored.created_at = Some(now.clone());
    stored.updated_at = Some(now);
    Ok(stored)
}
}

backend_fn! {
/// Overwrites a stored assignment and refreshes its update timestamp.
///
/// The creation timestamp is never rewritten.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has the assignment's id.
pub fn update_assignment(
    conn: &mut _,
    assignment_id: i64,
    assignment: &WeddingAssignment,
) -> Result<WeddingAssignment, PersistenceError> {
    let now: String = now_timestamp()?;

    let rows: usize = diesel::update(
        wedding_assignments::table.filter(wedding_assignments::assignment_id.eq(assignment_id)),
    )
    .set((
        wedding_assignments::manager_identity
            .eq(assignment.manager_identity.as_ref().map(Identity::value)),
        wedding_assignments::protocol_identity
            .eq(assignment.protocol_identity.as_ref().map(Identity::value)),
        wedding_assignments::protocol_job.eq(assignment.protocol_job.as_deref()),
        wedding_assignments::status.eq(assignment.status.as_str()),
        wedding_assignments::notes.eq(assignment.notes.as_deref()),
        wedding_assignments::protocol_rating.eq(rating_column(assignment)),
        wedding_assignments::protocol_feedback.eq(assignment.protocol_feedback.as_deref()),
        wedding_assignments::updated_at.eq(&now),
    ))
    .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Wedding assignment {assignment_id}"
        )));
    }

    let mut stored = assignment.clone();
    stored.updated_at = Some(now);
    Ok(stored)
}
}
