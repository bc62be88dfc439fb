// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_domain::{Task, format_due_date};
use tracing::debug;

use super::now_timestamp;
use crate::backend::StoreBackend;
use crate::diesel_schema::tasks;
use crate::error::PersistenceError;

fn due_date_column(task: &Task) -> Result<Option<String>, PersistenceError> {
    task.due_date
        .map(format_due_date)
        .transpose()
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

backend_fn! {
/// Inserts a new task and returns it with its id and creation time.
///
/// # Errors
///
/// Returns an error if the insert fails, including an unknown wedding or
/// protocol user id.
pub fn insert_task(conn: &mut _, task: &Task) -> Result<Task, PersistenceError> {
    let now: String = now_timestamp()?;

    diesel::insert_into(tasks::table)
        .values((
            tasks::wedding_id.eq(task.wedding_id),
            tasks::title.eq(&task.title),
            tasks::description.eq(task.description.as_deref()),
            tasks::status.eq(task.status.as_str()),
            tasks::category.eq(task.category.as_str()),
            tasks::assigned_role.eq(task.assigned_role.as_deref()),
            tasks::assigned_protocol_id.eq(task.assigned_protocol_id),
            tasks::due_date.eq(due_date_column(task)?),
            tasks::rejection_reason.eq(task.rejection_reason.as_deref()),
            tasks::created_at.eq(&now),
        ))
        .execute(conn)?;

    let task_id: i64 = conn.last_insert_id()?;
    debug!(task_id, wedding_id = task.wedding_id, status = %task.status, "Inserted task");

    let mut stored = task.clone();
    stored.task_id = Some(task_id);
    stored.created_at = Some(now);
    Ok(stored)
}
}

backend_fn! {
/// Overwrites the mutable fields of a stored task.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has the task's id.
pub fn update_task(conn: &mut _, task_id: i64, task: &Task) -> Result<Task, PersistenceError> {
    let rows: usize = diesel::update(tasks::table.filter(tasks::task_id.eq(task_id)))
        .set((
            tasks::title.eq(&task.title),
            tasks::description.eq(task.description.as_deref()),
            tasks::status.eq(task.status.as_str()),
            tasks::category.eq(task.category.as_str()),
            tasks::assigned_role.eq(task.assigned_role.as_deref()),
            tasks::assigned_protocol_id.eq(task.assigned_protocol_id),
            tasks::due_date.eq(due_date_column(task)?),
            tasks::rejection_reason.eq(task.rejection_reason.as_deref()),
        ))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!("Task {task_id}")));
    }
    Ok(task.clone())
}
}

backend_fn! {
/// Deletes a task. Returns the number of rows removed (0 or 1).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_task(conn: &mut _, task_id: i64) -> Result<usize, PersistenceError> {
    let rows: usize =
        diesel::delete(tasks::table.filter(tasks::task_id.eq(task_id))).execute(conn)?;
    debug!(task_id, rows, "Deleted task");
    Ok(rows)
}
}
