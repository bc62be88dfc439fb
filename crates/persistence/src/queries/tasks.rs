// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_domain::Task;

use crate::data_models::{TaskRow, convert_rows};
use crate::diesel_schema::tasks;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a task by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_task(conn: &mut _, task_id: i64) -> Result<Option<Task>, PersistenceError> {
    tasks::table
        .filter(tasks::task_id.eq(task_id))
        .select(TaskRow::as_select())
        .first(conn)
        .optional()?
        .map(Task::try_from)
        .transpose()
}
}

backend_fn! {
/// Lists a wedding's tasks in creation order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn tasks_for_wedding(conn: &mut _, wedding_id: i64) -> Result<Vec<Task>, PersistenceError> {
    let rows: Vec<TaskRow> = tasks::table
        .filter(tasks::wedding_id.eq(wedding_id))
        .order(tasks::task_id.asc())
        .select(TaskRow::as_select())
        .load(conn)?;
    convert_rows(rows)
}
}

backend_fn! {
/// Lists the tasks delegated to a protocol officer.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn tasks_for_protocol(
    conn: &mut _,
    protocol_user_id: i64,
) -> Result<Vec<Task>, PersistenceError> {
    let rows: Vec<TaskRow> = tasks::table
        .filter(tasks::assigned_protocol_id.eq(protocol_user_id))
        .order(tasks::task_id.asc())
        .select(TaskRow::as_select())
        .load(conn)?;
    convert_rows(rows)
}
}
