// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_audit::{AuditEvent, Subject};

use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for audit event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
struct AuditEventRow {
    event_id: i64,
    wedding_id: i64,
    task_id: Option<i64>,
    actor_json: String,
    cause_json: String,
    action_json: String,
    before_snapshot_json: String,
    after_snapshot_json: String,
}

impl TryFrom<AuditEventRow> for AuditEvent {
    type Error = PersistenceError;

    fn try_from(row: AuditEventRow) -> Result<Self, Self::Error> {
        let actor: ActorData = serde_json::from_str(&row.actor_json)?;
        let cause: CauseData = serde_json::from_str(&row.cause_json)?;
        let action: ActionData = serde_json::from_str(&row.action_json)?;
        let before: StateSnapshotData = serde_json::from_str(&row.before_snapshot_json)?;
        let after: StateSnapshotData = serde_json::from_str(&row.after_snapshot_json)?;

        let subject = Subject {
            wedding_id: row.wedding_id,
            task_id: row.task_id,
        };
        Ok(Self::new(
            actor.into(),
            cause.into(),
            action.into(),
            before.into(),
            after.into(),
            subject,
        )
        .with_id(row.event_id))
    }
}

backend_fn! {
/// Retrieves every audit event recorded for a wedding, oldest first.
///
/// Task events are included.
///
/// # Errors
///
/// Returns an error if the query fails or an event cannot be deserialized.
pub fn events_for_wedding(
    conn: &mut _,
    wedding_id: i64,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::wedding_id.eq(wedding_id))
        .order(audit_events::event_id.asc())
        .select(AuditEventRow::as_select())
        .load(conn)?;
    rows.into_iter().map(AuditEvent::try_from).collect()
}
}
