// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use elegant_events_audit::AuditEvent;
use tracing::debug;

use super::now_timestamp;
use crate::backend::StoreBackend;
use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

backend_fn! {
/// Persists an audit event.
///
/// Actor, cause, action and both snapshots are stored as JSON documents.
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(conn: &mut _, event: &AuditEvent) -> Result<i64, PersistenceError> {
    let actor_json: String = serde_json::to_string(&ActorData::from(&event.actor))?;
    let cause_json: String = serde_json::to_string(&CauseData::from(&event.cause))?;
    let action_json: String = serde_json::to_string(&ActionData::from(&event.action))?;
    let before_json: String = serde_json::to_string(&StateSnapshotData::from(&event.before))?;
    let after_json: String = serde_json::to_string(&StateSnapshotData::from(&event.after))?;

    diesel::insert_into(audit_events::table)
        .values((
            audit_events::wedding_id.eq(event.subject.wedding_id),
            audit_events::task_id.eq(event.subject.task_id),
            audit_events::actor_json.eq(actor_json),
            audit_events::cause_json.eq(cause_json),
            audit_events::action_json.eq(action_json),
            audit_events::before_snapshot_json.eq(before_json),
            audit_events::after_snapshot_json.eq(after_json),
            audit_events::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let event_id: i64 = conn.last_insert_id()?;
    debug!(event_id, action = %event.action.name, "Persisted audit event");
    Ok(event_id)
}
}
