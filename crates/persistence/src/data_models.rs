// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use elegant_events_audit::{Action, Actor, Cause, StateSnapshot};
use elegant_events_domain::{
    AssignmentStatus, DirectoryUser, Identity, ProtocolRating, Role, Task, TaskCategory,
    TaskStatus, Wedding, WeddingAssignment, parse_due_date,
};
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

use crate::diesel_schema::{tasks, users, wedding_assignments, weddings};
use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

impl From<&Actor> for ActorData {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            actor_type: actor.actor_type.clone(),
        }
    }
}

impl From<ActorData> for Actor {
    fn from(data: ActorData) -> Self {
        Self::new(data.id, data.actor_type)
    }
}

impl From<&Cause> for CauseData {
    fn from(cause: &Cause) -> Self {
        Self {
            id: cause.id.clone(),
            description: cause.description.clone(),
        }
    }
}

impl From<CauseData> for Cause {
    fn from(data: CauseData) -> Self {
        Self::new(data.id, data.description)
    }
}

impl From<&Action> for ActionData {
    fn from(action: &Action) -> Self {
        Self {
            name: action.name.clone(),
            details: action.details.clone(),
        }
    }
}

impl From<ActionData> for Action {
    fn from(data: ActionData) -> Self {
        Self::new(data.name, data.details)
    }
}

impl From<&StateSnapshot> for StateSnapshotData {
    fn from(snapshot: &StateSnapshot) -> Self {
        Self {
            data: snapshot.data.clone(),
        }
    }
}

impl From<StateSnapshotData> for StateSnapshot {
    fn from(data: StateSnapshotData) -> Self {
        Self::new(data.data)
    }
}

fn reconstruction<E: std::fmt::Display>(err: E) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}

/// Diesel Queryable struct for directory user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub user_id: i64,
    pub external_identity: String,
    pub display_name: String,
    pub role: String,
}

impl TryFrom<UserRow> for DirectoryUser {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(reconstruction)?;
        Ok(Self {
            user_id: Some(row.user_id),
            identity: Identity::new(&row.external_identity),
            display_name: row.display_name,
            role,
        })
    }
}

/// Diesel Queryable struct for wedding rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = weddings)]
pub struct WeddingRow {
    pub wedding_id: i64,
    pub couple_identity: String,
    pub partners_name: Option<String>,
    pub wedding_date: Option<String>,
}

/// Formats a wedding date for storage.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_wedding_date(date: Date) -> Result<String, PersistenceError> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}

impl TryFrom<WeddingRow> for Wedding {
    type Error = PersistenceError;

    fn try_from(row: WeddingRow) -> Result<Self, Self::Error> {
        let wedding_date = row
            .wedding_date
            .as_deref()
            .map(|d| Date::parse(d, format_description!("[year]-[month]-[day]")))
            .transpose()
            .map_err(reconstruction)?;
        Ok(Self {
            wedding_id: Some(row.wedding_id),
            couple_identity: Identity::new(&row.couple_identity),
            partners_name: row.partners_name,
            wedding_date,
        })
    }
}

/// Diesel Queryable struct for wedding assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = wedding_assignments)]
pub struct AssignmentRow {
    pub assignment_id: i64,
    pub wedding_id: i64,
    pub couple_identity: String,
    pub manager_identity: Option<String>,
    pub protocol_identity: Option<String>,
    pub protocol_job: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub protocol_rating: Option<i32>,
    pub protocol_feedback: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<AssignmentRow> for WeddingAssignment {
    type Error = PersistenceError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        let status: AssignmentStatus = row.status.parse().map_err(reconstruction)?;
        let protocol_rating = row
            .protocol_rating
            .map(|r| ProtocolRating::new(i64::from(r)))
            .transpose()
            .map_err(reconstruction)?;
        Ok(Self {
            assignment_id: Some(row.assignment_id),
            wedding_id: row.wedding_id,
            couple_identity: Identity::new(&row.couple_identity),
            manager_identity: row.manager_identity.as_deref().map(Identity::new),
            protocol_identity: row.protocol_identity.as_deref().map(Identity::new),
            protocol_job: row.protocol_job,
            status,
            notes: row.notes,
            protocol_rating,
            protocol_feedback: row.protocol_feedback,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

/// Diesel Queryable struct for task rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = tasks)]
pub struct TaskRow {
    pub task_id: i64,
    pub wedding_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub category: String,
    pub assigned_role: Option<String>,
    pub assigned_protocol_id: Option<i64>,
    pub due_date: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

impl TryFrom<TaskRow> for Task {
    type Error = PersistenceError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status: TaskStatus = row.status.parse().map_err(reconstruction)?;
        let due_date = row
            .due_date
            .as_deref()
            .map(parse_due_date)
            .transpose()
            .map_err(reconstruction)?;
        Ok(Self {
            task_id: Some(row.task_id),
            wedding_id: row.wedding_id,
            title: row.title,
            description: row.description,
            status,
            category: TaskCategory::parse_lenient(Some(&row.category)),
            assigned_role: row.assigned_role,
            assigned_protocol_id: row.assigned_protocol_id,
            due_date,
            rejection_reason: row.rejection_reason,
            created_at: Some(row.created_at),
        })
    }
}

/// Converts a batch of rows, failing on the first row that does not convert.
///
/// # Errors
///
/// Returns the first conversion error.
pub fn convert_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, PersistenceError>
where
    T: TryFrom<R, Error = PersistenceError>,
{
    rows.into_iter().map(T::try_from).collect()
}
