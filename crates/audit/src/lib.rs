// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Actor type recorded when a caller did not identify itself.
pub const ANONYMOUS_ACTOR_TYPE: &str = "ANONYMOUS";

/// Represents the entity performing an action.
///
/// For assignment transitions this is the acting admin or manager. Task
/// operations accept an optional acting identity; without one the actor
/// is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The acting identity, or `anonymous`.
    pub id: String,
    /// The actor's directory role name, or [`ANONYMOUS_ACTOR_TYPE`].
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The acting identity
    /// * `actor_type` - The actor's role name
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// An actor for callers that supplied no identity.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(
            String::from("anonymous"),
            String::from(ANONYMOUS_ACTOR_TYPE),
        )
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.actor_type == ANONYMOUS_ACTOR_TYPE
    }
}

/// Represents the request that triggered an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    pub description: String,
}

impl Cause {
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific transition performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`AssignManager`", "`RejectTask`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A serialized view of the entity before or after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub data: String,
}

impl StateSnapshot {
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Snapshot used when the entity did not exist before the transition.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("{}"))
    }
}

/// The wedding (and optionally task) an audit event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub wedding_id: i64,
    pub task_id: Option<i64>,
}

impl Subject {
    #[must_use]
    pub const fn wedding(wedding_id: i64) -> Self {
        Self {
            wedding_id,
            task_id: None,
        }
    }

    #[must_use]
    pub const fn task(wedding_id: i64, task_id: i64) -> Self {
        Self {
            wedding_id,
            task_id: Some(task_id),
        }
    }
}

/// An immutable audit event representing one assignment or task transition.
///
/// Every successful transition produces exactly one audit event. Events are
/// consumed fire-and-forget: failing to record one never undoes the
/// transition it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Storage id. `None` until the event has been recorded.
    pub event_id: Option<i64>,
    pub actor: Actor,
    pub cause: Cause,
    pub action: Action,
    pub before: StateSnapshot,
    pub after: StateSnapshot,
    pub subject: Subject,
}

impl AuditEvent {
    /// Creates a new, unrecorded `AuditEvent`.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        subject: Subject,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            before,
            after,
            subject,
        }
    }

    /// Attaches the storage id assigned when the event was recorded.
    #[must_use]
    pub const fn with_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}
