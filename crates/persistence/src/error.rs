// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use elegant_events::CoreError;
use thiserror::Error;

/// Failures raised by the wedding and task store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Diesel reported an error while reading or writing rows.
    #[error("store rejected the statement: {0}")]
    DatabaseError(String),
    #[error("could not open the wedding store: {0}")]
    DatabaseConnectionFailed(String),
    #[error("schema migration did not apply: {0}")]
    MigrationFailed(String),
    /// A raw statement (PRAGMA, session setup) failed.
    #[error("raw statement failed: {0}")]
    QueryFailed(String),
    /// A stored status, role, rating or date no longer parses.
    #[error("stored row no longer parses: {0}")]
    ReconstructionError(String),
    /// Audit payload JSON or a stored date could not be encoded or decoded.
    #[error("audit payload encoding failed: {0}")]
    SerializationError(String),
    #[error("store setup failed: {0}")]
    InitializationError(String),
    /// `SQLite` opened without `PRAGMA foreign_keys = ON`.
    #[error("foreign keys are not enforced on this connection")]
    ForeignKeyEnforcementNotEnabled,
    /// An update addressed an assignment or task row that is gone.
    #[error("no such row: {0}")]
    NotFound(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        if matches!(err, diesel::result::Error::NotFound) {
            Self::NotFound(String::from("query matched no row"))
        } else {
            Self::DatabaseError(err.to_string())
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<time::error::Format> for PersistenceError {
    fn from(err: time::error::Format) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Storage failures surface to the core operations as opaque storage errors.
impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage(err.to_string())
    }
}
