// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Connection bootstrap for the two supported stores.
//!
//! `SQLite` backs the server by default and every unit test. `MySQL` and
//! `MariaDB` are exercised only by the ignored validation tests. Row-level
//! queries and mutations live in `queries/` and `mutations/` and reach this
//! module only through [`StoreBackend`].

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// The two statements whose SQL differs per store.
pub trait StoreBackend: Connection {
    /// Id assigned to the row inserted last on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup statement fails.
    fn last_insert_id(&mut self) -> Result<i64, PersistenceError>;

    /// Fails unless wedding, task and assignment references are checked.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` when off.
    fn ensure_foreign_keys(&mut self) -> Result<(), PersistenceError>;
}

impl StoreBackend for SqliteConnection {
    fn last_insert_id(&mut self) -> Result<i64, PersistenceError> {
        sqlite::last_insert_id(self)
    }

    fn ensure_foreign_keys(&mut self) -> Result<(), PersistenceError> {
        sqlite::ensure_foreign_keys(self)
    }
}

impl StoreBackend for MysqlConnection {
    fn last_insert_id(&mut self) -> Result<i64, PersistenceError> {
        mysql::last_insert_id(self)
    }

    fn ensure_foreign_keys(&mut self) -> Result<(), PersistenceError> {
        mysql::ensure_foreign_keys(self)
    }
}
