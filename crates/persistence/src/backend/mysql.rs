// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `MySQL`/`MariaDB` connection setup.
//!
//! Standard tests never touch this backend. The validation tests in
//! `tests/backend_validation_tests.rs` are `#[ignore]`d and run through
//! `cargo xtask test-mariadb`, which starts a `MariaDB` container and sets
//! `DATABASE_URL` and `ELEGANT_EVENTS_TEST_BACKEND=mariadb`.
//!
//! `migrations_mysql/` must stay schema-equivalent to `migrations/`: same
//! tables, columns, constraints, foreign keys and indexes in
//! backend-appropriate syntax. Change both directories together.

use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

#[derive(QueryableByName)]
struct ForeignKeyCheck {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// `MySQL` migrations (`InnoDB`, `AUTO_INCREMENT`, `VARCHAR` keys).
pub const MYSQL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

/// `LAST_INSERT_ID()` for this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_id(conn: &mut MysqlConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("LAST_INSERT_ID()")).get_result(conn)?)
}

/// Connects to `MySQL`/`MariaDB` and applies pending migrations.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<MysqlConnection, PersistenceError> {
    info!("Opening MySQL wedding store");

    let mut conn: MysqlConnection = MysqlConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Brings the schema up to date with `migrations_mysql/`.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub fn run_migrations(
    conn: &mut MysqlConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Applying MySQL migrations");
    conn.run_pending_migrations(MYSQL_MIGRATIONS)?;
    Ok(())
}

/// Verifies that `@@foreign_key_checks` is on.
///
/// # Errors
///
/// Returns an error if the check fails or enforcement is off.
pub fn ensure_foreign_keys(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    let check: ForeignKeyCheck = diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks")
        .get_result(conn)
        .map_err(|e| {
            PersistenceError::QueryFailed(format!("@@foreign_key_checks: {e}"))
        })?;

    if check.fk_checks != 1 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    info!("MySQL foreign keys enforced");
    Ok(())
}
