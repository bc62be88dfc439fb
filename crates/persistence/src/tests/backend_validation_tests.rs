// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for `MariaDB`/`MySQL`.
//!
//! These cover schema compatibility, not business rules: migrations apply,
//! foreign keys, unique and check constraints are enforced, and the
//! adapter's generated `_mysql` functions work.
//!
//! All tests are `#[ignore]`d and run only via `cargo xtask test-mariadb`,
//! which provides `DATABASE_URL` and `ELEGANT_EVENTS_TEST_BACKEND=mariadb`.
//! They fail fast when that infrastructure is missing.

use diesel::prelude::*;
use std::env;

use crate::Persistence;
use crate::backend::mysql;
use crate::tests::user;
use elegant_events_domain::{Identity, Role, Task, TaskCategory, Wedding};

fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

fn verify_mariadb_test_environment() {
    let backend = env::var("ELEGANT_EVENTS_TEST_BACKEND").expect(
        "ELEGANT_EVENTS_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(backend, "mariadb", "ELEGANT_EVENTS_TEST_BACKEND must be 'mariadb'");
}

/// Unique suffix so repeated runs against the same container do not collide.
fn unique(prefix: &str) -> String {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    format!("{prefix}_{nanos}")
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let result = mysql::initialize_database(&get_mariadb_url());
    assert!(result.is_ok(), "Failed to migrate MariaDB: {:?}", result.err());
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_foreign_key_enforcement() {
    verify_mariadb_test_environment();
    let mut conn = mysql::initialize_database(&get_mariadb_url()).unwrap();
    assert!(mysql::ensure_foreign_keys(&mut conn).is_ok());

    let orphan = diesel::sql_query(
        "INSERT INTO tasks (wedding_id, title, status, category, created_at)
         VALUES (999999, 'Orphan', 'ACCEPTED', 'GENERAL', '2026-01-01T00:00:00Z')",
    )
    .execute(&mut conn);
    assert!(orphan.is_err(), "Task for a missing wedding must be rejected");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_rating_check_constraint() {
    verify_mariadb_test_environment();
    let mut persistence = Persistence::new_with_mysql(&get_mariadb_url()).unwrap();
    let couple = unique("couple");
    persistence.create_user(&user(&couple, Role::User)).unwrap();
    let wedding = persistence
        .create_wedding(&Wedding {
            wedding_id: None,
            couple_identity: Identity::new(&couple),
            partners_name: None,
            wedding_date: None,
        })
        .unwrap();

    let conn = mysql_connection(&mut persistence);
    let result = diesel::sql_query(format!(
        "INSERT INTO wedding_assignments (wedding_id, couple_identity, status, protocol_rating, created_at, updated_at)
         VALUES ({}, '{couple}', 'COMPLETED', 9, 'now', 'now')",
        wedding.wedding_id.unwrap()
    ))
    .execute(conn);
    assert!(result.is_err(), "Rating outside 1-5 must be rejected");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_adapter_round_trip() {
    verify_mariadb_test_environment();
    let mut persistence = Persistence::new_with_mysql(&get_mariadb_url()).unwrap();
    let couple = unique("couple");
    persistence.create_user(&user(&couple, Role::User)).unwrap();
    let wedding = persistence
        .create_wedding(&Wedding {
            wedding_id: None,
            couple_identity: Identity::new(&couple),
            partners_name: Some(String::from("Round Trip")),
            wedding_date: None,
        })
        .unwrap();
    let wedding_id = wedding.wedding_id.unwrap();

    let stored = persistence
        .upsert_task(&Task::new(
            wedding_id,
            String::from("Check-in desk"),
            None,
            TaskCategory::Logistics,
            None,
            None,
            None,
        ))
        .unwrap();
    let loaded = persistence.get_task(stored.task_id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded, stored);

    let duplicate = persistence.create_user(&user(&couple, Role::Manager));
    assert!(duplicate.is_err(), "Duplicate identity must be rejected");
}

/// Borrows the raw `MySQL` connection out of the adapter.
fn mysql_connection(persistence: &mut Persistence) -> &mut diesel::MysqlConnection {
    match &mut persistence.conn {
        crate::BackendConnection::Mysql(conn) => conn,
        crate::BackendConnection::Sqlite(_) => panic!("expected a MySQL connection"),
    }
}
