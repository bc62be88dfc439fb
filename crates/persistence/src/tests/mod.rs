// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod backend_validation_tests;

use crate::Persistence;
use elegant_events_audit::{Actor, Cause};
use elegant_events_domain::{DirectoryUser, Identity, Role, Wedding};
use time::macros::date;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin1"), String::from("ADMIN"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn user(identity: &str, role: Role) -> DirectoryUser {
    DirectoryUser::new(Identity::new(identity), format!("{identity} display"), role)
}

/// Opens an in-memory database holding `admin1`, `mgr1`, `mgr2`, `proto1`
/// and `couple1`, plus one wedding owned by `couple1`.
///
/// Returns the persistence adapter and the wedding id.
pub fn create_seeded_persistence() -> (Persistence, i64) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for (identity, role) in [
        ("admin1", Role::Admin),
        ("mgr1", Role::Manager),
        ("mgr2", Role::Manager),
        ("proto1", Role::Protocol),
        ("couple1", Role::User),
    ] {
        persistence.create_user(&user(identity, role)).unwrap();
    }

    let wedding = persistence
        .create_wedding(&Wedding {
            wedding_id: None,
            couple_identity: Identity::new("couple1"),
            partners_name: Some(String::from("Alex & Sam")),
            wedding_date: Some(date!(2026 - 06 - 20)),
        })
        .unwrap();
    let wedding_id = wedding.wedding_id.unwrap();
    (persistence, wedding_id)
}

/// Returns the stored id of a seeded user.
pub fn user_id(persistence: &mut Persistence, identity: &str) -> i64 {
    persistence
        .get_user_by_identity(identity)
        .unwrap()
        .and_then(|u| u.user_id)
        .unwrap()
}
