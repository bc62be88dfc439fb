// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use elegant_events_audit::Cause;
use elegant_events_persistence::Persistence;

use crate::{
    CreateTaskRequest, RegisterUserRequest, RegisterWeddingRequest, register_user,
    register_wedding,
};

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn register_request(identity: &str, role: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        identity: identity.to_string(),
        display_name: format!("{identity} display"),
        role: role.to_string(),
    }
}

pub fn task_request(wedding_id: i64, title: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        wedding_id,
        title: title.to_string(),
        description: None,
        category: None,
        assigned_role: None,
        assigned_protocol_id: None,
        due_date: None,
    }
}

/// Opens an in-memory database with `admin1`, `mgr1`, `mgr2`, `proto1`,
/// `couple1` and a wedding for `couple1`, registered through the API.
///
/// Returns the persistence adapter and the wedding id.
pub fn create_seeded_persistence() -> (Persistence, i64) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for (identity, role) in [
        ("admin1", "ADMIN"),
        ("mgr1", "MANAGER"),
        ("mgr2", "MANAGER"),
        ("proto1", "PROTOCOL"),
        ("couple1", "USER"),
    ] {
        register_user(&mut persistence, register_request(identity, role)).unwrap();
    }

    let response = register_wedding(
        &mut persistence,
        RegisterWeddingRequest {
            couple_identity: String::from("couple1"),
            partners_name: Some(String::from("Alex & Sam")),
            wedding_date: Some(String::from("2026-06-20")),
        },
    )
    .unwrap();
    let wedding_id = response.wedding.wedding_id.unwrap();
    (persistence, wedding_id)
}

/// Seeds the database and assigns `mgr1` to the wedding.
pub fn create_managed_wedding() -> (Persistence, i64) {
    let (mut persistence, wedding_id) = create_seeded_persistence();
    crate::assign_manager(
        &mut persistence,
        wedding_id,
        "mgr1",
        "admin1",
        create_test_cause(),
    )
    .unwrap();
    (persistence, wedding_id)
}
