// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_seeded_persistence, register_request};
use crate::{ApiError, RegisterWeddingRequest, get_user, get_wedding, register_user, register_wedding};
use elegant_events_persistence::Persistence;

#[test]
fn test_register_user_normalizes_role() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let response = register_user(&mut persistence, register_request("vendor1", "vendor")).unwrap();

    assert!(response.success);
    assert!(response.user.user_id.is_some());
    assert_eq!(response.user.role, "VENDOR");
    assert_eq!(get_user(&mut persistence, "vendor1").unwrap(), response.user);
}

#[test]
fn test_register_user_rejects_bad_input() {
    let (mut persistence, _) = create_seeded_persistence();

    let cases = [
        (register_request("   ", "ADMIN"), "identity"),
        (register_request("admin1", "ADMIN"), "identity"),
        (register_request("new1", "WIZARD"), "role"),
    ];
    for (request, expected_field) in cases {
        match register_user(&mut persistence, request) {
            Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInput on {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_user_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(matches!(
        get_user(&mut persistence, "ghost"),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_registered_wedding_can_be_read_back() {
    let (mut persistence, wedding_id) = create_seeded_persistence();

    let wedding = get_wedding(&mut persistence, wedding_id).unwrap();

    assert_eq!(wedding.couple_identity, "couple1");
    assert_eq!(wedding.partners_name.as_deref(), Some("Alex & Sam"));
    assert_eq!(wedding.wedding_date.as_deref(), Some("2026-06-20"));
}

#[test]
fn test_register_wedding_failures() {
    let (mut persistence, _) = create_seeded_persistence();
    register_user(&mut persistence, register_request("couple2", "USER")).unwrap();

    let duplicate = register_wedding(
        &mut persistence,
        RegisterWeddingRequest {
            couple_identity: String::from("couple1"),
            partners_name: None,
            wedding_date: None,
        },
    );
    match duplicate {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "coupleIdentity"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let unknown_couple = register_wedding(
        &mut persistence,
        RegisterWeddingRequest {
            couple_identity: String::from("stranger"),
            partners_name: None,
            wedding_date: None,
        },
    );
    assert!(matches!(
        unknown_couple,
        Err(ApiError::ResourceNotFound { .. })
    ));

    let bad_date = register_wedding(
        &mut persistence,
        RegisterWeddingRequest {
            couple_identity: String::from("couple2"),
            partners_name: None,
            wedding_date: Some(String::from("20/06/2026")),
        },
    );
    match bad_date {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "weddingDate"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_missing_wedding_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(matches!(
        get_wedding(&mut persistence, 1),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
