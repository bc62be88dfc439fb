// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_seeded_store;
use crate::{CoreError, register_user, register_wedding};
use elegant_events_domain::{DomainError, Identity, Role};
use time::macros::date;

#[test]
fn test_register_user_assigns_id() {
    let mut store = create_seeded_store();

    let user = register_user(&mut store, "vendor1", String::from("Florist"), Role::Vendor).unwrap();

    assert!(user.user_id.is_some());
    assert_eq!(user.role, Role::Vendor);
}

#[test]
fn test_register_user_rejects_duplicate_and_blank() {
    let mut store = create_seeded_store();

    assert_eq!(
        register_user(&mut store, "mgr1", String::from("Again"), Role::Manager),
        Err(CoreError::DomainViolation(DomainError::DuplicateIdentity(
            String::from("mgr1")
        )))
    );
    assert!(matches!(
        register_user(&mut store, " ", String::from("Blank"), Role::User),
        Err(CoreError::DomainViolation(DomainError::InvalidIdentity(_)))
    ));
}

#[test]
fn test_register_wedding_requires_known_couple() {
    let mut store = create_seeded_store();

    let result = register_wedding(&mut store, &Identity::new("stranger"), None, None);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UserNotFound(
            String::from("stranger")
        )))
    );
}

#[test]
fn test_register_wedding_one_per_couple() {
    let mut store = create_seeded_store();
    store.add_user("couple2", Role::User);

    let wedding = register_wedding(
        &mut store,
        &Identity::new("couple2"),
        Some(String::from("Ana & Ben")),
        Some(date!(2026 - 09 - 12)),
    )
    .unwrap();
    assert!(wedding.wedding_id.is_some());

    assert!(matches!(
        register_wedding(&mut store, &Identity::new("couple2"), None, None),
        Err(CoreError::DomainViolation(DomainError::DuplicateCoupleWedding(_)))
    ));
}
