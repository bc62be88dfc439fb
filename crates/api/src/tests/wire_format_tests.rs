// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_managed_wedding, create_test_cause, task_request};
use crate::{CreateTaskRequest, RejectTaskRequest, assignment_for_wedding, create_task};
use serde_json::{Value, json};

#[test]
fn test_assignment_read_model_uses_camel_case() {
    let (mut persistence, wedding_id) = create_managed_wedding();
    let assignment = assignment_for_wedding(&mut persistence, wedding_id).unwrap();

    let value: Value = serde_json::to_value(&assignment).unwrap();

    assert_eq!(value["weddingId"], wedding_id);
    assert_eq!(value["managerIdentity"], "mgr1");
    assert_eq!(value["status"], "ASSIGNED_TO_MANAGER");
    assert!(value["protocolIdentity"].is_null());
    assert!(value.get("wedding_id").is_none());
}

#[test]
fn test_success_envelope_omits_error() {
    let (mut persistence, wedding_id) = create_managed_wedding();
    let response = create_task(
        &mut persistence,
        task_request(wedding_id, "Seat guests"),
        None,
        create_test_cause(),
    )
    .unwrap();

    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["task"]["title"], "Seat guests");
    assert!(value.get("error").is_none());
}

#[test]
fn test_create_task_request_accepts_minimal_body() {
    let request: CreateTaskRequest =
        serde_json::from_value(json!({ "weddingId": 42, "title": "Cake" })).unwrap();

    assert_eq!(request.wedding_id, 42);
    assert!(request.assigned_protocol_id.is_none());
    assert!(request.due_date.is_none());

    let reject: RejectTaskRequest = serde_json::from_value(json!({})).unwrap();
    assert!(reject.reason.is_none());
}
