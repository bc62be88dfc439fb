// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for wedding assignments and tasks.
//!
//! Handlers accept request DTOs and raw identities, run the core commands
//! against [`elegant_events_persistence::Persistence`], record audit events,
//! and translate every failure into an [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod audit_sink;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use audit_sink::{record_audit_event, request_cause};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    accept_task, assign_manager, assign_protocol, assignment_for_couple, assignment_for_wedding,
    assignments_for_manager, assignments_for_protocol, complete_task, complete_wedding,
    create_task, delete_task, get_user, get_wedding, list_assignments, register_user,
    register_wedding, reject_task, tasks_for_protocol, tasks_for_wedding, update_task_status,
    wedding_audit_trail,
};
pub use request_response::{
    AssignmentInfo, AssignmentResponse, AuditEventInfo, CompleteWeddingRequest, CreateTaskRequest,
    DeleteTaskResponse, RegisterUserRequest, RegisterWeddingRequest, RejectTaskRequest, TaskInfo,
    TaskResponse, UpdateTaskStatusRequest, UserInfo, UserResponse, WeddingInfo, WeddingResponse,
};
