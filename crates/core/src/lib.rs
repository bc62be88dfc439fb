// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod assignment;
mod authorization;
mod command;
mod directory;
mod error;
mod state;
mod store;
mod task;

#[cfg(test)]
mod tests;

pub use assignment::apply_assignment;
pub use authorization::{actor_for, authorize_actor, require_target_role, resolve_actor};
pub use command::{AssignmentCommand, TaskCommand};
pub use directory::{register_user, register_wedding};
pub use error::CoreError;
pub use state::{AssignmentTransition, TaskTransition};
pub use store::{AssignmentRepository, AuditSink, IdentityDirectory, TaskRepository, WeddingRegistry};
pub use task::{OUTSIDE_LIFECYCLE, apply_task, delete_task};
