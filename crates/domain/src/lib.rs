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

mod assignment_status;
mod due_date;
mod error;
mod role;
mod task_status;
mod types;

#[cfg(test)]
mod tests;

pub use assignment_status::AssignmentStatus;
pub use due_date::{format_due_date, parse_due_date};
pub use error::{DomainError, ErrorKind};
pub use role::{Identity, Role};
pub use task_status::{TaskCategory, TaskStatus};
pub use types::{DirectoryUser, ProtocolRating, Task, Wedding, WeddingAssignment};
