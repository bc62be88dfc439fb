// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use elegant_events_domain::Identity;

/// A request to change a wedding assignment, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentCommand {
    /// Assign (or re-assign) the wedding's manager. Admin only.
    AssignManager {
        wedding_id: i64,
        manager: Identity,
        acting_admin: Identity,
    },
    /// Delegate the wedding to a protocol officer. Owning manager only.
    AssignProtocol {
        wedding_id: i64,
        protocol: Identity,
        acting_manager: Identity,
        protocol_job: Option<String>,
    },
    /// Close the wedding and rate the protocol officer. Owning manager only.
    Complete {
        wedding_id: i64,
        acting_manager: Identity,
        /// Raw rating as supplied by the caller; validated to 1 through 5.
        rating: i64,
        feedback: Option<String>,
    },
}

/// A request to create or change a task, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Create {
        wedding_id: i64,
        title: String,
        description: Option<String>,
        /// Category name; anything unrecognised becomes `GENERAL`.
        category: Option<String>,
        assigned_role: Option<String>,
        assigned_protocol_id: Option<i64>,
        /// ISO-8601 offset or local date-time.
        due_date: Option<String>,
    },
    Accept {
        task_id: i64,
    },
    Reject {
        task_id: i64,
        reason: Option<String>,
    },
    Complete {
        task_id: i64,
    },
    /// Set any status by name, bypassing the lifecycle.
    UpdateStatus {
        task_id: i64,
        status: String,
    },
}
