// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wedding assignment status and its lifecycle.
//!
//! An assignment moves from `Pending` to `AssignedToManager`, optionally
//! through `AssignedToProtocol`, and ends at `Completed`. Managers may be
//! re-assigned at any point before completion. Nothing leaves `Completed`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// Freshly created, no manager yet.
    #[default]
    Pending,
    AssignedToManager,
    AssignedToProtocol,
    Completed,
}

impl AssignmentStatus {
    /// Returns the stored representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::AssignedToManager => "ASSIGNED_TO_MANAGER",
            Self::AssignedToProtocol => "ASSIGNED_TO_PROTOCOL",
            Self::Completed => "COMPLETED",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - any non-terminal status → `AssignedToManager` (manager re-delegation
    ///   resets the assignment to the manager stage)
    /// - `AssignedToManager` / `AssignedToProtocol` → `AssignedToProtocol`
    /// - `AssignedToManager` / `AssignedToProtocol` → `Completed`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Pending | Self::AssignedToManager | Self::AssignedToProtocol,
                Self::AssignedToManager
            ) | (
                Self::AssignedToManager | Self::AssignedToProtocol,
                Self::AssignedToProtocol | Self::Completed
            )
        )
    }

    /// Validates a transition, returning the domain error for a rejected edge.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAssignmentTransition` if the edge is not allowed.
    pub const fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(DomainError::InvalidAssignmentTransition {
                from: *self,
                to: target,
            })
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ASSIGNED_TO_MANAGER" => Ok(Self::AssignedToManager),
            "ASSIGNED_TO_PROTOCOL" => Ok(Self::AssignedToProtocol),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidAssignmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
