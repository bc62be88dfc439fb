// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task status, task category, and the task lifecycle.
//!
//! The documented lifecycle is:
//!
//! ```text
//! PendingAcceptance -> Accepted | Rejected
//! Accepted          -> InProgress | Completed | Cancelled
//! InProgress        -> Completed | Cancelled
//! Rejected          -> Accepted
//! ```
//!
//! `Completed` and `Cancelled` are terminal. Task operations are permissive:
//! they may take edges outside this graph, and callers use
//! [`TaskStatus::is_lifecycle_edge`] to detect and report that.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Legacy alias of `PendingAcceptance`, still found in older rows.
    Pending,
    PendingAcceptance,
    Accepted,
    Rejected,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Returns the stored representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::PendingAcceptance => "PENDING_ACCEPTANCE",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Folds the legacy alias onto its modern status.
    #[must_use]
    pub const fn canonical(self) -> Self {
        match self {
            Self::Pending => Self::PendingAcceptance,
            other => other,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if moving from this status to `target` follows the
    /// documented lifecycle. Staying in the same status counts as following it.
    #[must_use]
    pub const fn is_lifecycle_edge(self, target: Self) -> bool {
        let from = self.canonical();
        let to = target.canonical();
        if from as u8 == to as u8 {
            return true;
        }
        matches!(
            (from, to),
            (Self::PendingAcceptance, Self::Accepted | Self::Rejected)
                | (
                    Self::Accepted,
                    Self::InProgress | Self::Completed | Self::Cancelled
                )
                | (Self::InProgress, Self::Completed | Self::Cancelled)
                | (Self::Rejected, Self::Accepted)
        )
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    /// Parses a status name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PENDING_ACCEPTANCE" => Ok(Self::PendingAcceptance),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidTaskStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of wedding-day work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskCategory {
    #[default]
    General,
    Vip,
    Logistics,
    Catering,
    Security,
    QrCode,
    Other,
}

impl TaskCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Vip => "VIP",
            Self::Logistics => "LOGISTICS",
            Self::Catering => "CATERING",
            Self::Security => "SECURITY",
            Self::QrCode => "QR_CODE",
            Self::Other => "OTHER",
        }
    }

    /// Matches a category name case-insensitively, falling back to `General`
    /// for anything unrecognised (including a missing value).
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("VIP") => Self::Vip,
            Some("LOGISTICS") => Self::Logistics,
            Some("CATERING") => Self::Catering,
            Some("SECURITY") => Self::Security,
            Some("QR_CODE") => Self::QrCode,
            Some("OTHER") => Self::Other,
            _ => Self::General,
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
