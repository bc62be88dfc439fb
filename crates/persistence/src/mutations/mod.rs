// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Inserts read back their generated id with `StoreBackend::last_insert_id`;
//! everything else is plain Diesel DSL.
//!
//! - `directory`: directory users and weddings
//! - `assignments`: assignment inserts and updates
//! - `tasks`: task inserts, updates and deletes
//! - `audit`: audit event persistence

pub mod assignments;
pub mod audit;
pub mod directory;
pub mod tasks;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// Current UTC time in the stored timestamp format.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn now_timestamp() -> Result<String, PersistenceError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
