// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Every query is generated in `_sqlite` and `_mysql` variants by
//! `backend_fn!`. The `Persistence` adapter in `lib.rs` picks the variant
//! matching the active connection.
//!
//! - `directory`: directory users and weddings
//! - `assignments`: wedding assignments
//! - `tasks`: wedding tasks
//! - `audit`: audit events per wedding

pub mod assignments;
pub mod audit;
pub mod directory;
pub mod tasks;
