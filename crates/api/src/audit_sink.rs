// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fire-and-forget audit recording and request causes.

use elegant_events::AuditSink;
use elegant_events_audit::{AuditEvent, Cause};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static CAUSE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Builds the cause attached to every audit event produced by one request.
#[must_use]
pub fn request_cause(description: &str) -> Cause {
    let id = CAUSE_COUNTER.fetch_add(1, Ordering::Relaxed);
    Cause::new(format!("api-req-{id}"), description.to_string())
}

/// Records an audit event without letting a failure reach the caller.
///
/// The operation that produced the event has already been stored when this
/// runs. A sink failure is logged and `None` is returned.
pub fn record_audit_event<S: AuditSink + ?Sized>(sink: &mut S, event: &AuditEvent) -> Option<i64> {
    match sink.record_event(event) {
        Ok(stored) => {
            debug!(
                event_id = ?stored.event_id,
                action = %event.action.name,
                wedding_id = event.subject.wedding_id,
                "Recorded audit event"
            );
            stored.event_id
        }
        Err(err) => {
            warn!(
                error = %err,
                action = %event.action.name,
                wedding_id = event.subject.wedding_id,
                "Failed to record audit event"
            );
            None
        }
    }
}
