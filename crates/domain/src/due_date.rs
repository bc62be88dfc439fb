// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parses a task due date.
///
/// An offset date-time (`2026-06-20T14:00:00+02:00`) is tried first and
/// normalized to UTC. Otherwise the value is read as a local date-time, with
/// or without seconds and fractional seconds.
///
/// # Errors
///
/// Returns `DomainError::InvalidDueDate` if no format matches.
pub fn parse_due_date(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    let value = value.trim();

    if let Ok(offset) = OffsetDateTime::parse(value, &Rfc3339) {
        let utc = offset.to_offset(UtcOffset::UTC);
        return Ok(PrimitiveDateTime::new(utc.date(), utc.time()));
    }

    let with_subsecond =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let minutes_only = format_description!("[year]-[month]-[day]T[hour]:[minute]");

    PrimitiveDateTime::parse(value, with_subsecond)
        .or_else(|_| PrimitiveDateTime::parse(value, with_seconds))
        .or_else(|_| PrimitiveDateTime::parse(value, minutes_only))
        .map_err(|_| DomainError::InvalidDueDate(value.to_string()))
}

/// Formats a due date in the stored representation (`YYYY-MM-DDTHH:MM:SS`).
///
/// Fractional seconds are written only when non-zero.
///
/// # Errors
///
/// Returns `DomainError::InvalidDueDate` if the value cannot be formatted.
pub fn format_due_date(value: PrimitiveDateTime) -> Result<String, DomainError> {
    let formatted = if value.nanosecond() == 0 {
        value.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        ))
    } else {
        value.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"
        ))
    };
    formatted.map_err(|e| DomainError::InvalidDueDate(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_offset_date_time_is_normalized_to_utc() {
        let parsed = parse_due_date("2026-06-20T14:00:00+02:00").unwrap();
        assert_eq!(parsed, datetime!(2026-06-20 12:00:00));
    }

    #[test]
    fn test_local_date_time_falls_back() {
        assert_eq!(
            parse_due_date("2026-06-20T09:30:00").unwrap(),
            datetime!(2026-06-20 09:30:00)
        );
        assert_eq!(
            parse_due_date("2026-06-20T09:30").unwrap(),
            datetime!(2026-06-20 09:30:00)
        );
        assert_eq!(
            parse_due_date("2026-06-20T09:30:15.250").unwrap(),
            datetime!(2026-06-20 09:30:15.25)
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(
            parse_due_date("next tuesday"),
            Err(DomainError::InvalidDueDate(String::from("next tuesday")))
        );
    }

    #[test]
    fn test_stored_format_round_trips() {
        let stored = format_due_date(datetime!(2026-06-20 09:30:00)).unwrap();
        assert_eq!(stored, "2026-06-20T09:30:00");
        assert_eq!(parse_due_date(&stored).unwrap(), datetime!(2026-06-20 09:30:00));
    }

    #[test]
    fn test_fractional_seconds_survive_storage() {
        let parsed = parse_due_date("2026-06-20T09:30:15.750").unwrap();
        let stored = format_due_date(parsed).unwrap();
        assert_eq!(stored, "2026-06-20T09:30:15.75");
        assert_eq!(parse_due_date(&stored).unwrap(), parsed);
    }
}
