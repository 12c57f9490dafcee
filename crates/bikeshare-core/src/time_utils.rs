//! Timestamp parsing and derivation helpers for the city CSVs.

use chrono::NaiveDateTime;

use crate::error::{ExplorerError, Result};

/// Accepted timestamp shapes, tried in order.
///
/// The published files use `"2017-01-01 00:07:57"`; the ISO-8601 `T`
/// separator and a seconds-less variant are accepted as well.
const FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a trip timestamp against the accepted formats.
///
/// Returns [`ExplorerError::TimestampParse`] carrying the offending text
/// when no format matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    Err(ExplorerError::TimestampParse(value.to_string()))
}

/// Full month name ("January" … "December") for a timestamp.
pub fn month_name(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%B").to_string()
}

/// Full weekday name ("Sunday" … "Saturday") for a timestamp.
pub fn weekday_name(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%A").to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
