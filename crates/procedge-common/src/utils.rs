//! Procedge Utils - Utility Functions
//!
//! Timestamp parsing for `dateModified` comparison. Stored documents carry
//! ISO timestamps in several shapes (offset-qualified, naive, bare date);
//! version resolution compares them by parsed instant, not lexicographically.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// =============================================================================
// Timestamp Parsing
// =============================================================================

/// Parse a `dateModified` value into a comparable instant.
///
/// Accepts RFC 3339 (`2020-01-01T12:00:00.123456+02:00`), naive datetimes,
/// and bare dates (midnight). Naive values are taken as UTC. Returns `None`
/// for anything else; callers treat an unparseable timestamp as unordered.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

// =============================================================================
// Tests
// =============================================================================
