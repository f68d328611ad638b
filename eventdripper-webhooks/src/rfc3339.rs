//! RFC 3339 timestamp parsing

use chrono::{DateTime, ParseError, Utc};

/// Parse an RFC 3339 timestamp into a UTC instant.
///
/// Fractional seconds are optional and kept at full precision. Both `Z` and
/// explicit `+hh:mm`/`-hh:mm` offsets are accepted; the result is normalized
/// to UTC.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}
