//! ISO-8601 timestamp representation used for every date on the wire.
//!
//! Timestamps encode as UTC with whole seconds and a `Z` suffix, for example
//! `2024-01-01T00:00:00Z`. Decoding accepts any RFC 3339 timestamp, including
//! fractional seconds and numeric offsets, and normalises it to UTC.
//!
//! Use with `#[serde(with = "crate::codec::iso8601")]` on
//! `DateTime<Utc>` fields.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serializer, de};
use thiserror::Error;

/// A timestamp string that is not valid ISO-8601 / RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ISO-8601 timestamp '{value}': {reason}")]
pub struct TimestampParseError {
    value: String,
    reason: String,
}

/// Format a timestamp in its wire form.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use recipe_kit::codec::iso8601::format_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date");
/// assert_eq!(format_timestamp(&ts), "2024-01-01T00:00:00Z");
/// ```
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a wire timestamp into UTC.
///
/// # Errors
///
/// Returns [`TimestampParseError`] when `raw` is not an RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| TimestampParseError {
            value: raw.to_owned(),
            reason: err.to_string(),
        })
}

/// Drop sub-second precision so a timestamp survives a wire round trip.
#[must_use]
pub fn truncate_to_wire_precision(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(0)
}

/// Current time from `clock`, at wire precision.
pub(crate) fn now(clock: &dyn Clock) -> DateTime<Utc> {
    truncate_to_wire_precision(clock.utc())
}

/// Serde serializer for `#[serde(with = "...")]`.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(value))
}

/// Serde deserializer for `#[serde(with = "...")]`.
///
/// # Errors
///
/// Fails when the input is not a string or not a valid timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}
