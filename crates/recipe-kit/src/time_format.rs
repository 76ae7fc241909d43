//! Human-readable durations and timestamps for client display.
//!
//! All timestamps are rendered in UTC with English month names.

use chrono::{DateTime, Utc};
use mockable::Clock;

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;
const WEEKS_PER_MONTH: i64 = 4;
const MONTHS_PER_YEAR: i64 = 12;

/// Whole units of `divisor` in `value`, truncating toward zero.
fn whole(value: i64, divisor: i64) -> i64 {
    value.checked_div(divisor).unwrap_or(0)
}

/// Format a number of minutes as `"2h 5m"`, `"2h"` or `"45m"`.
///
/// # Examples
/// ```
/// use recipe_kit::time_format::format_duration_minutes;
///
/// assert_eq!(format_duration_minutes(125), "2h 5m");
/// assert_eq!(format_duration_minutes(120), "2h");
/// assert_eq!(format_duration_minutes(45), "45m");
/// ```
#[must_use]
pub fn format_duration_minutes(total: i64) -> String {
    let hours = whole(total, MINUTES_PER_HOUR);
    let minutes = total.checked_rem(MINUTES_PER_HOUR).unwrap_or(0);
    match (hours > 0, minutes > 0) {
        (true, true) => format!("{hours}h {minutes}m"),
        (true, false) => format!("{hours}h"),
        _ => format!("{minutes}m"),
    }
}

/// Medium date with short time, for example `"Jan 14, 2024 at 10:30 AM"`.
#[must_use]
pub fn display_format(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y at %-I:%M %p").to_string()
}

/// Medium date without time, for example `"Jan 14, 2024"`.
#[must_use]
pub fn short_date_format(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Describe how long ago `timestamp` was relative to `now`.
///
/// Months are 30 days and years 365 days. Anything at most one second old,
/// including future timestamps, is `"just now"`.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use recipe_kit::time_format::relative_format;
///
/// let now = Utc::now();
/// assert_eq!(relative_format(&(now - Duration::hours(2)), &now), "2 hours ago");
/// assert_eq!(relative_format(&(now - Duration::days(1)), &now), "1 day ago");
/// ```
#[must_use]
pub fn relative_format(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds();
    let minutes = whole(seconds, SECONDS_PER_MINUTE);
    let hours = whole(minutes, MINUTES_PER_HOUR);
    let days = whole(hours, HOURS_PER_DAY);
    let weeks = whole(days, DAYS_PER_WEEK);
    let months = whole(days, DAYS_PER_MONTH);
    let years = whole(days, DAYS_PER_YEAR);

    if seconds < SECONDS_PER_MINUTE {
        if seconds <= 1 {
            return "just now".to_owned();
        }
        return format!("{seconds} seconds ago");
    }
    if minutes < MINUTES_PER_HOUR {
        return ago(minutes, "minute");
    }
    if hours < HOURS_PER_DAY {
        return ago(hours, "hour");
    }
    if days < DAYS_PER_WEEK {
        return ago(days, "day");
    }
    if weeks < WEEKS_PER_MONTH {
        return ago(weeks, "week");
    }
    if months < MONTHS_PER_YEAR {
        return ago(months, "month");
    }
    ago(years, "year")
}

/// [`relative_format`] against the current time of `clock`.
#[must_use]
pub fn relative_format_with_clock(timestamp: &DateTime<Utc>, clock: &dyn Clock) -> String {
    relative_format(timestamp, &clock.utc())
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
