use chrono::{NaiveTime, Timelike};

use crate::models::IntervalError;

/// Weekday labels indexed by weekday number (Sunday = 0).
pub const WEEK_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Form field prefixes indexed by weekday number.
pub const WEEK_DAY_KEYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

pub fn week_days() -> [&'static str; 7] {
    WEEK_DAYS
}

/// Converts a 24-hour "HH:MM" string into minutes since midnight.
///
/// Only the exact two-digit form is accepted; anything else is reported as
/// [`IntervalError::MalformedTime`] instead of being clamped.
pub fn convert_time_string_to_minutes(time: &str) -> Result<u16, IntervalError> {
    let bytes = time.as_bytes();
    let well_shaped = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());

    if !well_shaped {
        return Err(IntervalError::MalformedTime(time.to_string()));
    }

    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| IntervalError::MalformedTime(time.to_string()))?;

    Ok((parsed.hour() * 60 + parsed.minute()) as u16)
}
