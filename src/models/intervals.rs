use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::utils::time::convert_time_string_to_minutes;

pub const WEEK_LENGTH: usize = 7;
pub const MIN_INTERVAL_MINUTES: i32 = 60;
pub const DEFAULT_START_TIME: &str = "08:00";
pub const DEFAULT_END_TIME: &str = "18:00";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("at least one weekday must be selected")]
    NoEnabledDays,
    #[error("end time must be at least 1 hour after start time")]
    IntervalTooShort,
    #[error("malformed time '{0}', expected HH:MM")]
    MalformedTime(String),
    #[error("expected 7 weekday slots, got {0}")]
    WrongSlotCount(usize),
    #[error("weekday {0} is out of range 0-6")]
    WeekdayOutOfRange(i64),
    #[error("slot {index} holds weekday {week_day}")]
    SlotMismatch { index: usize, week_day: u8 },
}

/// One weekday slot as edited on the availability form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayInterval {
    #[serde(alias = "weekday", deserialize_with = "deserialize_week_day")]
    pub week_day: u8,
    pub enabled: bool,
    #[schema(example = "08:00")]
    pub start_time: String,
    #[schema(example = "18:00")]
    pub end_time: String,
}

impl WeekdayInterval {
    pub fn new(week_day: u8, enabled: bool, start_time: &str, end_time: &str) -> Self {
        Self {
            week_day,
            enabled,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

/// Reads any integer so that negative or oversized weekdays are reported as
/// out of range instead of as a type mismatch.
fn deserialize_week_day<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let week_day = i64::deserialize(deserializer)?;
    u8::try_from(week_day)
        .map_err(|_| de::Error::custom(IntervalError::WeekdayOutOfRange(week_day)))
}

/// An enabled weekday expressed in minutes since midnight, as the scheduling
/// backend expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInterval {
    pub week_day: u8,
    #[serde(rename = "startTimeInMinutes")]
    pub start_minutes: u16,
    #[serde(rename = "endTimeInMinutes")]
    pub end_minutes: u16,
}

impl NormalizedInterval {
    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end_minutes) - i32::from(self.start_minutes)
    }
}

/// Form defaults: 08:00-18:00 every day, Monday to Friday enabled.
pub fn default_intervals() -> Vec<WeekdayInterval> {
    (0..WEEK_LENGTH as u8)
        .map(|week_day| {
            let enabled = (1..=5).contains(&week_day);
            WeekdayInterval::new(week_day, enabled, DEFAULT_START_TIME, DEFAULT_END_TIME)
        })
        .collect()
}

/// Rejects submissions that are not exactly one slot per weekday, in order.
pub fn check_week_shape(intervals: &[WeekdayInterval]) -> Result<(), IntervalError> {
    if intervals.len() != WEEK_LENGTH {
        return Err(IntervalError::WrongSlotCount(intervals.len()));
    }

    for (index, interval) in intervals.iter().enumerate() {
        if usize::from(interval.week_day) >= WEEK_LENGTH {
            return Err(IntervalError::WeekdayOutOfRange(i64::from(interval.week_day)));
        }
        if usize::from(interval.week_day) != index {
            return Err(IntervalError::SlotMismatch {
                index,
                week_day: interval.week_day,
            });
        }
    }

    Ok(())
}

pub fn filter_enabled(intervals: &[WeekdayInterval]) -> Vec<&WeekdayInterval> {
    intervals.iter().filter(|interval| interval.enabled).collect()
}

pub fn require_enabled_days<'a>(
    enabled: Vec<&'a WeekdayInterval>,
) -> Result<Vec<&'a WeekdayInterval>, IntervalError> {
    if enabled.is_empty() {
        return Err(IntervalError::NoEnabledDays);
    }
    Ok(enabled)
}

/// Converts every enabled slot, then fails the whole batch if any of them is
/// shorter than an hour. No partial result is ever returned.
pub fn normalize(enabled: &[&WeekdayInterval]) -> Result<Vec<NormalizedInterval>, IntervalError> {
    let normalized = enabled
        .iter()
        .map(|interval| -> Result<NormalizedInterval, IntervalError> {
            Ok(NormalizedInterval {
                week_day: interval.week_day,
                start_minutes: convert_time_string_to_minutes(&interval.start_time)?,
                end_minutes: convert_time_string_to_minutes(&interval.end_time)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if normalized
        .iter()
        .any(|interval| interval.duration_minutes() < MIN_INTERVAL_MINUTES)
    {
        return Err(IntervalError::IntervalTooShort);
    }

    Ok(normalized)
}

/// Full availability pipeline: filter, require at least one day, convert and
/// check durations.
pub fn validate_intervals(
    intervals: &[WeekdayInterval],
) -> Result<Vec<NormalizedInterval>, IntervalError> {
    let enabled = require_enabled_days(filter_enabled(intervals))?;
    normalize(&enabled)
}
