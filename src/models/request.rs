use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::intervals::{WeekdayInterval, DEFAULT_END_TIME, DEFAULT_START_TIME};

#[derive(Deserialize, ToSchema)]
pub struct ClaimUsernameForm {
    #[schema(example = "jane-doe")]
    pub username: String,
}

#[derive(Deserialize)]
pub struct RegisterQuery {
    pub username: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub name: String,
}

/// JSON submission of the availability form, one entry per weekday.
#[derive(Deserialize, ToSchema)]
pub struct TimeIntervalsForm {
    pub intervals: Vec<WeekdayInterval>,
}

/// The availability page posted as an HTML form.
///
/// Checkboxes are only sent when ticked and disabled time inputs are not sent
/// at all, so every field is optional.
#[derive(Deserialize, Default)]
pub struct TimeIntervalsPageForm {
    pub sunday_enabled: Option<String>,
    pub sunday_start_time: Option<String>,
    pub sunday_end_time: Option<String>,

    pub monday_enabled: Option<String>,
    pub monday_start_time: Option<String>,
    pub monday_end_time: Option<String>,

    pub tuesday_enabled: Option<String>,
    pub tuesday_start_time: Option<String>,
    pub tuesday_end_time: Option<String>,

    pub wednesday_enabled: Option<String>,
    pub wednesday_start_time: Option<String>,
    pub wednesday_end_time: Option<String>,

    pub thursday_enabled: Option<String>,
    pub thursday_start_time: Option<String>,
    pub thursday_end_time: Option<String>,

    pub friday_enabled: Option<String>,
    pub friday_start_time: Option<String>,
    pub friday_end_time: Option<String>,

    pub saturday_enabled: Option<String>,
    pub saturday_start_time: Option<String>,
    pub saturday_end_time: Option<String>,
}

impl TimeIntervalsPageForm {
    pub fn into_intervals(self) -> Vec<WeekdayInterval> {
        vec![
            slot(0, self.sunday_enabled, self.sunday_start_time, self.sunday_end_time),
            slot(1, self.monday_enabled, self.monday_start_time, self.monday_end_time),
            slot(2, self.tuesday_enabled, self.tuesday_start_time, self.tuesday_end_time),
            slot(3, self.wednesday_enabled, self.wednesday_start_time, self.wednesday_end_time),
            slot(4, self.thursday_enabled, self.thursday_start_time, self.thursday_end_time),
            slot(5, self.friday_enabled, self.friday_start_time, self.friday_end_time),
            slot(6, self.saturday_enabled, self.saturday_start_time, self.saturday_end_time),
        ]
    }
}

fn slot(
    week_day: u8,
    enabled: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
) -> WeekdayInterval {
    let enabled = enabled.is_some();

    // A missing time on an enabled day must still reach the validator.
    let fill = |value: Option<String>, default: &str| match value {
        Some(value) => value,
        None if enabled => String::new(),
        None => default.to_string(),
    };

    WeekdayInterval {
        week_day,
        enabled,
        start_time: fill(start_time, DEFAULT_START_TIME),
        end_time: fill(end_time, DEFAULT_END_TIME),
    }
}
