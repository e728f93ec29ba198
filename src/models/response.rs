use serde::Serialize;
use utoipa::ToSchema;

use crate::models::intervals::{NormalizedInterval, WeekdayInterval};

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ClaimUsernameResponse {
    pub success: bool,
    pub username: String,
    pub redirect: String,
}

#[derive(Serialize, ToSchema)]
pub struct TimeIntervalsResponse {
    pub success: bool,
    pub intervals: Vec<NormalizedInterval>,
}

#[derive(Serialize, ToSchema)]
pub struct DefaultIntervalsResponse {
    pub intervals: Vec<WeekdayInterval>,
}
