use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::models::{
    default_intervals, DefaultIntervalsResponse, ErrorResponse, ServiceError, TimeIntervalsForm,
    TimeIntervalsResponse,
};
use crate::services::TimeIntervalService;

#[utoipa::path(
    post,
    path = "/api/users/time-intervals",
    request_body = TimeIntervalsForm,
    responses(
        (status = 200, description = "Intervals validated and forwarded", body = TimeIntervalsResponse),
        (status = 400, description = "Invalid availability", body = ErrorResponse),
        (status = 502, description = "Scheduling backend unavailable", body = ErrorResponse)
    )
)]
pub async fn submit_time_intervals_api(
    interval_service: web::Data<TimeIntervalService>,
    form: web::Json<TimeIntervalsForm>,
) -> Result<HttpResponse, ServiceError> {
    // Business logic delegation
    let intervals = interval_service.submit(&form.intervals).await?;

    Ok(HttpResponse::Ok().json(TimeIntervalsResponse {
        success: true,
        intervals,
    }))
}

#[utoipa::path(
    get,
    path = "/api/time-intervals/defaults",
    responses(
        (status = 200, description = "Initial availability form values", body = DefaultIntervalsResponse)
    )
)]
pub async fn default_time_intervals_api() -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(DefaultIntervalsResponse {
        intervals: default_intervals(),
    }))
}
