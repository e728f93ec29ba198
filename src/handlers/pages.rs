use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, Result};
use askama::Template;

use crate::models::{
    default_intervals, ClaimUsernameForm, RegisterForm, RegisterQuery, Registration,
    ServiceError, TimeIntervalsPageForm, Username, WeekdayInterval,
};
use crate::services::TimeIntervalService;
use crate::utils::time::{WEEK_DAYS, WEEK_DAY_KEYS};

const REGISTER_STEPS: u8 = 4;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    username: &'a str,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate<'a> {
    username: &'a str,
    name: &'a str,
    error: Option<String>,
    step: u8,
    steps: u8,
}

struct IntervalRow {
    key: &'static str,
    label: &'static str,
    enabled: bool,
    start_time: String,
    end_time: String,
}

#[derive(Template)]
#[template(path = "time_intervals.html")]
struct TimeIntervalsTemplate {
    rows: Vec<IntervalRow>,
    error: Option<String>,
    step: u8,
    steps: u8,
}

#[derive(Template)]
#[template(path = "update_profile.html")]
struct UpdateProfileTemplate {
    step: u8,
    steps: u8,
}

fn render<T: Template>(status: StatusCode, template: &T) -> Result<HttpResponse, ServiceError> {
    let body = template.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn interval_rows(intervals: Vec<WeekdayInterval>) -> Vec<IntervalRow> {
    intervals
        .into_iter()
        .map(|interval| {
            let day = usize::from(interval.week_day);
            IntervalRow {
                key: WEEK_DAY_KEYS[day],
                label: WEEK_DAYS[day],
                enabled: interval.enabled,
                start_time: interval.start_time,
                end_time: interval.end_time,
            }
        })
        .collect()
}

fn time_intervals_page(
    status: StatusCode,
    intervals: Vec<WeekdayInterval>,
    error: Option<String>,
) -> Result<HttpResponse, ServiceError> {
    render(
        status,
        &TimeIntervalsTemplate {
            rows: interval_rows(intervals),
            error,
            step: 3,
            steps: REGISTER_STEPS,
        },
    )
}

pub async fn home() -> Result<HttpResponse, ServiceError> {
    render(
        StatusCode::OK,
        &HomeTemplate {
            username: "",
            error: None,
        },
    )
}

pub async fn claim_username(
    form: web::Form<ClaimUsernameForm>,
) -> Result<HttpResponse, ServiceError> {
    match Username::parse(&form.username) {
        Ok(username) => Ok(see_other(&username.register_path())),
        Err(e) => render(
            StatusCode::BAD_REQUEST,
            &HomeTemplate {
                username: &form.username,
                error: Some(e.to_string()),
            },
        ),
    }
}

pub async fn register_page(
    query: web::Query<RegisterQuery>,
) -> Result<HttpResponse, ServiceError> {
    render(
        StatusCode::OK,
        &RegisterTemplate {
            username: query.username.as_deref().unwrap_or_default(),
            name: "",
            error: None,
            step: 1,
            steps: REGISTER_STEPS,
        },
    )
}

pub async fn submit_register(form: web::Form<RegisterForm>) -> Result<HttpResponse, ServiceError> {
    match Registration::new(&form.username, &form.name) {
        Ok(registration) => {
            tracing::info!("Registration started for {}", registration.username);
            Ok(see_other("/register/time-intervals"))
        }
        Err(e) => render(
            StatusCode::BAD_REQUEST,
            &RegisterTemplate {
                username: &form.username,
                name: &form.name,
                error: Some(e.to_string()),
                step: 1,
                steps: REGISTER_STEPS,
            },
        ),
    }
}

pub async fn time_intervals() -> Result<HttpResponse, ServiceError> {
    time_intervals_page(StatusCode::OK, default_intervals(), None)
}

pub async fn submit_time_intervals(
    interval_service: web::Data<TimeIntervalService>,
    form: web::Form<TimeIntervalsPageForm>,
) -> Result<HttpResponse, ServiceError> {
    let intervals = form.into_inner().into_intervals();

    match interval_service.submit(&intervals).await {
        Ok(_) => Ok(see_other("/register/update-profile")),
        Err(ServiceError::ValidationError(msg)) => {
            time_intervals_page(StatusCode::BAD_REQUEST, intervals, Some(msg))
        }
        Err(e) => Err(e),
    }
}

pub async fn update_profile() -> Result<HttpResponse, ServiceError> {
    render(
        StatusCode::OK,
        &UpdateProfileTemplate {
            step: 4,
            steps: REGISTER_STEPS,
        },
    )
}
