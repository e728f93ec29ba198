use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::error::Error as StdError;
use std::fmt;

use crate::models::{IntervalError, RegistrationError, UsernameError};

#[derive(Debug)]
pub enum ServiceError {
    ValidationError(String),
    NotFound(String),
    BackendError(String),
    InternalError(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::BackendError(msg) => write!(f, "Scheduling backend error: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl StdError for ServiceError {}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BackendError(_) => StatusCode::BAD_GATEWAY,
            ServiceError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::ValidationError(msg) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::BackendError(msg) => {
                tracing::error!("Scheduling backend error: {}", msg);
                HttpResponse::BadGateway().json(json!({
                    "success": false,
                    "message": "Scheduling service unavailable, please try again"
                }))
            }
            ServiceError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}

impl From<IntervalError> for ServiceError {
    fn from(err: IntervalError) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<UsernameError> for ServiceError {
    fn from(err: UsernameError) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<RegistrationError> for ServiceError {
    fn from(err: RegistrationError) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::BackendError(err.to_string())
    }
}

impl From<askama::Error> for ServiceError {
    fn from(err: askama::Error) -> Self {
        ServiceError::InternalError(err.to_string())
    }
}
