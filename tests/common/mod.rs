use actix_web::{web, App};
use std::sync::Arc;
use ignite_call_rust::{
    handlers,
    models::WeekdayInterval,
    services::{RecordingBackend, TimeIntervalService},
};

pub struct TestApp {
    pub backend: Arc<RecordingBackend>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            backend: Arc::new(RecordingBackend::new()),
        }
    }

    /// An app whose scheduling backend rejects every submission.
    #[allow(dead_code)]
    pub fn with_unavailable_backend() -> Self {
        Self {
            backend: Arc::new(RecordingBackend::unavailable()),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let interval_service =
            web::Data::new(TimeIntervalService::new(self.backend.clone()));

        App::new()
            .app_data(interval_service)
            .configure(handlers::configure_routes)
    }
}

/// Seven slots with the given days enabled at `start`-`end`.
#[allow(dead_code)]
pub fn week(enabled_days: &[u8], start: &str, end: &str) -> Vec<WeekdayInterval> {
    (0..7)
        .map(|day| WeekdayInterval::new(day, enabled_days.contains(&day), start, end))
        .collect()
}
