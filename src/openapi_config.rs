use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    ClaimUsernameForm, ClaimUsernameResponse, DefaultIntervalsResponse, ErrorResponse,
    NormalizedInterval, TimeIntervalsForm, TimeIntervalsResponse, WeekdayInterval,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::username::claim_username_api,
        handlers::time_intervals::submit_time_intervals_api,
        handlers::time_intervals::default_time_intervals_api,
    ),
    components(schemas(
        ClaimUsernameForm,
        ClaimUsernameResponse,
        TimeIntervalsForm,
        TimeIntervalsResponse,
        DefaultIntervalsResponse,
        WeekdayInterval,
        NormalizedInterval,
        ErrorResponse,
    )),
    tags(
        (name = "registration", description = "Username claim and availability setup")
    )
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: OpenApiSpec) -> OpenApiSpec {
    openapi.info.title = "Ignite Call".to_string();
    openapi.info.description = Some(
        "Registration endpoints. Availability is validated here and forwarded to the scheduling backend."
            .to_string(),
    );

    openapi
}
