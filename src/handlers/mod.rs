pub mod pages;
pub mod time_intervals;
pub mod username;

// Re-export all handler functions for easy importing
pub use pages::*;
pub use time_intervals::*;
pub use username::*;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::models::ServiceError;

/// Pages and JSON endpoints. Static files and Swagger UI are mounted by the
/// binary.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/", web::get().to(home))
        .route("/claim-username", web::post().to(claim_username))
        .route("/register", web::get().to(register_page))
        .route("/register", web::post().to(submit_register))
        .route("/register/time-intervals", web::get().to(time_intervals))
        .route("/register/time-intervals", web::post().to(submit_time_intervals))
        .route("/register/update-profile", web::get().to(update_profile))
        .route("/api/claim-username", web::post().to(claim_username_api))
        .route("/api/users/time-intervals", web::post().to(submit_time_intervals_api))
        .route("/api/time-intervals/defaults", web::get().to(default_time_intervals_api))
        .default_service(web::to(not_found));
}

/// Malformed JSON bodies get the same `{success, message}` shape as every
/// other validation error.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match err {
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        other => other.to_string(),
    };
    ServiceError::ValidationError(message).into()
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    Err(ServiceError::NotFound(format!("No route for {}", req.path())))
}
