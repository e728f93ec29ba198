use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::models::{ClaimUsernameForm, ClaimUsernameResponse, ErrorResponse, ServiceError, Username};

#[utoipa::path(
    post,
    path = "/api/claim-username",
    request_body = ClaimUsernameForm,
    responses(
        (status = 200, description = "Username accepted", body = ClaimUsernameResponse),
        (status = 400, description = "Username rejected", body = ErrorResponse)
    )
)]
pub async fn claim_username_api(
    form: web::Json<ClaimUsernameForm>,
) -> Result<HttpResponse, ServiceError> {
    let username = Username::parse(&form.username)?;

    tracing::debug!("Username claimed: {}", username);

    Ok(HttpResponse::Ok().json(ClaimUsernameResponse {
        success: true,
        redirect: username.register_path(),
        username: username.to_string(),
    }))
}
