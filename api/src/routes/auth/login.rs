use actix_web::{web, HttpResponse};
use kg_core::domain::entities::IssueOptions;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// {
///     "username": "admin",
///     "password": "secret",
///     "expires_in": 3600
/// }
/// ```
///
/// `expires_in` is optional and defaults to the configured token lifetime.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOi..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed body
/// - 401 Unauthorized: Unknown user or wrong password
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let options = IssueOptions {
        expires_in: request.expires_in,
    };
    let token = state
        .auth
        .login(&request.username, &request.password, options)?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
