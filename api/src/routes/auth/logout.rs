use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::LogoutResponse;
use crate::middleware::authenticate::AuthContext;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the token that authenticated this request until it expires.
/// Other tokens held by the same user stay valid.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out"
/// }
/// ```
///
/// ## Errors
/// - 403 Forbidden: No valid token presented
pub async fn logout(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    state.auth.logout(&auth.token);

    HttpResponse::Ok().json(LogoutResponse {
        message: "Logged out".to_string(),
    })
}
