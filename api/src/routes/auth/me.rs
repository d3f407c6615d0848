use actix_web::HttpResponse;

use crate::dto::auth::MeResponse;
use crate::middleware::authenticate::AuthContext;

/// Handler for GET /api/v1/auth/me
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user: auth.user,
        roles: auth.roles,
        exp: auth.exp,
    })
}
