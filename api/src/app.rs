//! Application state and factory
//!
//! This module holds the state shared by every worker and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use kg_core::services::AuthService;
use kg_shared::config::auth::DEFAULT_TOKEN_HEADER;
use kg_shared::ErrorResponse;
use tracing_actix_web::TracingLogger;

use crate::middleware::{Authenticate, RequireAuth};
use crate::routes::auth::{login, logout, me};
use crate::routes::health::health_check;

/// Application state that holds shared services
pub struct AppState {
    pub auth: Arc<AuthService>,
    /// Header consulted for a token after body and query
    pub token_header: String,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
        }
    }

    pub fn with_token_header(mut self, header: impl Into<String>) -> Self {
        self.token_header = header.into();
        self
    }
}

/// Create and configure the application
///
/// Every `/api/v1` request passes through `Authenticate`; logout and me
/// additionally require a valid token.
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let authenticate =
        Authenticate::new(Arc::clone(&app_state.auth)).with_header(&app_state.token_header);

    App::new()
        // Add application state
        .app_data(app_state)
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").wrap(authenticate).service(
                web::scope("/auth")
                    .route("/login", web::post().to(login))
                    .route("/logout", web::post().to(logout).wrap(RequireAuth))
                    .route("/me", web::get().to(me).wrap(RequireAuth)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(404, "Not Found"))
}
