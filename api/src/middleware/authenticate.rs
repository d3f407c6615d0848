//! Token authentication middleware.
//!
//! `Authenticate` looks for a token in the request body field `token` (JSON
//! or form encoded), then the `token` query parameter, then the API key
//! header. A token that verifies and has not been logged out attaches an
//! [`AuthContext`] to the request. The request is always passed on;
//! rejecting anonymous requests is the job of
//! [`RequireAuth`](super::require::RequireAuth).

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use kg_core::{domain::entities::Claims, domain::value_objects::GateOutcome, services::AuthService};
use kg_shared::config::auth::DEFAULT_TOKEN_HEADER;
use serde::Deserialize;
use std::{
    collections::BTreeSet,
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::debug;

use crate::handlers::ApiError;

/// Authenticated caller attached to the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Username from the token
    pub user: String,
    /// Roles embedded at login
    pub roles: BTreeSet<String>,
    /// Token expiry (unix seconds)
    pub exp: i64,
    /// The token exactly as presented, needed for logout
    pub token: String,
}

impl AuthContext {
    pub fn new(claims: Claims, token: String) -> Self {
        Self {
            user: claims.user,
            roles: claims.roles,
            exp: claims.exp,
            token,
        }
    }
}

/// Authentication middleware factory
pub struct Authenticate {
    auth: Arc<AuthService>,
    header: Rc<str>,
}

impl Authenticate {
    /// Creates the middleware reading the `x-api-key` header
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            header: Rc::from(DEFAULT_TOKEN_HEADER),
        }
    }

    /// Reads the token from `header` instead of `x-api-key`
    pub fn with_header(mut self, header: &str) -> Self {
        self.header = Rc::from(header.to_ascii_lowercase());
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service: Rc::new(service),
            auth: Arc::clone(&self.auth),
            header: Rc::clone(&self.header),
        }))
    }
}

/// Authentication middleware service
pub struct AuthenticateMiddleware<S> {
    service: Rc<S>,
    auth: Arc<AuthService>,
    header: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let auth = Arc::clone(&self.auth);
        let header = Rc::clone(&self.header);

        Box::pin(async move {
            let token = match body_token(&mut req).await? {
                Some(token) => Some(token),
                None => query_token(&req).or_else(|| header_token(&req, &header)),
            };

            let outcome = auth.evaluate(token.as_deref());
            debug!(path = req.path(), outcome = outcome.label(), "Request token evaluated");

            if let (GateOutcome::Valid(claims), Some(token)) = (outcome, token) {
                req.extensions_mut().insert(AuthContext::new(claims, token));
            }

            service.call(req).await
        })
    }
}

#[derive(Deserialize)]
struct TokenField {
    #[serde(default)]
    token: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct TokenParam {
    #[serde(default)]
    token: Option<String>,
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Reads `token` from a JSON or form body and puts the body back for the handler
async fn body_token(req: &mut ServiceRequest) -> Result<Option<String>, Error> {
    let content_type = req.content_type().to_ascii_lowercase();
    let is_json = content_type == "application/json" || content_type.ends_with("+json");
    let is_form = content_type == "application/x-www-form-urlencoded";
    if !is_json && !is_form {
        return Ok(None);
    }

    let bytes = req.extract::<web::Bytes>().await?;
    req.set_payload(Payload::from(bytes.clone()));

    let token = if is_json {
        serde_json::from_slice::<TokenField>(&bytes)
            .ok()
            .and_then(|field| match field.token {
                Some(serde_json::Value::String(token)) => Some(token),
                _ => None,
            })
    } else {
        std::str::from_utf8(&bytes)
            .ok()
            .and_then(|body| web::Query::<TokenParam>::from_query(body).ok())
            .and_then(|param| param.into_inner().token)
    };

    Ok(non_empty(token))
}

fn query_token(req: &ServiceRequest) -> Option<String> {
    web::Query::<TokenParam>::from_query(req.query_string())
        .ok()
        .and_then(|param| non_empty(param.into_inner().token))
}

fn header_token(req: &ServiceRequest, header: &str) -> Option<String> {
    req.headers()
        .get(header)?
        .to_str()
        .ok()
        .map(str::to_string)
        .filter(|t| !t.is_empty())
}

/// Extractor for required authentication
///
/// Fails with the 403 envelope when `Authenticate` attached nothing.
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(ApiError::NotAuthenticated);

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
