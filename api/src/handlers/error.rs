//! Mapping of domain failures onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use kg_core::errors::DomainError;
use kg_shared::ErrorResponse;
use tracing::error;

/// Errors returned by route handlers and extractors
///
/// Every variant renders as `{"error": {"code", "message"}}`. Token failures
/// of any kind collapse into `NotAuthenticated`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Authenticated")]
    NotAuthenticated,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::new(self.status_code().as_u16(), self.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAuthenticated => StatusCode::FORBIDDEN,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Auth(_) => ApiError::InvalidCredentials,
            DomainError::Token(_) => ApiError::NotAuthenticated,
            other => {
                error!(error = %other, "Request failed");
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kg_core::errors::{AuthError, TokenError};

    #[test]
    fn test_domain_error_mapping() {
        let auth: ApiError = DomainError::Auth(AuthError::AuthenticationFailed).into();
        assert_eq!(auth.status_code(), StatusCode::UNAUTHORIZED);

        let token: ApiError = DomainError::Token(TokenError::TokenRevoked).into();
        assert_eq!(token.status_code(), StatusCode::FORBIDDEN);

        let storage: ApiError = DomainError::Storage {
            message: "disk".to_string(),
        }
        .into();
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.body().error.message, "Internal server error");
    }

    #[test]
    fn test_not_authenticated_body() {
        assert_eq!(
            ApiError::NotAuthenticated.body(),
            ErrorResponse::not_authenticated()
        );
    }
}
