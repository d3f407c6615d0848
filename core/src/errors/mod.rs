//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, InitError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether this error must abort startup
    pub fn is_initialization_failure(&self) -> bool {
        matches!(self, DomainError::Init(_))
    }

    /// Whether this error means the caller presented bad credentials or a bad token
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, DomainError::Auth(_) | DomainError::Token(_))
    }

    /// Reclassifies storage failures raised during startup as initialization failures
    pub(crate) fn into_init_failure(self) -> Self {
        match self {
            DomainError::Storage { message } => InitError::StorageUnavailable { message }.into(),
            other => other,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
