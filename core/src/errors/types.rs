//! Error types for bootstrap, authentication and token handling
//!
//! The variants carry enough detail for logs. The API layer collapses
//! `AuthError` and `TokenError` into one client-facing rejection so callers
//! cannot tell a bad signature from an expired or revoked token.

use thiserror::Error;

/// Failures that abort startup
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Credential store unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Credential store schema version mismatch (expected {expected}, found {found}); operator action required")]
    VersionMismatch { expected: String, found: String },

    #[error("Corrupt record at {path}: {reason}")]
    CorruptRecord { path: String, reason: String },

    #[error("Signing key rejected: {reason}")]
    InvalidSigningKey { reason: String },
}

/// Login failures
///
/// Unknown users and wrong secrets share a single variant.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
