//! Configuration for the token service

use jsonwebtoken::Algorithm;
use kg_shared::AuthConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds when login does not request one
    pub default_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            default_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            default_expiry_seconds: config.token_expiry_seconds,
            ..Self::default()
        }
    }
}
