//! Main token service implementation

use std::collections::BTreeSet;
use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{Claims, IssueOptions};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::Clock;

use super::config::TokenServiceConfig;
use super::key_manager::SigningKey;

/// Issues and verifies signed session tokens
///
/// Expiry is judged against the injected clock rather than the library's
/// wall-clock check, so `exp` is required but validated here.
pub struct TokenService {
    config: TokenServiceConfig,
    key: SigningKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `key` - Effective signing key
    /// * `config` - Token service configuration
    /// * `clock` - Time source for `iat`, `exp` and expiry checks
    pub fn new(key: SigningKey, config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            key,
            validation,
            clock,
        }
    }

    /// Signs a token for `user` carrying `roles`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(
        &self,
        user: &str,
        roles: &BTreeSet<String>,
        options: IssueOptions,
    ) -> Result<String, DomainError> {
        let expires_in = options
            .expires_in
            .unwrap_or(self.config.default_expiry_seconds);
        let claims = Claims::new(user, roles.clone(), self.clock.now(), expires_in);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, self.key.encoding_key())
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its claims
    ///
    /// The failure reason is logged at debug level only.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature and structure are valid and `now < exp`
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let result = self.decode_and_check(token);
        if let Err(ref reason) = result {
            debug!(%reason, "Token verification failed");
        }
        result.map_err(DomainError::Token)
    }

    fn decode_and_check(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, self.key.decoding_key(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            })?;

        if token_data.claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Current time according to the service clock
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }
}
