//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::token::{Claims, IssueOptions};
use crate::domain::entities::user::{UserMap, UserRecord};
use crate::domain::value_objects::GateOutcome;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::services::token::{KeySource, RevocationList, TokenService};

/// Authentication service shared by every request handler
///
/// Built once by [`AuthService::initialize`] before the server accepts
/// requests. Users and the signing key never change afterwards; only the
/// revocation list is mutated.
pub struct AuthService {
    /// Token service for JWT management
    tokens: TokenService,
    /// Tokens logged out before their expiry
    revocations: Arc<RevocationList>,
    /// User records loaded at startup
    users: UserMap,
    /// Origin of the signing key in use
    key_source: KeySource,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("users", &self.users.len())
            .field("key_source", &self.key_source)
            .field("revocations", &self.revocations)
            .finish()
    }
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `tokens` - Token service holding the effective signing key
    /// * `users` - User records to authenticate against
    /// * `key_source` - Where the signing key came from
    pub fn new(tokens: TokenService, users: UserMap, key_source: KeySource) -> Self {
        let revocations = Arc::new(RevocationList::new(tokens.clock().clone()));
        Self {
            tokens,
            revocations,
            users,
            key_source,
        }
    }

    /// Exchange a username and secret for a signed token
    ///
    /// Unknown users and wrong secrets fail identically.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Token carrying the user's name and roles
    /// * `Err(DomainError::Auth)` - Credentials rejected
    pub fn login(
        &self,
        username: &str,
        password: &str,
        options: IssueOptions,
    ) -> DomainResult<String> {
        let Some(record) = self.find_user(username, password) else {
            info!(username, "Login rejected");
            return Err(AuthError::AuthenticationFailed.into());
        };

        let token = self.tokens.issue(username, &record.roles, options)?;
        info!(username, "Login succeeded");
        Ok(token)
    }

    fn find_user(&self, username: &str, password: &str) -> Option<&UserRecord> {
        self.users
            .get(username)
            .filter(|record| record.secret_matches(password))
    }

    /// Verify signature and expiry without consulting the revocation list
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        self.tokens.verify(token)
    }

    /// Verify a token and reject it if it was logged out
    pub fn authenticate(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.verify(token)?;
        if !self.is_allowed(token) {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }
        Ok(claims)
    }

    /// Whether `token` is absent from the revocation list
    pub fn is_allowed(&self, token: &str) -> bool {
        self.revocations.is_allowed(token)
    }

    /// Classify the token presented with a request
    pub fn evaluate(&self, token: Option<&str>) -> GateOutcome {
        let Some(token) = token else {
            return GateOutcome::NoToken;
        };

        match self.authenticate(token) {
            Ok(claims) => GateOutcome::Valid(claims),
            Err(DomainError::Token(TokenError::TokenRevoked)) => GateOutcome::Revoked,
            Err(_) => GateOutcome::Invalid,
        }
    }

    /// Revoke `token` until its own expiry
    ///
    /// Tokens that do not verify are ignored. Returns whether anything was
    /// revoked.
    pub fn logout(&self, token: &str) -> bool {
        match self.verify(token) {
            Ok(claims) => {
                self.revocations.revoke(token, claims.exp);
                info!(user = %claims.user, "Token revoked");
                true
            }
            Err(_) => {
                debug!("Logout ignored for a token that does not verify");
                false
            }
        }
    }

    pub fn revocations(&self) -> &Arc<RevocationList> {
        &self.revocations
    }

    pub fn token_service(&self) -> &TokenService {
        &self.tokens
    }

    pub fn key_source(&self) -> KeySource {
        self.key_source
    }

    /// Number of user records loaded at startup
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
