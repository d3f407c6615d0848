//! Token entities for JWT-based authentication.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use kg_shared::config::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub user: String,

    /// Roles held by the subject at issuance
    #[serde(default)]
    pub roles: BTreeSet<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user` issued at `issued_at` and valid for `expires_in` seconds
    pub fn new(
        user: impl Into<String>,
        roles: BTreeSet<String>,
        issued_at: i64,
        expires_in: i64,
    ) -> Self {
        Self {
            user: user.into(),
            roles,
            iat: issued_at,
            exp: issued_at.saturating_add(expires_in),
        }
    }

    /// Checks if the claims have expired at `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Whether the subject holds `role`
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Per-issuance options accepted by login
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueOptions {
    /// Token lifetime in seconds, overriding the configured default
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl IssueOptions {
    /// Options requesting a specific lifetime
    pub fn expires_in(seconds: i64) -> Self {
        Self {
            expires_in: Some(seconds),
        }
    }
}
