//! User credential records held by the credential store.

use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Username of the account seeded on first run
pub const ADMIN_USERNAME: &str = "admin";

/// Role granted to the seeded account
pub const ADMIN_ROLE: &str = "admin";

/// All user records keyed by username, as stored under `/users`
pub type UserMap = BTreeMap<String, UserRecord>;

/// A single user record
///
/// The secret is kept as provisioned. `hashed` is persisted so that a store
/// written by a future hashing-aware release can be told apart; records with
/// `hashed: true` never match a plaintext comparison.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login secret
    pub password: String,

    /// Whether `password` holds a hash rather than the secret itself
    #[serde(default)]
    pub hashed: bool,

    /// Roles embedded into issued tokens
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("password", &"<redacted>")
            .field("hashed", &self.hashed)
            .field("roles", &self.roles)
            .finish()
    }
}

impl UserRecord {
    /// Creates a record with a plaintext secret and the given roles
    pub fn new<I, R>(password: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            password: password.into(),
            hashed: false,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the default administrator record
    pub fn admin(password: impl Into<String>) -> Self {
        Self::new(password, [ADMIN_ROLE])
    }

    /// Checks a candidate secret in constant time
    pub fn secret_matches(&self, candidate: &str) -> bool {
        !self.hashed && constant_time_eq(self.password.as_bytes(), candidate.as_bytes())
    }

    /// Whether the record carries `role`
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
