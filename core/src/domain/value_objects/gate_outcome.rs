//! Per-request outcome of the authentication gate.

use crate::domain::entities::token::Claims;

/// Result of evaluating the token presented with a request
///
/// Only `Valid` carries claims. The other states are indistinguishable to
/// the client: optional routes see an anonymous request and protected routes
/// reject it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// No token in body, query or header
    NoToken,
    /// Bad signature, malformed, or expired
    Invalid,
    /// Verified but present in the revocation list
    Revoked,
    /// Verified and not revoked
    Valid(Claims),
}

impl GateOutcome {
    /// Returns the claims of a valid outcome
    pub fn into_claims(self) -> Option<Claims> {
        match self {
            GateOutcome::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            GateOutcome::NoToken => "no-token",
            GateOutcome::Invalid => "invalid",
            GateOutcome::Revoked => "revoked",
            GateOutcome::Valid(_) => "valid",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, GateOutcome::Valid(_))
    }
}
