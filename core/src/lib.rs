//! # KeyGate Core
//!
//! Core business logic for KeyGate.
//! This crate contains the domain entities, the document store interface,
//! the token issuer/verifier, the revocation list, and the bootstrap sequence
//! that resolves the signing key and seeds the credential store.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, IssueOptions, UserMap, UserRecord};
pub use domain::value_objects::GateOutcome;
pub use errors::{AuthError, DomainError, DomainResult, InitError, TokenError};
pub use repositories::{CredentialRepository, DocumentStore};
pub use services::{
    AuthService, Clock, ManualClock, RevocationList, RevocationSweeper, SystemClock, TokenService,
};
