//! Authentication service module
//!
//! This module ties the credential store, token service and revocation list
//! together:
//! - First-run seeding of the credential store and signing key resolution
//! - Login against the loaded user records
//! - Token evaluation for the request gate
//! - Logout through the revocation list

mod bootstrap;
mod service;

#[cfg(test)]
mod tests;

pub use bootstrap::SCHEMA_VERSION;
pub use service::AuthService;
