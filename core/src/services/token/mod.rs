//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Signing key resolution and random secret generation
//! - JWT issuance and verification against an injected clock
//! - The process-local revocation list
//! - Background sweeping of expired revocation entries

mod cleanup;
mod config;
mod key_manager;
mod revocation;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{RevocationSweepConfig, RevocationSweeper, SweepResult};
pub use config::TokenServiceConfig;
pub use key_manager::{generate_secret, KeySource, SigningKey};
pub use revocation::RevocationList;
pub use service::TokenService;
