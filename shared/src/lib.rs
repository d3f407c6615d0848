//! Shared configuration and response types for KeyGate
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The JSON error envelope returned to clients

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, KeyOverrides, LogFormat, LoggingConfig, ServerConfig,
    StorageConfig,
};
pub use errors::{ErrorBody, ErrorResponse};
