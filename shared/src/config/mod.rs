//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Bootstrap overrides, token lifetime and revocation sweeping
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind address
//! - `storage` - Location of the persistent credential document

pub mod auth;
pub mod environment;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, KeyOverrides, DEFAULT_TOKEN_EXPIRY_SECONDS};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = env_var("RUST_LOG") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            auth: AuthConfig::from_env(),
            logging,
        }
    }
}

/// Reads an environment variable, treating an empty value as unset.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Reads and parses an environment variable, falling back to `default`.
pub(crate) fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env_var(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
