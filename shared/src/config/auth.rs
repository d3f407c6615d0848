//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_parse, env_var};

/// Default token lifetime in seconds (24 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

/// Default header carrying an API token
pub const DEFAULT_TOKEN_HEADER: &str = "x-api-key";

/// Default revocation sweep interval in seconds (1 hour)
pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 3_600;

/// Operator-supplied values that replace generated bootstrap secrets.
///
/// Only `private_key` is consulted on every startup; the `default_*` values
/// are used once, when the credential store is seeded for the first time.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct KeyOverrides {
    /// Secret for the seeded `admin` account (`DEFAULT_PASSWORD`)
    #[serde(default)]
    pub default_password: Option<String>,

    /// Signing key persisted on first run (`DEFAULT_PRIVATE_KEY`)
    #[serde(default)]
    pub default_private_key: Option<String>,

    /// Signing key used when none is persisted (`PRIVATE_KEY`)
    #[serde(default)]
    pub private_key: Option<String>,
}

impl std::fmt::Debug for KeyOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyOverrides")
            .field("default_password", &self.default_password.as_ref().map(|_| "<redacted>"))
            .field("default_private_key", &self.default_private_key.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl KeyOverrides {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            default_password: env_var("DEFAULT_PASSWORD"),
            default_private_key: env_var("DEFAULT_PRIVATE_KEY"),
            private_key: env_var("PRIVATE_KEY"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bootstrap and signing key overrides
    #[serde(default)]
    pub overrides: KeyOverrides,

    /// Token lifetime in seconds when login does not request one
    pub token_expiry_seconds: i64,

    /// Request header inspected for a token after body and query
    pub token_header: String,

    /// Interval of the background revocation sweep (0 = disabled)
    pub sweep_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            overrides: KeyOverrides::default(),
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            overrides: KeyOverrides::from_env(),
            token_expiry_seconds: env_parse("TOKEN_EXPIRY_SECONDS", DEFAULT_TOKEN_EXPIRY_SECONDS),
            token_header: env_var("TOKEN_HEADER")
                .unwrap_or_else(|| DEFAULT_TOKEN_HEADER.to_string())
                .to_ascii_lowercase(),
            sweep_interval_seconds: env_parse(
                "REVOCATION_SWEEP_INTERVAL_SECONDS",
                DEFAULT_SWEEP_INTERVAL_SECONDS,
            ),
        }
    }

    /// Set the default token lifetime
    pub fn with_token_expiry(mut self, seconds: i64) -> Self {
        self.token_expiry_seconds = seconds;
        self
    }

    /// Set bootstrap overrides
    pub fn with_overrides(mut self, overrides: KeyOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Whether the periodic revocation sweep should run
    pub fn is_sweep_enabled(&self) -> bool {
        self.sweep_interval_seconds > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.token_expiry_seconds, 86_400);
        assert_eq!(config.token_header, "x-api-key");
        assert!(config.is_sweep_enabled());
        assert!(config.overrides.private_key.is_none());
    }

    #[test]
    fn test_auth_config_builder() {
        let config = AuthConfig::default()
            .with_token_expiry(60)
            .with_overrides(KeyOverrides {
                private_key: Some("k".to_string()),
                ..Default::default()
            });
        assert_eq!(config.token_expiry_seconds, 60);
        assert_eq!(config.overrides.private_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_overrides_debug_redacts_secrets() {
        let overrides = KeyOverrides {
            default_password: Some("hunter2".to_string()),
            default_private_key: None,
            private_key: Some("signing-secret".to_string()),
        };
        let rendered = format!("{:?}", overrides);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("signing-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
