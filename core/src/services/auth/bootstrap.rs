//! Startup sequence: seed the credential store, resolve the signing key, load users.

use std::sync::Arc;

use kg_shared::{AuthConfig, KeyOverrides};
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::entities::user::{UserRecord, ADMIN_USERNAME};
use crate::errors::{DomainError, DomainResult, InitError};
use crate::repositories::{CredentialRepository, DocumentStore};
use crate::services::clock::Clock;
use crate::services::token::{generate_secret, SigningKey, TokenService};

use super::service::AuthService;

/// Schema version written to `/dbVersion`
pub const SCHEMA_VERSION: &str = "0";

impl AuthService {
    /// Prepare the credential store and build the service
    ///
    /// On first run (no `/dbVersion`) the `admin` account and a signing key
    /// are seeded, and the version marker is written last so an interrupted
    /// seed is retried on the next start. Existing users and keys are kept.
    ///
    /// # Arguments
    ///
    /// * `store` - Durable credential document
    /// * `config` - Overrides and token lifetime
    /// * `clock` - Time source shared by issuance, verification and revocation
    ///
    /// # Returns
    ///
    /// * `Ok(AuthService)` - Ready to serve requests
    /// * `Err(DomainError::Init)` - Startup must abort
    pub async fn initialize<S: DocumentStore + ?Sized>(
        store: &S,
        config: &AuthConfig,
        clock: Arc<dyn Clock>,
    ) -> DomainResult<Self> {
        Self::bootstrap(store, config, clock)
            .await
            .map_err(DomainError::into_init_failure)
    }

    async fn bootstrap<S: DocumentStore + ?Sized>(
        store: &S,
        config: &AuthConfig,
        clock: Arc<dyn Clock>,
    ) -> DomainResult<Self> {
        let repo = CredentialRepository::new(store);

        match repo.version().await? {
            None => seed_first_run(&repo, &config.overrides).await?,
            Some(Value::String(found)) if found == SCHEMA_VERSION => {}
            Some(found) => {
                return Err(InitError::VersionMismatch {
                    expected: SCHEMA_VERSION.to_string(),
                    found: describe(&found),
                }
                .into())
            }
        }

        let persisted = repo.signing_key().await?;
        let (key, key_source) = SigningKey::resolve(
            persisted.as_deref(),
            config.overrides.private_key.as_deref(),
        )?;
        if !key_source.survives_restart() {
            warn!("No signing key configured; using a random key, tokens will not survive a restart");
        }

        let users = repo.users().await?.unwrap_or_default();
        info!(users = users.len(), key_source = ?key_source, "Credential store loaded");

        let tokens = TokenService::new(key, config.into(), clock);
        Ok(AuthService::new(tokens, users, key_source))
    }
}

async fn seed_first_run<S: DocumentStore + ?Sized>(
    repo: &CredentialRepository<'_, S>,
    overrides: &KeyOverrides,
) -> DomainResult<()> {
    info!("Seeding credential store");

    let mut users = repo.users().await?.unwrap_or_default();
    if !users.contains_key(ADMIN_USERNAME) {
        let password = overrides
            .default_password
            .clone()
            .unwrap_or_else(generate_secret);
        users.insert(ADMIN_USERNAME.to_string(), UserRecord::admin(password));
        repo.set_users(&users).await?;
        if overrides.default_password.is_none() {
            warn!("Seeded the admin account with a random password; read it from the credential store");
        }
    }

    if repo.signing_key().await?.is_none() {
        let key = overrides
            .default_private_key
            .clone()
            .unwrap_or_else(generate_secret);
        repo.set_signing_key(&key).await?;
    }

    repo.set_version(SCHEMA_VERSION).await
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
