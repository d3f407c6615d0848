//! Typed access to the credential document.

use serde_json::Value;

use crate::domain::entities::user::UserMap;
use crate::errors::{DomainError, DomainResult, InitError};
use crate::repositories::document::{paths, DocumentStore};

/// Credential store over a path-addressed document store
///
/// Holds the schema version marker, the user collection, and the persisted
/// signing key. Malformed records surface as `InitError::CorruptRecord`.
pub struct CredentialRepository<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> CredentialRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Raw schema version marker, if one was written
    pub async fn version(&self) -> DomainResult<Option<Value>> {
        self.store.get(paths::VERSION).await
    }

    pub async fn set_version(&self, version: &str) -> DomainResult<()> {
        self.store
            .set(paths::VERSION, Value::String(version.to_string()))
            .await
    }

    /// All user records, or `None` when the collection was never written
    pub async fn users(&self) -> DomainResult<Option<UserMap>> {
        match self.store.get(paths::USERS).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| corrupt(paths::USERS, e.to_string())),
            None => Ok(None),
        }
    }

    pub async fn set_users(&self, users: &UserMap) -> DomainResult<()> {
        let value = serde_json::to_value(users).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize user records: {}", e),
        })?;
        self.store.set(paths::USERS, value).await
    }

    /// Persisted signing key, if any
    pub async fn signing_key(&self) -> DomainResult<Option<String>> {
        match self.store.get(paths::PRIVATE_KEY).await? {
            Some(Value::String(key)) => Ok(Some(key)),
            Some(_) => Err(corrupt(paths::PRIVATE_KEY, "expected a string".to_string())),
            None => Ok(None),
        }
    }

    pub async fn set_signing_key(&self, key: &str) -> DomainResult<()> {
        self.store
            .set(paths::PRIVATE_KEY, Value::String(key.to_string()))
            .await
    }
}

fn corrupt(path: &str, reason: String) -> DomainError {
    InitError::CorruptRecord {
        path: path.to_string(),
        reason,
    }
    .into()
}
