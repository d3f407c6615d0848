//! Document store trait defining the interface for durable credential storage.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::DomainResult;

/// Paths used by the credential store
pub mod paths {
    /// Schema version marker
    pub const VERSION: &str = "/dbVersion";
    /// User record collection keyed by username
    pub const USERS: &str = "/users";
    /// Persisted signing key
    pub const PRIVATE_KEY: &str = "/privateKey";
}

/// Path-addressed JSON document store
///
/// Paths are `/`-separated object keys (`/users/admin/roles`). Implementations
/// must flush every `set` durably before returning and report unreachable
/// storage as `DomainError::Storage`.
///
/// # Example
/// ```no_run
/// # use kg_core::repositories::{paths, DocumentStore};
/// # async fn example(store: &impl DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
/// if !store.exists(paths::VERSION).await? {
///     store.set(paths::VERSION, serde_json::json!("0")).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the value at `path`
    ///
    /// # Returns
    /// * `Ok(Some(Value))` - A value exists at `path`
    /// * `Ok(None)` - Nothing is stored at `path`
    /// * `Err(DomainError)` - The store could not be read
    async fn get(&self, path: &str) -> DomainResult<Option<Value>>;

    /// Write `value` at `path`, creating intermediate objects as needed
    async fn set(&self, path: &str, value: Value) -> DomainResult<()>;

    /// Check whether anything is stored at `path`
    async fn exists(&self, path: &str) -> DomainResult<bool> {
        Ok(self.get(path).await?.is_some())
    }
}
