//! File-backed document store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use kg_core::errors::DomainResult;
use kg_core::repositories::document::path;
use kg_core::repositories::DocumentStore;
use kg_shared::StorageConfig;
use serde_json::{json, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::InfrastructureError;

/// Document store persisted as one human-readable JSON file
///
/// The whole document is held in memory. Every `set` writes the updated
/// document to a sibling temp file, syncs it and renames it over the
/// original before returning, so a crash leaves either the old or the new
/// document on disk. Writes are serialized by the document lock.
pub struct JsonFileStore {
    path: PathBuf,
    doc: Mutex<Value>,
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl JsonFileStore {
    /// Opens the store at `path`
    ///
    /// A missing file yields an empty document and is created on the first
    /// write. Missing parent directories are created.
    ///
    /// # Returns
    ///
    /// * `Ok(JsonFileStore)` - Store loaded
    /// * `Err(InfrastructureError)` - The file is unreadable or not valid JSON
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| InfrastructureError::io(parent, e))?;
        }

        let doc = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                InfrastructureError::Parse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Credential document not found; starting empty");
                json!({})
            }
            Err(e) => return Err(InfrastructureError::io(&path, e)),
        };

        info!(path = %path.display(), "Credential document opened");
        Ok(Self {
            path,
            doc: Mutex::new(doc),
        })
    }

    /// Opens `<data_dir>/<file_name>` as configured
    pub async fn from_config(config: &StorageConfig) -> Result<Self, InfrastructureError> {
        Self::open(config.document_path()).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, doc: &Value) -> Result<(), InfrastructureError> {
        let bytes = serde_json::to_vec_pretty(doc).map_err(InfrastructureError::Serialize)?;
        let tmp_path = self.temp_path();

        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| InfrastructureError::io(&tmp_path, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| InfrastructureError::io(&tmp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| InfrastructureError::io(&tmp_path, e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| InfrastructureError::io(&self.path, e))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, path: &str) -> DomainResult<Option<Value>> {
        let doc = self.doc.lock().await;
        Ok(path::lookup(&doc, path).cloned())
    }

    async fn set(&self, path: &str, value: Value) -> DomainResult<()> {
        let mut doc = self.doc.lock().await;

        // Only commit in memory what reached the disk
        let mut updated = doc.clone();
        path::assign(&mut updated, path, value);
        self.persist(&updated).await?;
        *doc = updated;

        debug!(path, "Credential document updated");
        Ok(())
    }
}
