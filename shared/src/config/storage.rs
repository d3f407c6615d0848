//! Storage configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::env_var;

/// Location of the persistent credential document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the document file
    pub data_dir: PathBuf,

    /// Document file name inside `data_dir`
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            file_name: default_file_name(),
        }
    }
}

impl StorageConfig {
    /// Create a storage configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        env_var("DATA_DIR")
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Full path of the document file
    pub fn document_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

fn default_file_name() -> String {
    String::from("config.json")
}
