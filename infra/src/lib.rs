//! # Infrastructure Layer
//!
//! Concrete implementations of the `DocumentStore` interface defined in
//! `kg_core`.
//!
//! ## Stores
//!
//! - **JsonFileStore**: a single pretty-printed JSON file, flushed to disk on
//!   every write
//! - **InMemoryDocumentStore**: process-local, for tests and ephemeral runs

// Re-export core types for convenience
pub use kg_core::errors::*;

/// Document store implementations
pub mod store;

pub use store::{InMemoryDocumentStore, JsonFileStore};

use std::path::PathBuf;

use kg_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON document
    #[error("Invalid JSON document at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be serialized
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl InfrastructureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Storage {
            message: err.to_string(),
        }
    }
}
