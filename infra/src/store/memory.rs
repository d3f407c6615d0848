//! Process-local document store.

use async_trait::async_trait;
use kg_core::errors::DomainResult;
use kg_core::repositories::document::path;
use kg_core::repositories::DocumentStore;
use serde_json::{json, Value};
use tokio::sync::RwLock;

/// Document store that lives only as long as the process
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    doc: RwLock<Value>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_document(json!({}))
    }

    /// Create a store pre-populated with `doc`
    pub fn with_document(doc: Value) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }

    /// Copy of the whole document
    pub async fn snapshot(&self) -> Value {
        self.doc.read().await.clone()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, path: &str) -> DomainResult<Option<Value>> {
        let doc = self.doc.read().await;
        Ok(path::lookup(&doc, path).cloned())
    }

    async fn set(&self, path: &str, value: Value) -> DomainResult<()> {
        path::assign(&mut *self.doc.write().await, path, value);
        Ok(())
    }
}
