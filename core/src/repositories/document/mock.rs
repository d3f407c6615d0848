//! Mock implementation of DocumentStore for testing

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::errors::{DomainError, DomainResult};

use super::path;
use super::store::DocumentStore;

/// Mock document store that records writes and can simulate an outage
pub struct MockDocumentStore {
    doc: Mutex<Value>,
    writes: Mutex<Vec<String>>,
    unavailable: AtomicBool,
}

impl MockDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_document(json!({}))
    }

    /// Create a store pre-populated with `doc`
    pub fn with_document(doc: Value) -> Self {
        Self {
            doc: Mutex::new(doc),
            writes: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a storage error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Snapshot of the whole document
    pub fn document(&self) -> Value {
        self.doc.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Storage {
                message: "mock store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn get(&self, path: &str) -> DomainResult<Option<Value>> {
        self.check_available()?;
        let doc = self.doc.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(path::lookup(&doc, path).cloned())
    }

    async fn set(&self, path: &str, value: Value) -> DomainResult<()> {
        self.check_available()?;
        path::assign(&mut self.doc.lock().unwrap_or_else(PoisonError::into_inner), path, value);
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_string());
        Ok(())
    }
}
