//! Process-local list of revoked tokens.
//!
//! Entries live until the token they name would have expired anyway. Every
//! membership query first drops all stale entries, so the list never holds
//! more than the set of revoked-but-still-valid tokens plus whatever was
//! revoked since the last query.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::services::clock::Clock;

/// Revoked token strings mapped to their expiry (unix seconds)
pub struct RevocationList {
    entries: Mutex<HashMap<String, i64>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for RevocationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationList")
            .field("entries", &self.len())
            .finish()
    }
}

impl RevocationList {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Records `token` as revoked until `expires_at`, overwriting any earlier entry
    pub fn revoke(&self, token: impl Into<String>, expires_at: i64) {
        self.lock().insert(token.into(), expires_at);
    }

    /// Drops stale entries, then reports whether `token` may still be used
    pub fn is_allowed(&self, token: &str) -> bool {
        let now = self.clock.now();
        let mut entries = self.lock();
        Self::sweep_locked(&mut entries, now);
        !entries.contains_key(token)
    }

    /// Drops every entry with `expiry <= now` and returns how many went
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        Self::sweep_locked(&mut self.lock(), now)
    }

    /// Number of entries currently held, stale ones included
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn sweep_locked(entries: &mut HashMap<String, i64>, now: i64) -> usize {
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at > now);
        let removed = before - entries.len();
        if removed > 0 {
            trace!(removed, "Swept expired revocation entries");
        }
        removed
    }

    // A panic while holding the lock cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, i64>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
