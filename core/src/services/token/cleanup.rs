//! Periodic sweep of the revocation list
//!
//! Lookups already drop stale entries, but an idle service never looks
//! anything up. The sweeper keeps memory bounded in that case.

use std::sync::Arc;
use std::time::Duration;

use kg_shared::AuthConfig;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::revocation::RevocationList;

/// Configuration for the revocation sweeper
#[derive(Debug, Clone)]
pub struct RevocationSweepConfig {
    /// How often to sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for RevocationSweepConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

impl From<&AuthConfig> for RevocationSweepConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            interval_seconds: config.sweep_interval_seconds,
            enabled: config.is_sweep_enabled(),
        }
    }
}

/// Background sweeper for a shared revocation list
pub struct RevocationSweeper {
    revocations: Arc<RevocationList>,
    config: RevocationSweepConfig,
}

impl RevocationSweeper {
    pub fn new(revocations: Arc<RevocationList>, config: RevocationSweepConfig) -> Self {
        Self {
            revocations,
            config,
        }
    }

    /// Run a single sweep
    pub fn run_sweep(&self) -> SweepResult {
        let removed = self.revocations.sweep();
        let result = SweepResult {
            removed,
            remaining: self.revocations.len(),
        };
        debug!(
            removed = result.removed,
            remaining = result.remaining,
            "Revocation sweep completed"
        );
        result
    }

    /// Start the sweeper as a background task
    ///
    /// Returns `None` when the sweeper is disabled or the interval is zero.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled || self.config.interval_seconds == 0 {
            warn!("Revocation sweeper is disabled");
            return None;
        }

        let interval = Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                "Revocation sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;
                self.run_sweep();
            }
        }))
    }
}

/// Result of a sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Entries dropped because their token expired
    pub removed: usize,
    /// Entries still held
    pub remaining: usize,
}
