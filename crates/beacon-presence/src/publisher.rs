//! Turns application state into activity snapshots.

use std::time::{SystemTime, UNIX_EPOCH};

use beacon_common::StateError;

use crate::activity::ActivitySnapshot;
use crate::app_state::{hostname, AppStateSource};

/// Result of computing a snapshot. Both arms carry a publishable snapshot;
/// `Fallback` records why the live path could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Live(ActivitySnapshot),
    Fallback {
        snapshot: ActivitySnapshot,
        reason: StateError,
    },
}

impl SnapshotOutcome {
    pub fn snapshot(&self) -> &ActivitySnapshot {
        match self {
            SnapshotOutcome::Live(snapshot) => snapshot,
            SnapshotOutcome::Fallback { snapshot, .. } => snapshot,
        }
    }

    pub fn into_snapshot(self) -> ActivitySnapshot {
        match self {
            SnapshotOutcome::Live(snapshot) => snapshot,
            SnapshotOutcome::Fallback { snapshot, .. } => snapshot,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SnapshotOutcome::Fallback { .. })
    }
}

/// Computes snapshots for one session. The start timestamp is captured at
/// construction and shared by every snapshot it produces.
#[derive(Debug, Clone)]
pub struct Publisher {
    start_timestamp: i64,
}

impl Publisher {
    /// Create a publisher whose session starts now.
    pub fn new() -> Self {
        let start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        Self::with_start_timestamp(start)
    }

    pub fn with_start_timestamp(start_timestamp: i64) -> Self {
        Self { start_timestamp }
    }

    pub fn start_timestamp(&self) -> i64 {
        self.start_timestamp
    }

    /// Summarize the current state. Never fails: any read error yields the
    /// idle fallback snapshot.
    pub fn compute_snapshot(&self, source: &dyn AppStateSource) -> SnapshotOutcome {
        let identity = source.identity();
        let large_text = identity.label();

        let live = source
            .selected_tab()
            .and_then(|tab| hostname(&tab.url).map(|host| (host, tab.audible)));

        match live {
            Ok((host, audible)) => SnapshotOutcome::Live(ActivitySnapshot::browsing(
                host,
                audible,
                self.start_timestamp,
                large_text,
            )),
            Err(reason) => SnapshotOutcome::Fallback {
                snapshot: ActivitySnapshot::idle(identity.name, self.start_timestamp, large_text),
                reason,
            },
        }
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}
