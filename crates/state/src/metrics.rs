//! Skip counters for metrics export.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::change::Change;
use crate::classify::Skip;
use crate::translate::SkipObserver;

/// Lock-free counters of skipped changes, one per [`Skip`] reason.
///
/// Keeps "never wired up" (`unmapped_table`) apart from "wired up but wrong"
/// (`snapshot_mismatch`, `missing_snapshot`) so a store table added without an
/// eventing rule shows up on a dashboard instead of vanishing.
#[derive(Debug, Default)]
pub struct SkipCounters {
    unmapped_table: AtomicU64,
    not_emitted: AtomicU64,
    snapshot_mismatch: AtomicU64,
    missing_snapshot: AtomicU64,
}

/// Point-in-time copy of [`SkipCounters`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub unmapped_table: u64,
    pub not_emitted: u64,
    pub snapshot_mismatch: u64,
    pub missing_snapshot: u64,
}

impl SkipCounts {
    /// Skips that indicate a bug rather than an intentional omission.
    pub fn anomalies(&self) -> u64 {
        self.snapshot_mismatch + self.missing_snapshot
    }
}

impl SkipCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, skip: &Skip) {
        let counter = match skip {
            Skip::UnmappedTable(_) => &self.unmapped_table,
            Skip::NotEmitted { .. } => &self.not_emitted,
            Skip::SnapshotMismatch { .. } => &self.snapshot_mismatch,
            Skip::MissingSnapshot { .. } => &self.missing_snapshot,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SkipCounts {
        SkipCounts {
            unmapped_table: self.unmapped_table.load(Ordering::Relaxed),
            not_emitted: self.not_emitted.load(Ordering::Relaxed),
            snapshot_mismatch: self.snapshot_mismatch.load(Ordering::Relaxed),
            missing_snapshot: self.missing_snapshot.load(Ordering::Relaxed),
        }
    }
}

impl SkipObserver for SkipCounters {
    fn skipped(&self, _index: u64, _change: &Change, skip: &Skip) {
        self.record(skip);
    }
}
