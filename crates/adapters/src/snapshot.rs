// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Latest-value cell for one engine's analysis snapshot: one reader
//! thread overwrites it, the async command-handling side reads it
//! (spec §4.2 "the pipe always has a current snapshot, never a queue").

use gtp_proxy_core::AnalysisSnapshot;
use parking_lot::Mutex;

/// Holds the most recent [`AnalysisSnapshot`] an adapter has parsed.
/// Cheap to clone (`Arc`-free; callers wrap it themselves), cheap to
/// read under contention since writes are infrequent relative to the
/// Move Decider's poll rate.
#[derive(Debug, Default)]
pub struct SnapshotCell(Mutex<AnalysisSnapshot>);

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the cell with a freshly parsed snapshot.
    pub fn store(&self, snapshot: AnalysisSnapshot) {
        *self.0.lock() = snapshot;
    }

    /// Clone out the current snapshot.
    pub fn load(&self) -> AnalysisSnapshot {
        self.0.lock().clone()
    }

    /// Reset to empty, e.g. before starting a new analysis round.
    pub fn clear(&self) {
        *self.0.lock() = AnalysisSnapshot::default();
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
