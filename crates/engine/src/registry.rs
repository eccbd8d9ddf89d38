// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine Registry (spec §4.1): the mutable ordered collection of
//! live adapters, plus the replayable command log new adapters are
//! caught up with on insertion.

use gtp_proxy_adapters::EngineAdapter;
use gtp_proxy_core::EngineId;
use parking_lot::Mutex;
use std::sync::Arc;

struct Inner {
    /// `"0"` is always at index 0 if present; every other adapter is
    /// in insertion order (spec §8 "Registry ordering").
    adapters: Vec<Arc<dyn EngineAdapter>>,
    /// Non-analyze commands broadcast so far, replayed onto any newly
    /// appended adapter (spec §3 invariant 3, §5 "History replay").
    commands_sent: Vec<String>,
}

/// One mutex guards both the adapter list and the replay log so a
/// joining adapter either observes the full prior history or observes
/// a prefix and then the rest through the normal broadcast — never
/// both (spec §5).
pub struct EngineRegistry {
    inner: Mutex<Inner>,
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                adapters: Vec::new(),
                commands_sent: Vec::new(),
            }),
        }
    }
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `adapter`, replaying the current `commands_sent` log
    /// onto it first, under the same lock that guards both — this is
    /// the "take the lock, snapshot history, then insert" sequencing
    /// spec §5 requires. Returns the replayed commands so the caller
    /// can forward them to the adapter's transport outside the lock
    /// (starting the transport itself must not happen under the
    /// registry lock).
    pub fn insert(&self, adapter: Arc<dyn EngineAdapter>) -> Vec<String> {
        let mut inner = self.inner.lock();
        let replay = inner.commands_sent.clone();
        if adapter.id().is_local() {
            inner.adapters.insert(0, adapter);
        } else {
            inner.adapters.push(adapter);
        }
        replay
    }

    /// Stop and remove the adapter with `id`, if present. No error if
    /// absent (spec §4.1 `remove`).
    pub fn remove(&self, id: &EngineId) -> Option<Arc<dyn EngineAdapter>> {
        let mut inner = self.inner.lock();
        let pos = inner.adapters.iter().position(|a| a.id() == id)?;
        Some(inner.adapters.remove(pos))
    }

    /// Append `command` to the replay log unless it's an analysis
    /// request (spec §4.3 "if it does not contain `analyze`").
    pub fn record_command(&self, command: &str) {
        if !command.contains("analyze") {
            self.inner.lock().commands_sent.push(command.to_string());
        }
    }

    /// A stable snapshot of the currently registered adapters, in
    /// registry order, without pruning dead ones.
    pub fn snapshot(&self) -> Vec<Arc<dyn EngineAdapter>> {
        self.inner.lock().adapters.clone()
    }

    /// Drop adapters whose `is_alive()` probe is false, then return a
    /// stable snapshot of what remains (spec §4.1 `alive_snapshot`).
    pub async fn alive_snapshot(&self) -> Vec<Arc<dyn EngineAdapter>> {
        self.sweep_dead().await;
        self.snapshot()
    }

    /// Probe every registered adapter and drop the ones reporting
    /// dead. Iterates a snapshot taken under the lock so the probe
    /// (which may block on I/O) never runs with the lock held (spec
    /// §9 "Registry mutation during iteration").
    pub async fn sweep_dead(&self) {
        let candidates = self.snapshot();
        let mut dead_ids = Vec::new();
        for adapter in &candidates {
            if !adapter.is_alive().await {
                dead_ids.push(adapter.id().clone());
            }
        }
        if dead_ids.is_empty() {
            return;
        }
        let mut inner = self.inner.lock();
        inner.adapters.retain(|a| !dead_ids.contains(a.id()));
    }

    pub fn commands_sent(&self) -> Vec<String> {
        self.inner.lock().commands_sent.clone()
    }

    /// Clear the replay log, e.g. on `clear_board` (spec §3 "Game
    /// state ... reset on clear_board").
    pub fn clear_commands(&self) {
        self.inner.lock().commands_sent.clear();
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
