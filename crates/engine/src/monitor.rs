// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine Monitor (spec §4.7): while the proxy has never yet been
//! asked for a move, a background sweeper checks every adapter's
//! liveness every ~5s and drops dead ones with a warning log. Once
//! `genmove` first runs, dead adapters are pruned only lazily by
//! [`crate::registry::EngineRegistry::alive_snapshot`] during
//! broadcasts (spec §4.1).

use crate::registry::EngineRegistry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Sweep cadence before the first genmove, matching
/// `original_source/gtpPipe.py::_engine_monitor_thread`'s `sleep(5)`.
const SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Runs the periodic liveness sweep until `genmove_started` is set,
/// then returns permanently (spec §4.7 "while the proxy has not yet
/// been asked for any move").
pub async fn run(registry: Arc<EngineRegistry>, genmove_started: Arc<AtomicBool>) {
    while !genmove_started.load(Ordering::SeqCst) {
        for adapter in registry.snapshot() {
            if !adapter.is_alive().await {
                registry.remove(adapter.id());
                tracing::warn!(engine = %adapter.id(), "engine stopped");
            }
        }
        tokio::time::sleep(SWEEP_INTERVAL).await;
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
