// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake engine adapter for testing, mirroring `FakeSessionAdapter`.
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::engine_adapter::{EngineAdapter, EngineAdapterError};
use crate::snapshot::SnapshotCell;
use async_trait::async_trait;
use gtp_proxy_core::{AnalysisSnapshot, EngineId};
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded interaction with a [`FakeAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    Start,
    Send(String),
    Stop,
}

struct FakeState {
    started: bool,
    alive: bool,
    calls: Vec<AdapterCall>,
}

/// Scriptable [`EngineAdapter`] for exercising the registry, router,
/// and move decider without a real engine process.
#[derive(Clone)]
pub struct FakeAdapter {
    id: EngineId,
    state: Arc<Mutex<FakeState>>,
    snapshot: Arc<SnapshotCell>,
}

impl FakeAdapter {
    pub fn new(id: EngineId) -> Self {
        Self {
            id,
            state: Arc::new(Mutex::new(FakeState {
                started: false,
                alive: true,
                calls: Vec::new(),
            })),
            snapshot: Arc::new(SnapshotCell::new()),
        }
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.state.lock().calls.clone()
    }

    pub fn sent_commands(&self) -> Vec<String> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                AdapterCall::Send(cmd) => Some(cmd.clone()),
                _ => None,
            })
            .collect()
    }

    /// Force the next `is_alive` probe to report dead, simulating an
    /// engine crash.
    pub fn kill(&self) {
        self.state.lock().alive = false;
    }

    /// Push an analysis snapshot as if the engine had just emitted it.
    pub fn push_analysis(&self, snapshot: AnalysisSnapshot) {
        self.snapshot.store(snapshot);
    }
}

#[async_trait]
impl EngineAdapter for FakeAdapter {
    fn id(&self) -> &EngineId {
        &self.id
    }

    async fn start(&self) -> Result<(), EngineAdapterError> {
        let mut state = self.state.lock();
        state.calls.push(AdapterCall::Start);
        state.started = true;
        Ok(())
    }

    async fn send(&self, command: &str) -> Result<(), EngineAdapterError> {
        let mut state = self.state.lock();
        if !state.started {
            return Err(EngineAdapterError::NotRunning(self.id.clone()));
        }
        state.calls.push(AdapterCall::Send(command.to_string()));
        Ok(())
    }

    async fn is_alive(&self) -> bool {
        let state = self.state.lock();
        state.started && state.alive
    }

    async fn stop(&self) -> Result<(), EngineAdapterError> {
        let mut state = self.state.lock();
        state.calls.push(AdapterCall::Stop);
        state.alive = false;
        Ok(())
    }

    fn latest_analysis(&self) -> AnalysisSnapshot {
        self.snapshot.load()
    }

    fn clear_analysis(&self) {
        self.snapshot.clear();
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
