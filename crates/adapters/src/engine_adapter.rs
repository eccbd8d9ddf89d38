// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The [`EngineAdapter`] contract every backend transport implements
//! (spec §2, §4.1): local subprocess, remote shell, and relay.

use async_trait::async_trait;
use gtp_proxy_core::{AnalysisSnapshot, EngineId};
use thiserror::Error;

/// Errors from engine transport operations.
#[derive(Debug, Error)]
pub enum EngineAdapterError {
    #[error("engine {0} failed to start: {1}")]
    StartFailed(EngineId, String),
    #[error("engine {0} send failed: {1}")]
    SendFailed(EngineId, String),
    #[error("engine {0} is not running")]
    NotRunning(EngineId),
}

/// One backend engine's transport: start it, feed it GTP commands, read
/// its liveness and its latest analysis snapshot, and stop it.
///
/// Implementors own exactly one running (or starting, or dead) engine
/// process/session; the registry in `gtp-proxy-engine` holds many of
/// these behind `Arc<dyn EngineAdapter>`.
#[async_trait]
pub trait EngineAdapter: Send + Sync {
    /// The id this adapter was constructed for.
    fn id(&self) -> &EngineId;

    /// Launch the transport and start its background reader loop.
    /// Idempotent: calling `start` on an already-started adapter is a
    /// no-op.
    async fn start(&self) -> Result<(), EngineAdapterError>;

    /// Send one line of GTP to the engine, without waiting for a
    /// response (spec §4.1: the multiplexer never blocks on acks from
    /// individual engines).
    async fn send(&self, command: &str) -> Result<(), EngineAdapterError>;

    /// Liveness probe backed by the transport's own notion of "up"
    /// (process exit status, or authenticated session state).
    async fn is_alive(&self) -> bool;

    /// Tear down the transport and stop its background reader loop.
    async fn stop(&self) -> Result<(), EngineAdapterError>;

    /// The most recently parsed `info move` snapshot, or an empty
    /// snapshot if none has arrived since the last clear.
    fn latest_analysis(&self) -> AnalysisSnapshot;

    /// Discard the current snapshot, e.g. before a new `kata-analyze`
    /// round so a stale snapshot from the previous move is never
    /// mistaken for a fresh one (spec §4.4 step 2).
    fn clear_analysis(&self);
}
