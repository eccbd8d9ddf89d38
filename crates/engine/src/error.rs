// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gtp_proxy_adapters::EngineAdapterError;
use gtp_proxy_core::EngineId;
use thiserror::Error;

/// Errors surfaced by the pipe's coordination logic. None of these
/// ever reach the upstream client (spec §7): they are logged and the
/// affected engine is dropped or the command is discarded.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("starting engine {0} failed: {1}")]
    StartFailed(EngineId, #[source] EngineAdapterError),
    #[error("engine {0} is unknown to the registry")]
    UnknownEngine(EngineId),
    #[error("no transport is configured to resolve engine id {0}")]
    NoTransportConfigured(EngineId),
}
