// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves an engine id to a constructed, started adapter (spec
//! §4.1 `append`: "resolve transport, construct adapter, start it").
//! Transport resolution needs configuration the engine crate doesn't
//! otherwise depend on, so it is injected as a trait object rather
//! than hard-coded here.

use crate::error::EngineError;
use async_trait::async_trait;
use gtp_proxy_adapters::EngineAdapter;
use std::sync::Arc;

#[async_trait]
pub trait EngineFactory: Send + Sync {
    /// Build the adapter for `id` (resolving `"0"` to the local
    /// subprocess, `"i"` to the relay, anything else to a remote
    /// shell lookup) and start it. Returns an error if construction
    /// or startup fails; the caller is responsible for not inserting
    /// the adapter into the registry in that case.
    async fn create(&self, id: &str) -> Result<Arc<dyn EngineAdapter>, EngineError>;
}
