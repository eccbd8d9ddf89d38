// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves `append_engine`/startup ids to concrete adapters from the
//! loaded configuration (spec §4.1 `append`, §6).

use async_trait::async_trait;
use gtp_proxy_adapters::{EngineAdapter, LocalSubprocessAdapter, RelayAdapter, RemoteShellAdapter};
use gtp_proxy_config::Config;
use gtp_proxy_core::EngineId;
use gtp_proxy_engine::{EngineError, EngineFactory};
use std::sync::Arc;

/// Command line run on the remote shell for every non-reserved engine
/// id, matching `original_source/engine.py::GtpEngine`'s invocation of
/// the KataGo GTP binary over the SSH session.
const REMOTE_COMMAND: &str = "run-katago --transmit-move-num 6 -- gtp -override-config numSearchThreads=32";

/// Builds adapters against a loaded [`Config`]: `"0"` resolves to
/// `[LOCAL]`, `"i"` to `[IKATAGO]`, anything else to `[ENGINE]`.
pub struct ConfigEngineFactory {
    config: Arc<Config>,
}

impl ConfigEngineFactory {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EngineFactory for ConfigEngineFactory {
    async fn create(&self, id: &str) -> Result<Arc<dyn EngineAdapter>, EngineError> {
        let engine_id = EngineId::new(id);

        let adapter: Arc<dyn EngineAdapter> = if engine_id.is_local() {
            let local = self
                .config
                .local
                .as_ref()
                .ok_or_else(|| EngineError::NoTransportConfigured(engine_id.clone()))?;
            let (program, args) = local.program_and_args();
            Arc::new(LocalSubprocessAdapter::new(
                engine_id.clone(),
                program.to_string_lossy().into_owned(),
                args,
            ))
        } else if engine_id.is_relay() {
            let ikatago = self
                .config
                .ikatago
                .as_ref()
                .ok_or_else(|| EngineError::NoTransportConfigured(engine_id.clone()))?;
            Arc::new(RelayAdapter::new(
                ikatago.program().to_string_lossy().into_owned(),
                &ikatago.username,
                &ikatago.password,
                &ikatago.gtp_config_path(),
            ))
        } else {
            let endpoint = self
                .config
                .engine
                .resolve(id)
                .map_err(|_| EngineError::NoTransportConfigured(engine_id.clone()))?;
            Arc::new(RemoteShellAdapter::new(
                engine_id.clone(),
                endpoint,
                REMOTE_COMMAND,
            ))
        };

        adapter
            .start()
            .await
            .map_err(|e| EngineError::StartFailed(engine_id.clone(), e))?;

        Ok(adapter)
    }
}
