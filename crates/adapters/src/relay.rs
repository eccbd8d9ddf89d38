// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Relay transport (reserved engine id `"i"`, spec §4.1): a local
//! subprocess running the `ikatago` relay executable instead of the
//! engine directly, ported from
//! `original_source/ikatagoEngine.py::IkatagoEngine`, which the
//! original implements as a subclass of its local-engine adapter.

use crate::engine_adapter::{EngineAdapter, EngineAdapterError};
use crate::local::LocalSubprocessAdapter;
use async_trait::async_trait;
use gtp_proxy_core::{AnalysisSnapshot, EngineId};

/// Delegates every operation to an inner [`LocalSubprocessAdapter`]
/// configured to launch the relay executable with `--username`,
/// `--password`, and `--kata-local-config` flags instead of the plain
/// engine invocation.
pub struct RelayAdapter {
    inner: LocalSubprocessAdapter,
}

impl RelayAdapter {
    pub fn new(
        exe_path: impl Into<String>,
        username: &str,
        password: &str,
        gtp_config_path: &str,
    ) -> Self {
        let args = vec![
            "--platform".to_string(),
            "all".to_string(),
            "--username".to_string(),
            username.to_string(),
            "--password".to_string(),
            password.to_string(),
            "--kata-local-config".to_string(),
            gtp_config_path.to_string(),
        ];
        Self {
            inner: LocalSubprocessAdapter::new(EngineId::new(EngineId::RELAY), exe_path, args),
        }
    }
}

#[async_trait]
impl EngineAdapter for RelayAdapter {
    fn id(&self) -> &EngineId {
        self.inner.id()
    }

    async fn start(&self) -> Result<(), EngineAdapterError> {
        self.inner.start().await
    }

    async fn send(&self, command: &str) -> Result<(), EngineAdapterError> {
        self.inner.send(command).await
    }

    async fn is_alive(&self) -> bool {
        self.inner.is_alive().await
    }

    async fn stop(&self) -> Result<(), EngineAdapterError> {
        self.inner.stop().await
    }

    fn latest_analysis(&self) -> AnalysisSnapshot {
        self.inner.latest_analysis()
    }

    fn clear_analysis(&self) {
        self.inner.clear_analysis()
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
