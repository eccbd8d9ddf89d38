// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local subprocess transport (reserved engine id `"0"`, spec §4.1),
//! ported from `original_source/localEngine.py::LocalEngine`.

use crate::analysis_parse::parse_info_move_line;
use crate::engine_adapter::{EngineAdapter, EngineAdapterError};
use crate::snapshot::SnapshotCell;
use async_trait::async_trait;
use gtp_proxy_core::{AnalysisSnapshot, EngineId};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::Mutex;

struct Running {
    child: Child,
    stdin: ChildStdin,
}

/// Spawns the local engine executable, writes commands to its stdin,
/// and parses `info move` lines off its stdout in a background task.
pub struct LocalSubprocessAdapter {
    id: EngineId,
    program: String,
    args: Vec<String>,
    running: Mutex<Option<Running>>,
    snapshot: Arc<SnapshotCell>,
}

impl LocalSubprocessAdapter {
    pub fn new(id: EngineId, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            id,
            program: program.into(),
            args,
            running: Mutex::new(None),
            snapshot: Arc::new(SnapshotCell::new()),
        }
    }
}

#[async_trait]
impl EngineAdapter for LocalSubprocessAdapter {
    fn id(&self) -> &EngineId {
        &self.id
    }

    async fn start(&self) -> Result<(), EngineAdapterError> {
        if self.running.lock().await.is_some() {
            return Ok(());
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| EngineAdapterError::StartFailed(self.id.clone(), e.to_string()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EngineAdapterError::StartFailed(self.id.clone(), "no stdout".into()))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineAdapterError::StartFailed(self.id.clone(), "no stdin".into()))?;

        let snapshot = Arc::clone(&self.snapshot);
        let engine_id = self.id.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if line.starts_with("info move") {
                            snapshot.store(parse_info_move_line(&line));
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(engine = %engine_id, error = %e, "read from engine stdout failed");
                        break;
                    }
                }
            }
        });

        *self.running.lock().await = Some(Running { child, stdin });
        Ok(())
    }

    async fn send(&self, command: &str) -> Result<(), EngineAdapterError> {
        let mut guard = self.running.lock().await;
        let Some(running) = guard.as_mut() else {
            return Err(EngineAdapterError::NotRunning(self.id.clone()));
        };
        let line = format!("{command}\n");
        running
            .stdin
            .write_all(line.as_bytes())
            .await
            .map_err(|e| EngineAdapterError::SendFailed(self.id.clone(), e.to_string()))?;
        running
            .stdin
            .flush()
            .await
            .map_err(|e| EngineAdapterError::SendFailed(self.id.clone(), e.to_string()))
    }

    async fn is_alive(&self) -> bool {
        let mut guard = self.running.lock().await;
        match guard.as_mut() {
            Some(running) => matches!(running.child.try_wait(), Ok(None)),
            None => false,
        }
    }

    async fn stop(&self) -> Result<(), EngineAdapterError> {
        let _ = self.send("quit").await;
        if let Some(mut running) = self.running.lock().await.take() {
            let _ = running.child.start_kill();
        }
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
#[path = "local_tests.rs"]
mod tests;
