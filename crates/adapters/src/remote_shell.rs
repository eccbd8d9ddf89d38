// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote shell transport (spec §4.1): an authenticated session to a
//! remote host running the engine, ported from
//! `original_source/engine.py::GtpEngine`, which uses `paramiko` for
//! the SSH session. `ssh2` plays that role here; its handshake,
//! authentication, and channel I/O are all blocking calls, so every
//! operation is offloaded to `tokio::task::spawn_blocking` rather than
//! running on the async executor.

use crate::analysis_parse::parse_info_move_line;
use crate::engine_adapter::{EngineAdapter, EngineAdapterError};
use crate::snapshot::SnapshotCell;
use async_trait::async_trait;
use gtp_proxy_core::{AnalysisSnapshot, EngineId};
use ssh2::Session;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;

/// Host/port/credentials resolved from `ENGINE.<id>` (spec §6): a
/// `host/port/username/password` slash-separated token, mirroring the
/// original's `engine_config.get(engine_id).split("/")`.
#[derive(Debug, Clone)]
pub struct RemoteEndpoint {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

struct RemoteSession {
    channel: Arc<StdMutex<ssh2::Channel>>,
    alive: Arc<AtomicBool>,
}

pub struct RemoteShellAdapter {
    id: EngineId,
    endpoint: RemoteEndpoint,
    command: String,
    session: Mutex<Option<RemoteSession>>,
    snapshot: Arc<SnapshotCell>,
}

impl RemoteShellAdapter {
    /// `command` is the engine invocation line run on the remote
    /// shell, e.g. `run-katago --transmit-move-num 6 -- gtp ...`.
    pub fn new(id: EngineId, endpoint: RemoteEndpoint, command: impl Into<String>) -> Self {
        Self {
            id,
            endpoint,
            command: command.into(),
            session: Mutex::new(None),
            snapshot: Arc::new(SnapshotCell::new()),
        }
    }
}

fn connect_and_exec(
    endpoint: RemoteEndpoint,
    command: String,
) -> Result<ssh2::Channel, std::io::Error> {
    let tcp = TcpStream::connect((endpoint.host.as_str(), endpoint.port))?;
    let mut session = Session::new()?;
    session.set_tcp_stream(tcp);
    session.handshake()?;
    session.userauth_password(&endpoint.username, &endpoint.password)?;
    let mut channel = session.channel_session()?;
    channel.exec(&command)?;
    Ok(channel)
}

#[async_trait]
impl EngineAdapter for RemoteShellAdapter {
    fn id(&self) -> &EngineId {
        &self.id
    }

    async fn start(&self) -> Result<(), EngineAdapterError> {
        if self.session.lock().await.is_some() {
            return Ok(());
        }

        let endpoint = self.endpoint.clone();
        let command = self.command.clone();
        let channel = tokio::task::spawn_blocking(move || connect_and_exec(endpoint, command))
            .await
            .map_err(|e| EngineAdapterError::StartFailed(self.id.clone(), e.to_string()))?
            .map_err(|e| EngineAdapterError::StartFailed(self.id.clone(), e.to_string()))?;

        let channel = Arc::new(StdMutex::new(channel));
        let alive = Arc::new(AtomicBool::new(true));

        let reader_channel = Arc::clone(&channel);
        let reader_alive = Arc::clone(&alive);
        let snapshot = Arc::clone(&self.snapshot);
        let engine_id = self.id.clone();
        std::thread::spawn(move || {
            let result = (|| -> std::io::Result<()> {
                loop {
                    let mut line = String::new();
                    let n = {
                        let mut guard = reader_channel
                            .lock()
                            .map_err(|_| std::io::Error::other("channel mutex poisoned"))?;
                        let mut reader = BufReader::new(&mut *guard);
                        reader.read_line(&mut line)?
                    };
                    if n == 0 {
                        break;
                    }
                    let line = line.trim_end();
                    if line.starts_with("info move") {
                        snapshot.store(parse_info_move_line(line));
                    }
                }
                Ok(())
            })();
            if let Err(e) = result {
                tracing::error!(engine = %engine_id, error = %e, "remote shell read loop ended");
            }
            reader_alive.store(false, Ordering::SeqCst);
        });

        *self.session.lock().await = Some(RemoteSession { channel, alive });
        Ok(())
    }

    async fn send(&self, command: &str) -> Result<(), EngineAdapterError> {
        let guard = self.session.lock().await;
        let Some(session) = guard.as_ref() else {
            return Err(EngineAdapterError::NotRunning(self.id.clone()));
        };
        let channel = Arc::clone(&session.channel);
        let line = format!("{command}\n");
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut guard = channel
                .lock()
                .map_err(|_| std::io::Error::other("channel mutex poisoned"))?;
            guard.write_all(line.as_bytes())?;
            guard.flush()
        })
        .await
        .map_err(|e| EngineAdapterError::SendFailed(self.id.clone(), e.to_string()))?
        .map_err(|e| EngineAdapterError::SendFailed(self.id.clone(), e.to_string()))
    }

    async fn is_alive(&self) -> bool {
        match self.session.lock().await.as_ref() {
            Some(session) => session.alive.load(Ordering::SeqCst),
            None => false,
        }
    }

    async fn stop(&self) -> Result<(), EngineAdapterError> {
        if let Some(session) = self.session.lock().await.take() {
            session.alive.store(false, Ordering::SeqCst);
            let channel = session.channel;
            let _ = tokio::task::spawn_blocking(move || -> std::io::Result<()> {
                let mut guard = channel
                    .lock()
                    .map_err(|_| std::io::Error::other("channel mutex poisoned"))?;
                guard.close()
            })
            .await;
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
#[path = "remote_shell_tests.rs"]
mod tests;
