// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires the Engine Registry, Command Router, and Move Decider to the
//! upstream GTP client's stdin/stdout (spec §4, §7).

use gtp_proxy_config::Config;
use gtp_proxy_core::{EngineId, GameState, GtpResponse, PolicyState};
use gtp_proxy_engine::{
    run_engine_monitor, CommandRouter, EngineFactory, EngineRegistry, MoveDecider, RouterOutcome,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// `quit` is special-cased ahead of the Command Router (spec §4.3,
/// §7): acknowledge, flush, and stop reading without ever broadcasting
/// `quit` to the engine roster.
const QUIT: &str = "quit";

pub struct App {
    policy: PolicyState,
    initial_policy: PolicyState,
    game: GameState,
    registry: Arc<EngineRegistry>,
    router: CommandRouter,
    decider: MoveDecider,
    factory: Box<dyn EngineFactory>,
    genmove_started: Arc<AtomicBool>,
}

impl App {
    /// Build the initial policy/game state from configuration, append
    /// the bootstrap engine roster (spec §6 `PIPE.initial_local` /
    /// `initial_engines`), and spawn the Engine Monitor.
    pub async fn bootstrap(config: &Config, factory: Box<dyn EngineFactory>) -> Self {
        let initial_policy = config.pipe.to_policy();
        let registry = Arc::new(EngineRegistry::new());
        let genmove_started = Arc::new(AtomicBool::new(false));

        if config.pipe.initial_local {
            append_at_startup(&registry, factory.as_ref(), EngineId::LOCAL).await;
        }
        for id in &config.pipe.initial_engines {
            append_at_startup(&registry, factory.as_ref(), id).await;
        }

        tokio::spawn(run_engine_monitor(registry.clone(), genmove_started.clone()));

        Self {
            policy: initial_policy.clone(),
            initial_policy,
            game: GameState::new(),
            registry,
            router: CommandRouter::new(),
            decider: MoveDecider::new(),
            factory,
            genmove_started,
        }
    }

    /// Read GTP commands from `input` line by line until EOF or
    /// `quit`, writing responses to `output` (spec §4.5, §7).
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(input).lines();
        while let Some(raw) = lines.next_line().await? {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if line.contains(QUIT) {
                output.write_all(b"= \n\n").await?;
                output.flush().await?;
                tracing::info!("quit received, exiting");
                self.stop_all_engines().await;
                break;
            }

            let outcome = self
                .router
                .route(
                    line,
                    &mut self.policy,
                    &self.initial_policy,
                    &mut self.game,
                    &self.registry,
                    self.factory.as_ref(),
                )
                .await;

            match outcome {
                RouterOutcome::Handled { ack: Some((id, payload)) } => {
                    let response = match payload {
                        Some(payload) => GtpResponse::ack_with(id, payload),
                        None => GtpResponse::ack(id),
                    };
                    write_response(&mut output, &response).await?;
                }
                RouterOutcome::Handled { ack: None } => {}
                RouterOutcome::Genmove(req) => {
                    self.genmove_started.store(true, Ordering::SeqCst);
                    self.decider
                        .decide(
                            &req.id,
                            &req.color,
                            &mut self.policy,
                            &mut self.game,
                            &self.registry,
                            &mut output,
                        )
                        .await?;
                }
                RouterOutcome::AckThenBroadcast { id, line } => {
                    write_response(&mut output, &GtpResponse::ack(id)).await?;
                    self.router.broadcast(&line, &mut self.game, &self.registry).await;
                }
            }
        }

        Ok(())
    }

    /// Stop every registered adapter directly, without going through
    /// the broadcast path (`quit` is never itself sent to engines).
    async fn stop_all_engines(&self) {
        for adapter in self.registry.snapshot() {
            if let Err(e) = adapter.stop().await {
                tracing::error!(engine = %adapter.id(), error = %e, "stop on shutdown failed");
            }
        }
    }
}

async fn append_at_startup(registry: &EngineRegistry, factory: &dyn EngineFactory, id: &str) {
    match factory.create(id).await {
        Ok(adapter) => {
            let replay = registry.insert(adapter.clone());
            for cmd in replay {
                if let Err(e) = adapter.send(&cmd).await {
                    tracing::error!(engine = %adapter.id(), error = %e, "replay send failed");
                }
            }
            tracing::info!(engine = %adapter.id(), "engine appended at startup");
        }
        Err(e) => tracing::error!(engine_id = id, error = %e, "failed to start engine at startup"),
    }
}

async fn write_response<W: AsyncWrite + Unpin>(
    output: &mut W,
    response: &GtpResponse,
) -> std::io::Result<()> {
    output.write_all(response.to_string().as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
