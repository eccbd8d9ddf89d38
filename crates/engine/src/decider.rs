// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Move Decider (spec §4.4): for `genmove`, fan out `kata-analyze`,
//! aggregate streaming snapshots under a deadline, pick a move, and
//! update turn/resign bookkeeping. Ported from
//! `original_source/gtpPipe.py::dealing_with_genmove` and
//! `move_from_df`.

use crate::broadcast::broadcast;
use crate::registry::EngineRegistry;
use gtp_proxy_core::{aggregate, choose_best, GameState, GtpResponse, PolicyState};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::Instant;

/// Streaming update period the engines expect, in centiseconds (spec
/// §4.4 step 5).
const ANALYZE_INTERVAL_CENTISECONDS: u32 = 50;

/// Poll cadence while waiting on analysis (spec §4.4 step 6, §9).
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default cap on wall-deadline extensions before giving up and
/// returning whatever (possibly empty) result exists — spec §7's
/// documented liveness deviation from the original's unbounded
/// extension, and SPEC_FULL point 3.
pub const DEFAULT_MAX_DEADLINE_EXTENSIONS: u32 = 3;

/// Outcome of one `genmove`: the pseudo-response to write to the
/// upstream client, and the synthesized `play` line the caller must
/// route through the normal broadcast path (already done by
/// `decide`, included here for callers that want to observe it).
#[derive(Debug, Clone, PartialEq)]
pub struct GenmoveOutcome {
    pub response: GtpResponse,
    pub play_command: String,
}

pub struct MoveDecider {
    max_deadline_extensions: u32,
}

impl Default for MoveDecider {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveDecider {
    pub fn new() -> Self {
        Self {
            max_deadline_extensions: DEFAULT_MAX_DEADLINE_EXTENSIONS,
        }
    }

    pub fn with_max_deadline_extensions(max_deadline_extensions: u32) -> Self {
        Self {
            max_deadline_extensions,
        }
    }

    /// Run one `genmove ID COLOR` to completion (spec §4.4 steps 1–10).
    pub async fn decide<W>(
        &self,
        id: &str,
        color: &str,
        policy: &mut PolicyState,
        game: &mut GameState,
        registry: &EngineRegistry,
        output: &mut W,
    ) -> std::io::Result<GenmoveOutcome>
    where
        W: AsyncWrite + Unpin,
    {
        game.my_turn = true;
        // Two clocks are in play: `start` drives deadline arithmetic
        // via `tokio::time`, so tests can pause/advance it; `wall_start`
        // is real wall-clock time used only for the informational
        // turn-duration bookkeeping at the end of this function.
        let start = Instant::now();
        let wall_start = std::time::Instant::now();
        let mut deadline = start + non_negative(policy.max_time);
        let mut response_deadline = start + non_negative(policy.response_time_limit);

        policy.adjust_max_visits(game.move_counts);

        for adapter in registry.alive_snapshot().await {
            adapter.clear_analysis();
        }

        let analyze_cmd = format!("kata-analyze {color} {ANALYZE_INTERVAL_CENTISECONDS}");
        broadcast(&analyze_cmd, game, registry).await;

        let mut deadline_extensions = 0u32;
        let result = loop {
            let adapters = registry.alive_snapshot().await;
            let snapshots: Vec<_> = adapters
                .iter()
                .map(|a| a.latest_analysis())
                .filter(|s| !s.is_empty())
                .collect();

            if !snapshots.is_empty() {
                let total_visits: f64 = snapshots.iter().map(|s| s.total_visits()).sum();
                if total_visits >= policy.max_visits as f64 {
                    break snapshots;
                }
            }

            let now = Instant::now();

            if snapshots.is_empty() && now > response_deadline {
                broadcast(&analyze_cmd, game, registry).await;
                response_deadline += non_negative(policy.response_time_limit);
                tracing::warn!("genmove response deadline reached, re-broadcasting kata-analyze");
            }

            if now >= deadline {
                if !snapshots.is_empty() {
                    break snapshots;
                }
                deadline_extensions += 1;
                if deadline_extensions > self.max_deadline_extensions {
                    tracing::warn!(
                        extensions = deadline_extensions,
                        "genmove deadline extension cap reached, giving up with no analysis"
                    );
                    break snapshots;
                }
                deadline += non_negative(policy.max_time);
                tracing::warn!("genmove deadline reached, extending");
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        };

        let aggregated = aggregate(result.iter());
        let mv = match choose_best(&aggregated) {
            Some(best) => {
                game.record_move(round2(best.avg_winrate), round2(best.avg_score));
                if policy.resignp(&game.winrates) {
                    "resign".to_string()
                } else {
                    best.mv.clone()
                }
            }
            // No analysis ever arrived within the extension cap: there
            // is nothing to play, so the turn is conceded.
            None => "resign".to_string(),
        };

        let response = GtpResponse::ack_with(id, mv.clone());

        // spec §4.4 step 8 precedes step 9 (and the original's
        // send_pseudo_response precedes send_command_to_engines): write
        // the ack before synthesizing/broadcasting `play` so the
        // upstream client is never blocked behind backend fan-out.
        output.write_all(response.to_string().as_bytes()).await?;
        output.flush().await?;

        let play_command = format!("play {color} {mv}");
        broadcast(&play_command, game, registry).await;

        let wall_now = std::time::Instant::now();
        if let Some(opponent_turn_start) = game.opponent_turn_start {
            game.opponent_turn_times.push(wall_now.saturating_duration_since(opponent_turn_start));
        }
        game.opponent_turn_start = Some(wall_now);
        game.my_turn_times.push(wall_now.saturating_duration_since(wall_start));
        game.my_turn = false;

        Ok(GenmoveOutcome { response, play_command })
    }
}

fn non_negative(secs: f64) -> Duration {
    Duration::from_secs_f64(secs.max(0.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "decider_tests.rs"]
mod tests;
