// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command Router (spec §4.3): classifies one upstream GTP line by
//! substring match, evaluated in the order the original checks them,
//! and updates proxy state or broadcasts to the registry.

use crate::broadcast::broadcast;
use crate::factory::EngineFactory;
use crate::registry::EngineRegistry;
use gtp_proxy_core::{GameState, PolicyState};

/// A `genmove` request handed off to the Move Decider. The router
/// does not acknowledge `genmove` itself (spec §4.3).
#[derive(Debug, Clone, PartialEq)]
pub struct GenmoveRequest {
    pub id: String,
    pub color: String,
}

/// What the router produced for one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterOutcome {
    /// Router fully handled the line. `ack` is `Some((id, payload))`
    /// if a pseudo-response should be written, `None` if the matched
    /// keyword produces no response at all (spec §4.3: `set_top_visits`,
    /// `set_resign_threshold`, `add_lag_buffer`, `append_engine`,
    /// `stop_engine` are silent).
    Handled { ack: Option<(String, Option<String>)> },
    Genmove(GenmoveRequest),
    /// Default (and `komi`/`clear_board` fall-through) path: the
    /// caller must write the blank ack for `id` *before* awaiting
    /// [`CommandRouter::broadcast`] on `line`, so the upstream client
    /// is not blocked behind backend fan-out latency (spec §4.3).
    AckThenBroadcast { id: String, line: String },
}

/// Split the leading numeric GTP id off a command line. Real GTP
/// clients prefix most lines with an integer id; if the first token
/// does not parse as one, there is no id and the whole line is the
/// command (spec §4.3 "if absent the id is the empty string").
fn split_id(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) if first.parse::<i64>().is_ok() => (first, rest.trim_start()),
        _ => ("", trimmed),
    }
}

pub struct CommandRouter;

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRouter {
    pub fn new() -> Self {
        Self
    }

    /// Route one upstream line. `registry` is consulted for
    /// `append_engine`/`stop_engine` and for broadcasting. `policy`
    /// and `game` carry the pipe's mutable state; `initial_policy` is
    /// the config-derived snapshot restored on `clear_board`, mirroring
    /// the original's `init_game` re-reading its static config on every
    /// reset.
    pub async fn route(
        &self,
        line: &str,
        policy: &mut PolicyState,
        initial_policy: &PolicyState,
        game: &mut GameState,
        registry: &EngineRegistry,
        factory: &dyn EngineFactory,
    ) -> RouterOutcome {
        let (id, rest) = split_id(line);

        if rest.contains("genmove") {
            let color = rest.split_whitespace().nth(1).unwrap_or("").to_string();
            return RouterOutcome::Genmove(GenmoveRequest {
                id: id.to_string(),
                color,
            });
        }

        if rest.contains("set_top_visits") {
            match parse_second_token::<u64>(rest) {
                Some(value) => {
                    policy.top_visits = value;
                    tracing::debug!(top_visits = value, "set top visits");
                }
                None => tracing::error!(line, "malformed set_top_visits command"),
            }
            return RouterOutcome::Handled { ack: None };
        }

        if rest.contains("set_resign_threshold") {
            match parse_second_token::<f64>(rest) {
                Some(value) => {
                    policy.resign_threshold = value;
                    tracing::debug!(resign_threshold = value, "set resign threshold");
                }
                None => tracing::error!(line, "malformed set_resign_threshold command"),
            }
            return RouterOutcome::Handled { ack: None };
        }

        if rest.contains("add_lag_buffer") {
            match parse_second_token::<f64>(rest) {
                Some(seconds) => {
                    policy.add_lag_buffer(seconds);
                    tracing::debug!(lag_buffer = policy.lag_buffer, "set lag buffer");
                }
                None => tracing::error!(line, "malformed add_lag_buffer command"),
            }
            return RouterOutcome::Handled { ack: None };
        }

        if rest.contains("append_engine") {
            if let Some(engine_id) = parse_second_token::<String>(rest) {
                match factory.create(&engine_id).await {
                    Ok(adapter) => {
                        let replay = registry.insert(adapter.clone());
                        for cmd in replay {
                            if let Err(e) = adapter.send(&cmd).await {
                                tracing::error!(engine = %adapter.id(), error = %e, "replay send failed");
                            }
                        }
                        tracing::info!(engine = %adapter.id(), "engine appended");
                    }
                    Err(e) => tracing::error!(engine_id, error = %e, "failed to start engine"),
                }
            } else {
                tracing::error!(line, "malformed append_engine command");
            }
            return RouterOutcome::Handled { ack: None };
        }

        if rest.contains("stop_engine") {
            if let Some(engine_id) = parse_second_token::<String>(rest) {
                if let Some(adapter) = registry.remove(&gtp_proxy_core::EngineId::new(engine_id)) {
                    if let Err(e) = adapter.stop().await {
                        tracing::error!(engine = %adapter.id(), error = %e, "stop failed");
                    }
                }
            } else {
                tracing::error!(line, "malformed stop_engine command");
            }
            return RouterOutcome::Handled { ack: None };
        }

        if rest.contains("time_left") {
            return RouterOutcome::Handled {
                ack: Some((id.to_string(), None)),
            };
        }

        if rest.contains("time_settings") {
            let tokens: Vec<&str> = rest.split_whitespace().collect();
            match tokens.as_slice() {
                [_cmd, _maint, byot, _stones] => match byot.parse::<f64>() {
                    Ok(byot) => {
                        policy.set_time_settings(byot);
                        return RouterOutcome::Handled {
                            ack: Some((id.to_string(), None)),
                        };
                    }
                    Err(_) => {
                        tracing::error!(line, "malformed time_settings command");
                        return RouterOutcome::Handled { ack: None };
                    }
                },
                _ => {
                    tracing::error!(line, "malformed time_settings command");
                    return RouterOutcome::Handled { ack: None };
                }
            }
        }

        if rest.contains("komi") {
            match rest.split_whitespace().last().and_then(|t| t.parse::<f64>().ok()) {
                Some(value) => {
                    game.komi = value;
                    tracing::debug!(komi = value, "set komi");
                    if value == 0.0 {
                        policy.resign_threshold = 0.05;
                    }
                    // Falls through to the default acknowledge-and-broadcast path.
                }
                None => {
                    // Malformed komi short-circuits here: logged, no
                    // state change, no ack, no broadcast.
                    tracing::error!(line, "malformed komi command, leaving komi unchanged");
                    return RouterOutcome::Handled { ack: None };
                }
            }
        }

        if rest.contains("clear_board") {
            *game = GameState::new();
            *policy = initial_policy.clone();
            registry.clear_commands();
        }

        RouterOutcome::AckThenBroadcast {
            id: id.to_string(),
            line: line.to_string(),
        }
    }

    /// Broadcast `line` to every live adapter, applying the same
    /// bookkeeping as the router's default path. Call only after the
    /// caller has written the [`RouterOutcome::AckThenBroadcast`]
    /// pseudo-response, so the ack reaches the upstream client before
    /// backend fan-out runs (spec §4.3).
    pub async fn broadcast(&self, line: &str, game: &mut GameState, registry: &EngineRegistry) {
        broadcast(line, game, registry).await;
    }
}

fn parse_second_token<T: std::str::FromStr>(rest: &str) -> Option<T> {
    let mut tokens = rest.split_whitespace();
    tokens.next()?; // the keyword itself
    tokens.next()?.parse::<T>().ok()
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
