// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Game state owned by the pipe, reset on `clear_board` (spec §3).

use std::time::{Duration, Instant};

/// Default komi used by a freshly reset game, matching
/// `original_source/gtpPipe.py::init_game`.
pub const DEFAULT_KOMI: f64 = 7.5;

/// Mutable per-game state: move history, komi, the replayable command
/// log, and turn-clock bookkeeping.
///
/// Invariant: `winrates.len() == score_lead.len()` always holds —
/// the two are only ever pushed together by [`GameState::record_move`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub winrates: Vec<f64>,
    pub score_lead: Vec<f64>,
    pub move_counts: u64,
    pub komi: f64,

    /// Replayable GTP log excluding analysis requests (spec §3 invariant 3).
    pub commands_sent: Vec<String>,

    pub my_turn: bool,
    pub my_turn_times: Vec<Duration>,
    pub opponent_turn_times: Vec<Duration>,
    pub opponent_turn_start: Option<Instant>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            winrates: Vec::new(),
            score_lead: Vec::new(),
            move_counts: 0,
            komi: DEFAULT_KOMI,
            commands_sent: Vec::new(),
            my_turn: false,
            my_turn_times: Vec::new(),
            opponent_turn_times: Vec::new(),
            opponent_turn_start: None,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitialize for a new game (`clear_board`).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the chosen move's aggregated winrate/score for history,
    /// preserving the `winrates.len() == score_lead.len()` invariant.
    pub fn record_move(&mut self, winrate: f64, score_lead: f64) {
        self.winrates.push(winrate);
        self.score_lead.push(score_lead);
    }

    /// Append a non-analyze command to the replay log used to catch
    /// up late-joining engines.
    pub fn record_command(&mut self, command: impl Into<String>) {
        self.commands_sent.push(command.into());
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod tests;
