// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-budget and resign policy state (spec §3, §4.6).

/// Default per-turn wall budget before any `time_settings` command
/// arrives, matching `original_source/gtpPipe.py::init_game`.
pub const DEFAULT_MAX_TIME_SECS: f64 = 13.0;

/// Default visit-budget ceiling used before the first `genmove`
/// recalculates it, matching the Python original.
pub const DEFAULT_MAX_VISITS: u64 = 10_000;

/// Mutable policy knobs: time budget, visit budget, and resign
/// thresholds. Lives for the process lifetime, passed explicitly
/// rather than through a singleton (spec §9 "Global mutable policy
/// state").
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyState {
    pub lag_buffer: f64,
    pub max_time: f64,
    pub response_time_limit: f64,
    pub max_visits: u64,
    pub top_visits: u64,
    pub resign_threshold: f64,
    pub resign_consec_turn: usize,
}

impl Default for PolicyState {
    fn default() -> Self {
        Self {
            lag_buffer: 1.0,
            max_time: DEFAULT_MAX_TIME_SECS,
            response_time_limit: 5.0,
            max_visits: DEFAULT_MAX_VISITS,
            top_visits: 200_000,
            resign_threshold: 0.1,
            resign_consec_turn: 3,
        }
    }
}

impl PolicyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute `max_visits` from `top_visits` and the number of own
    /// moves played so far (spec §4.4 step 3): the first 10 moves use
    /// a tenth of the ceiling, giving fast early-game responses.
    pub fn adjust_max_visits(&mut self, move_counts: u64) {
        self.max_visits = if move_counts < 10 {
            self.top_visits / 10
        } else {
            self.top_visits
        };
    }

    /// `add_lag_buffer S`: widen the lag buffer and shrink the
    /// remaining per-turn budget by the same amount.
    pub fn add_lag_buffer(&mut self, seconds: f64) {
        self.max_time -= seconds;
        self.lag_buffer += seconds;
    }

    /// `time_settings _ _ byoyomi _`: set the per-turn budget from the
    /// byoyomi period, net of the lag buffer.
    pub fn set_time_settings(&mut self, byoyomi_secs: f64) {
        self.max_time = byoyomi_secs - self.lag_buffer;
    }

    /// Resign predicate (spec §4.6): true iff the win-rate trajectory
    /// has collapsed by at least 4x from the opening move and stayed
    /// at or below `resign_threshold` for the last `resign_consec_turn`
    /// moves, with the most recent move being the tail's minimum.
    /// Evaluated only at move-selection time.
    pub fn resignp(&self, winrates: &[f64]) -> bool {
        if winrates.len() < 20 {
            return false;
        }
        let first = winrates[0];
        if first == 0.0 {
            // The Python original would raise ZeroDivisionError here;
            // treating it as "not resigning" is the safer default.
            return false;
        }
        let last = winrates[winrates.len() - 1];
        let tail_start = winrates.len().saturating_sub(self.resign_consec_turn);
        let tail = &winrates[tail_start..];
        let tail_max = tail.iter().copied().fold(f64::MIN, f64::max);
        let tail_min = tail.iter().copied().fold(f64::MAX, f64::min);

        last / first < 0.25 && tail_max < self.resign_threshold && tail_min == last
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
