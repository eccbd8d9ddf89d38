// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn defaults_match_pipe_section() {
    let policy = PolicyState::default();
    assert_eq!(policy.lag_buffer, 1.0);
    assert_eq!(policy.response_time_limit, 5.0);
    assert_eq!(policy.top_visits, 200_000);
    assert_eq!(policy.resign_threshold, 0.1);
    assert_eq!(policy.resign_consec_turn, 3);
    assert_eq!(policy.max_time, DEFAULT_MAX_TIME_SECS);
    assert_eq!(policy.max_visits, DEFAULT_MAX_VISITS);
}

#[parameterized(
    opening_move = { 0, 20_000 },
    ninth_move = { 9, 20_000 },
    tenth_move = { 10, 200_000 },
    deep_midgame = { 120, 200_000 },
)]
fn adjust_max_visits_splits_at_ten_moves(move_counts: u64, expected: u64) {
    let mut policy = PolicyState::default();
    policy.adjust_max_visits(move_counts);
    assert_eq!(policy.max_visits, expected);
}

#[test]
fn add_lag_buffer_shrinks_max_time_and_grows_buffer() {
    let mut policy = PolicyState::default();
    policy.add_lag_buffer(0.5);
    assert_eq!(policy.lag_buffer, 1.5);
    assert_eq!(policy.max_time, DEFAULT_MAX_TIME_SECS - 0.5);
}

#[test]
fn set_time_settings_nets_out_lag_buffer() {
    let mut policy = PolicyState::default();
    policy.set_time_settings(30.0);
    assert_eq!(policy.max_time, 29.0);
}

#[test]
fn resignp_false_on_flat_winrates() {
    // spec §8 resign law: 20 equal winrates never trigger resignation.
    let policy = PolicyState::default();
    let winrates = vec![0.8; 20];
    assert!(!policy.resignp(&winrates));
}

#[test]
fn resignp_true_on_collapsed_tail() {
    // spec §8 resign law: first=0.8, last three = [0.05, 0.04, 0.03],
    // resign_threshold=0.1, resign_consec_turn=3.
    let mut policy = PolicyState::default();
    policy.resign_threshold = 0.1;
    policy.resign_consec_turn = 3;
    let mut winrates = vec![0.8];
    winrates.extend(std::iter::repeat(0.8).take(16));
    winrates.extend([0.05, 0.04, 0.03]);
    assert_eq!(winrates.len(), 20);
    assert!(policy.resignp(&winrates));
}

#[test]
fn resignp_false_below_twenty_moves() {
    let policy = PolicyState::default();
    let winrates = vec![0.01; 19];
    assert!(!policy.resignp(&winrates));
}

#[test]
fn resignp_false_when_tail_minimum_is_not_the_latest() {
    let mut policy = PolicyState::default();
    policy.resign_threshold = 0.1;
    let mut winrates = vec![0.8; 17];
    winrates.extend([0.03, 0.05, 0.04]); // latest (0.04) is not the tail minimum
    assert!(!policy.resignp(&winrates));
}
