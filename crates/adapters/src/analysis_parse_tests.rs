// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn non_analysis_line_yields_empty_snapshot() {
    let snap = parse_info_move_line("= pass");
    assert!(snap.is_empty());
}

#[test]
fn single_record_parses_known_fields() {
    let line = "info move Q16 visits 120 winrate 0.55 scoreLead 3.5 order 0 pv Q16 D4";
    let snap = parse_info_move_line(line);
    assert_eq!(snap.rows.len(), 1);
    let row = &snap.rows[0];
    assert_eq!(row.mv, "Q16");
    assert_eq!(row.visits, 120.0);
    assert_eq!(row.winrate, 0.55);
    assert_eq!(row.score_lead, 3.5);
    assert_eq!(row.order, 0.0);
}

#[test]
fn multiple_records_split_on_info_prefix() {
    let line = "info move Q16 visits 120 winrate 0.55 scoreLead 3.5 order 0 pv Q16 \
                info move D4 visits 80 winrate 0.48 scoreLead 1.0 order 1 pv D4";
    let snap = parse_info_move_line(line);
    assert_eq!(snap.rows.len(), 2);
    assert_eq!(snap.rows[0].mv, "Q16");
    assert_eq!(snap.rows[1].mv, "D4");
}

#[test]
fn unknown_keys_go_into_extra_map() {
    let line = "info move Q16 visits 120 winrate 0.55 scoreLead 3.5 prior 0.2 order 0 pv Q16";
    let snap = parse_info_move_line(line);
    assert_eq!(snap.rows[0].extra.get("prior"), Some(&0.2));
}

#[test]
fn non_numeric_value_is_skipped_not_fatal() {
    let line = "info move Q16 visits 120 isDuringSearch false winrate 0.5";
    let snap = parse_info_move_line(line);
    assert_eq!(snap.rows[0].visits, 120.0);
    assert!(!snap.rows[0].extra.contains_key("isDuringSearch"));
}

#[test]
fn truncates_at_twenty_four_tokens_like_the_original() {
    let mut line = String::from("info move Q16");
    for i in 0..40 {
        line.push_str(&format!(" k{i} {i}"));
    }
    let snap = parse_info_move_line(&line);
    // 24 tokens = 1 (move) pair + 11 more pairs = 12 pairs total.
    assert_eq!(snap.rows[0].extra.len(), 11);
}

#[test]
fn record_without_move_field_is_dropped() {
    let line = "info move Q16 visits 1 info garbage 2 3";
    let snap = parse_info_move_line(line);
    assert_eq!(snap.rows.len(), 1);
}
