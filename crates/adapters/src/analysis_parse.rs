// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for one `info move …` line emitted by an engine in
//! `kata-analyze` mode, ported field-for-field from
//! `analysis_to_df` in the Python original (spec §4.2).

use gtp_proxy_core::{AnalysisSnapshot, MoveRow};
use std::collections::HashMap;

/// KataGo packs many `info move <mv> visits <n> winrate <w> ...`
/// records onto one line, one per candidate move. Each record is
/// truncated to its first 24 whitespace tokens before parsing, which
/// keeps the fixed-shape key/value fields and drops the trailing
/// variable-length `pv` move list — the same truncation the original
/// applies.
const MAX_TOKENS_PER_RECORD: usize = 24;

/// Parse one line of engine stdout. Returns an empty snapshot unless
/// the line is an `info move` analysis line — mirroring the original's
/// `"info move" in line` gate before it bothers parsing at all.
pub fn parse_info_move_line(line: &str) -> AnalysisSnapshot {
    if !line.starts_with("info move") {
        return AnalysisSnapshot::default();
    }

    let rows = line
        .split("info ")
        .filter(|record| !record.trim().is_empty())
        .filter_map(parse_record)
        .collect();

    AnalysisSnapshot::new(rows)
}

/// Parse one `move <mv> key1 value1 key2 value2 ...` record into a
/// [`MoveRow`]. Returns `None` if the record has no `move` field.
fn parse_record(record: &str) -> Option<MoveRow> {
    let tokens: Vec<&str> = record.split_whitespace().take(MAX_TOKENS_PER_RECORD).collect();

    let mut pairs = tokens.chunks_exact(2).map(|pair| (pair[0], pair[1]));
    let (first_key, first_value) = pairs.next()?;
    if first_key != "move" {
        return None;
    }

    let mut row = MoveRow {
        mv: first_value.to_string(),
        visits: 0.0,
        winrate: 0.0,
        score_lead: 0.0,
        order: 0.0,
        extra: HashMap::new(),
    };

    for (key, value) in pairs {
        let Ok(parsed) = value.parse::<f64>() else {
            continue;
        };
        match key {
            "visits" => row.visits = parsed,
            "winrate" => row.winrate = parsed,
            "scoreLead" => row.score_lead = parsed,
            "order" => row.order = parsed,
            other => {
                row.extra.insert(other.to_string(), parsed);
            }
        }
    }

    Some(row)
}

#[cfg(test)]
#[path = "analysis_parse_tests.rs"]
mod tests;
