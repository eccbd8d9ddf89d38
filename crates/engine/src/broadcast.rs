// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared broadcast semantics (spec §4.3 "Broadcast semantics"), used
//! both by the Command Router for pass-through commands and by the
//! Move Decider for its synthesized `play` after a genmove.

use crate::registry::EngineRegistry;
use gtp_proxy_core::GameState;

/// Broadcast `line` verbatim to every live adapter, updating
/// `move_counts` and the replayable command log first.
pub(crate) async fn broadcast(line: &str, game: &mut GameState, registry: &EngineRegistry) {
    if line.contains("play") {
        game.move_counts += 1;
    }
    if !line.contains("analyze") {
        game.record_command(line);
    }
    registry.record_command(line);

    for adapter in registry.alive_snapshot().await {
        if let Err(e) = adapter.send(line).await {
            tracing::error!(engine = %adapter.id(), error = %e, "send to engine failed");
        }
    }
}

#[cfg(test)]
#[path = "broadcast_tests.rs"]
mod tests;
