// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gtp_proxy_adapters::FakeAdapter;
use std::sync::Arc;

fn fake(id: &str) -> Arc<FakeAdapter> {
    Arc::new(FakeAdapter::new(EngineId::new(id)))
}

#[test]
fn local_engine_is_always_inserted_at_front() {
    let registry = EngineRegistry::new();
    registry.insert(fake("1"));
    registry.insert(fake("2"));
    registry.insert(fake("0"));

    let ids: Vec<String> = registry
        .snapshot()
        .iter()
        .map(|a| a.id().as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn non_local_engines_insert_in_order() {
    let registry = EngineRegistry::new();
    registry.insert(fake("3"));
    registry.insert(fake("1"));
    registry.insert(fake("2"));

    let ids: Vec<String> = registry
        .snapshot()
        .iter()
        .map(|a| a.id().as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn insert_replays_prior_commands_excluding_analyze() {
    let registry = EngineRegistry::new();
    registry.record_command("boardsize 19");
    registry.record_command("kata-analyze B 50");
    registry.record_command("play B Q16");

    let replay = registry.insert(fake("1"));
    assert_eq!(replay, vec!["boardsize 19".to_string(), "play B Q16".to_string()]);
}

#[test]
fn remove_drops_matching_adapter() {
    let registry = EngineRegistry::new();
    registry.insert(fake("1"));
    registry.insert(fake("2"));
    let removed = registry.remove(&EngineId::new("1"));
    assert!(removed.is_some());
    let ids: Vec<String> = registry
        .snapshot()
        .iter()
        .map(|a| a.id().as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn remove_absent_id_is_a_no_op() {
    let registry = EngineRegistry::new();
    registry.insert(fake("1"));
    assert!(registry.remove(&EngineId::new("9")).is_none());
    assert_eq!(registry.snapshot().len(), 1);
}

#[tokio::test]
async fn sweep_dead_removes_engines_that_fail_liveness() {
    let registry = EngineRegistry::new();
    let dying = fake("1");
    dying.start().await.unwrap();
    dying.kill();
    registry.insert(dying);
    let surviving = fake("2");
    surviving.start().await.unwrap();
    registry.insert(surviving);

    registry.sweep_dead().await;

    let ids: Vec<String> = registry
        .snapshot()
        .iter()
        .map(|a| a.id().as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn clear_commands_empties_the_replay_log() {
    let registry = EngineRegistry::new();
    registry.record_command("boardsize 19");
    registry.clear_commands();
    assert!(registry.commands_sent().is_empty());
}
