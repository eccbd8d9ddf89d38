// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn send_before_start_fails() {
    let adapter = FakeAdapter::new(EngineId::new("1"));
    let err = adapter.send("boardsize 19").await.unwrap_err();
    assert!(matches!(err, EngineAdapterError::NotRunning(_)));
}

#[tokio::test]
async fn start_then_send_records_calls_in_order() {
    let adapter = FakeAdapter::new(EngineId::new("1"));
    adapter.start().await.unwrap();
    adapter.send("boardsize 19").await.unwrap();
    adapter.send("clear_board").await.unwrap();

    assert_eq!(
        adapter.calls(),
        vec![
            AdapterCall::Start,
            AdapterCall::Send("boardsize 19".to_string()),
            AdapterCall::Send("clear_board".to_string()),
        ]
    );
    assert_eq!(
        adapter.sent_commands(),
        vec!["boardsize 19".to_string(), "clear_board".to_string()]
    );
}

#[tokio::test]
async fn kill_makes_is_alive_false() {
    let adapter = FakeAdapter::new(EngineId::new("1"));
    adapter.start().await.unwrap();
    assert!(adapter.is_alive().await);
    adapter.kill();
    assert!(!adapter.is_alive().await);
}

#[tokio::test]
async fn stop_marks_dead_and_records_call() {
    let adapter = FakeAdapter::new(EngineId::new("1"));
    adapter.start().await.unwrap();
    adapter.stop().await.unwrap();
    assert!(!adapter.is_alive().await);
    assert_eq!(adapter.calls().last(), Some(&AdapterCall::Stop));
}

#[test]
fn push_analysis_then_latest_analysis_round_trips() {
    let adapter = FakeAdapter::new(EngineId::new("1"));
    assert!(adapter.latest_analysis().is_empty());
    adapter.push_analysis(AnalysisSnapshot::new(vec![]));
    adapter.clear_analysis();
    assert!(adapter.latest_analysis().is_empty());
}
