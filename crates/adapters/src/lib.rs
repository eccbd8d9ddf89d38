// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Engine transport adapters: local subprocess, remote shell, and
//! relay, plus the `info move` line parser shared by all three.

mod analysis_parse;
mod engine_adapter;
mod local;
mod relay;
mod remote_shell;
mod snapshot;

pub use analysis_parse::parse_info_move_line;
pub use engine_adapter::{EngineAdapter, EngineAdapterError};
pub use local::LocalSubprocessAdapter;
pub use relay::RelayAdapter;
pub use remote_shell::{RemoteEndpoint, RemoteShellAdapter};
pub use snapshot::SnapshotCell;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{AdapterCall, FakeAdapter};
