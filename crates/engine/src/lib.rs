// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The pipe's coordination logic: the Engine Registry (B), Command
//! Router (C), Move Decider (D), and Engine Monitor (§4.7), built on
//! the data model in `gtp-proxy-core` and the transports in
//! `gtp-proxy-adapters`.

mod broadcast;
mod decider;
pub mod error;
pub mod factory;
mod monitor;
mod registry;
mod router;

pub use decider::{GenmoveOutcome, MoveDecider, DEFAULT_MAX_DEADLINE_EXTENSIONS};
pub use error::EngineError;
pub use factory::EngineFactory;
pub use monitor::run as run_engine_monitor;
pub use registry::EngineRegistry;
pub use router::{CommandRouter, GenmoveRequest, RouterOutcome};
