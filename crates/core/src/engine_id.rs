// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine identity.
//!
//! `EngineId` is the token an upstream client or operator names a
//! backend by (`append_engine 3`, `stop_engine i`). `"0"` is reserved
//! for the local subprocess engine and `"i"` for the relay; every
//! other token identifies a remote engine resolved from configuration.

crate::define_id! {
    /// Identifier for one backend engine (`"0"`, `"i"`, or a remote token).
    pub struct EngineId;
}

impl EngineId {
    /// Reserved id for the local subprocess engine.
    pub const LOCAL: &'static str = "0";
    /// Reserved id for the relay (ikatago) engine.
    pub const RELAY: &'static str = "i";

    pub fn is_local(&self) -> bool {
        self.0 == Self::LOCAL
    }

    pub fn is_relay(&self) -> bool {
        self.0 == Self::RELAY
    }
}

#[cfg(test)]
#[path = "engine_id_tests.rs"]
mod tests;
