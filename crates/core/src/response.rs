// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire format for responses to the upstream GTP client (spec §4.5,
//! §6): `=<id>[ payload]\n\n` on success, `?<id> error\n\n` when the
//! upstream line itself could not be parsed at all.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GtpResponse {
    Ack { id: String, payload: Option<String> },
    ParseError { id: String },
}

impl GtpResponse {
    pub fn ack(id: impl Into<String>) -> Self {
        Self::Ack {
            id: id.into(),
            payload: None,
        }
    }

    pub fn ack_with(id: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::Ack {
            id: id.into(),
            payload: Some(payload.into()),
        }
    }

    pub fn parse_error(id: impl Into<String>) -> Self {
        Self::ParseError { id: id.into() }
    }
}

impl fmt::Display for GtpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ack { id, payload: None } => write!(f, "={id}\n\n"),
            Self::Ack {
                id,
                payload: Some(payload),
            } => write!(f, "={id} {payload}\n\n"),
            Self::ParseError { id } => write!(f, "?{id} error\n\n"),
        }
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
