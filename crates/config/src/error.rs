// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// Errors from locating, reading, or parsing the proxy's configuration
/// file. Any of these is a fatal startup failure (spec §6 "Exit
/// codes").
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("missing required key `{key}` in section [{section}]")]
    MissingKey { section: &'static str, key: &'static str },
    #[error("remote engine id `{0}` is not configured under [ENGINE]")]
    UnknownRemoteId(String),
    #[error("malformed remote endpoint `{0}`: expected host/port/username/password")]
    MalformedEndpoint(String),
}
