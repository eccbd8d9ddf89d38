// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sectioned configuration (spec §6), resolved from TOML rather than
//! the Python original's `configparser` ini format — the teacher
//! already depends on `toml` for exactly this "sectioned key/value
//! store" shape, so no additional parser crate is introduced.

use crate::error::ConfigError;
use gtp_proxy_adapters::RemoteEndpoint;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

fn default_local_exe() -> String {
    "katago.exe".to_string()
}

fn default_local_model() -> String {
    "b40.bin.gz".to_string()
}

fn default_ikatago_exe() -> String {
    "ikatago.exe".to_string()
}

fn default_lag_buffer() -> f64 {
    1.0
}

fn default_response_time_limit() -> f64 {
    5.0
}

fn default_top_visits() -> u64 {
    200_000
}

fn default_resign_threshold() -> f64 {
    0.1
}

fn default_resign_consec_turn() -> usize {
    3
}

/// `[ENGINE]`: per-remote-id connection tokens plus a shared data
/// folder, matching `original_source/config.py`'s `ENGINE` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineSection {
    pub data_folder: Option<String>,
    #[serde(flatten)]
    pub remotes: HashMap<String, String>,
}

impl EngineSection {
    /// Resolve the `host/port/username/password` token for a remote
    /// id, matching `engine_config.get(engine_id).split("/")`.
    pub fn resolve(&self, id: &str) -> Result<RemoteEndpoint, ConfigError> {
        let raw = self
            .remotes
            .get(id)
            .ok_or_else(|| ConfigError::UnknownRemoteId(id.to_string()))?;
        let mut parts = raw.splitn(4, '/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(host), Some(port), Some(username), Some(password)) => Ok(RemoteEndpoint {
                host: host.to_string(),
                port: port
                    .parse()
                    .map_err(|_| ConfigError::MalformedEndpoint(raw.clone()))?,
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(ConfigError::MalformedEndpoint(raw.clone())),
        }
    }
}

/// `[LOCAL]`: local subprocess engine invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalSection {
    pub katago_folder: String,
    #[serde(default = "default_local_exe")]
    pub exe: String,
    pub gtp_config_file: String,
    #[serde(default = "default_local_model")]
    pub model: String,
}

impl LocalSection {
    /// Build the executable path and argument vector the way
    /// `LocalEngine.set_command` assembles its `shlex.split` command.
    pub fn program_and_args(&self) -> (PathBuf, Vec<String>) {
        let folder = Path::new(&self.katago_folder);
        let exe = folder.join(&self.exe);
        let model = folder.join(&self.model);
        let cfg = folder.join(&self.gtp_config_file);
        (
            exe,
            vec![
                "gtp".to_string(),
                "-model".to_string(),
                model.to_string_lossy().into_owned(),
                "-config".to_string(),
                cfg.to_string_lossy().into_owned(),
            ],
        )
    }
}

/// `[IKATAGO]`: relay executable invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct IkatagoSection {
    pub data_folder: String,
    #[serde(default = "default_ikatago_exe")]
    pub exe: String,
    pub gtp_config_file: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl IkatagoSection {
    pub fn program(&self) -> PathBuf {
        Path::new(&self.data_folder).join(&self.exe)
    }

    pub fn gtp_config_path(&self) -> String {
        Path::new(&self.data_folder)
            .join(&self.gtp_config_file)
            .to_string_lossy()
            .into_owned()
    }
}

/// `[PIPE]`: time/visit/resign policy defaults plus the bootstrap
/// engine list the original hardcodes in `main.py` (`engines = [1, 2]`,
/// `local=False`).
#[derive(Debug, Clone, Deserialize)]
pub struct PipeSection {
    #[serde(default = "default_lag_buffer")]
    pub lag_buffer: f64,
    #[serde(default = "default_response_time_limit")]
    pub response_time_limit: f64,
    #[serde(default = "default_top_visits")]
    pub top_visits: u64,
    #[serde(default = "default_resign_threshold")]
    pub resign_threshold: f64,
    #[serde(default = "default_resign_consec_turn")]
    pub resign_consec_turn: usize,
    #[serde(default)]
    pub initial_engines: Vec<String>,
    #[serde(default)]
    pub initial_local: bool,
}

impl Default for PipeSection {
    fn default() -> Self {
        Self {
            lag_buffer: default_lag_buffer(),
            response_time_limit: default_response_time_limit(),
            top_visits: default_top_visits(),
            resign_threshold: default_resign_threshold(),
            resign_consec_turn: default_resign_consec_turn(),
            initial_engines: Vec::new(),
            initial_local: false,
        }
    }
}

impl PipeSection {
    pub fn to_policy(&self) -> gtp_proxy_core::PolicyState {
        let mut policy = gtp_proxy_core::PolicyState::new();
        policy.lag_buffer = self.lag_buffer;
        policy.response_time_limit = self.response_time_limit;
        policy.top_visits = self.top_visits;
        policy.resign_threshold = self.resign_threshold;
        policy.resign_consec_turn = self.resign_consec_turn;
        policy
    }
}

/// `[LOG]`: file-sink destination.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    pub log_folder: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            log_folder: "logs".to_string(),
        }
    }
}

/// The fully parsed configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "ENGINE", default)]
    pub engine: EngineSection,
    #[serde(rename = "LOCAL", default)]
    pub local: Option<LocalSection>,
    #[serde(rename = "IKATAGO", default)]
    pub ikatago: Option<IkatagoSection>,
    #[serde(rename = "PIPE", default)]
    pub pipe: PipeSection,
    #[serde(rename = "LOG", default)]
    pub log: LogSection,
}

impl Config {
    /// Resolve the config file path: `$GTP_PROXY_CONFIG` if set, else
    /// `<config dir>/gtp-proxy/gtp-proxy.toml`, else `./gtp-proxy.toml`.
    pub fn resolve_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var("GTP_PROXY_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        if let Some(dir) = dirs::config_dir() {
            return Ok(dir.join("gtp-proxy").join("gtp-proxy.toml"));
        }
        Ok(PathBuf::from("./gtp-proxy.toml"))
    }

    /// Load and parse the configuration file at the resolved path.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::resolve_path()?;
        Self::load_from(&path)
    }

    /// Load and parse a configuration file at an explicit path,
    /// bypassing path resolution — used by tests and by
    /// `$GTP_PROXY_CONFIG` overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
