// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_toml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn pipe_section_defaults_match_spec() {
    let file = write_toml("[PIPE]\n");
    let config = Config::load_from(file.path()).expect("parse config");
    assert_eq!(config.pipe.lag_buffer, 1.0);
    assert_eq!(config.pipe.response_time_limit, 5.0);
    assert_eq!(config.pipe.top_visits, 200_000);
    assert_eq!(config.pipe.resign_threshold, 0.1);
    assert_eq!(config.pipe.resign_consec_turn, 3);
    assert!(config.pipe.initial_engines.is_empty());
    assert!(!config.pipe.initial_local);
}

#[test]
fn pipe_section_overrides_apply() {
    let file = write_toml(
        "[PIPE]\ntop_visits = 50000\ninitial_engines = [\"1\", \"2\"]\ninitial_local = true\n",
    );
    let config = Config::load_from(file.path()).expect("parse config");
    assert_eq!(config.pipe.top_visits, 50_000);
    assert_eq!(config.pipe.initial_engines, vec!["1", "2"]);
    assert!(config.pipe.initial_local);
}

#[test]
fn engine_section_resolves_remote_endpoint() {
    let file = write_toml(
        "[ENGINE]\ndata_folder = \"/data\"\n1 = \"box1.example.com/22/bot/s3cr3t\"\n",
    );
    let config = Config::load_from(file.path()).expect("parse config");
    let endpoint = config.engine.resolve("1").expect("resolve endpoint");
    assert_eq!(endpoint.host, "box1.example.com");
    assert_eq!(endpoint.port, 22);
    assert_eq!(endpoint.username, "bot");
    assert_eq!(endpoint.password, "s3cr3t");
}

#[test]
fn engine_section_rejects_unknown_id() {
    let file = write_toml("[ENGINE]\n");
    let config = Config::load_from(file.path()).expect("parse config");
    let err = config.engine.resolve("9").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownRemoteId(id) if id == "9"));
}

#[test]
fn engine_section_rejects_malformed_endpoint() {
    let file = write_toml("[ENGINE]\n1 = \"not-enough-parts\"\n");
    let config = Config::load_from(file.path()).expect("parse config");
    let err = config.engine.resolve("1").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedEndpoint(_)));
}

#[test]
fn local_section_builds_program_and_args() {
    let file = write_toml(
        "[LOCAL]\nkatago_folder = \"/opt/katago\"\ngtp_config_file = \"gtp.cfg\"\n",
    );
    let config = Config::load_from(file.path()).expect("parse config");
    let local = config.local.expect("local section present");
    let (program, args) = local.program_and_args();
    assert_eq!(program, std::path::Path::new("/opt/katago/katago.exe"));
    assert_eq!(
        args,
        vec![
            "gtp",
            "-model",
            "/opt/katago/b40.bin.gz",
            "-config",
            "/opt/katago/gtp.cfg",
        ]
    );
}

#[test]
fn missing_config_file_is_a_read_error() {
    let err = Config::load_from(std::path::Path::new("/nonexistent/gtp-proxy.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn resolve_path_honors_env_override() {
    std::env::set_var("GTP_PROXY_CONFIG", "/tmp/custom-gtp-proxy.toml");
    let path = Config::resolve_path().expect("resolve path");
    std::env::remove_var("GTP_PROXY_CONFIG");
    assert_eq!(path, std::path::Path::new("/tmp/custom-gtp-proxy.toml"));
}
