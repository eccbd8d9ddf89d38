//! Behavioral specifications for the gtp-proxy binary.
//!
//! Black-box: spawns the compiled binary and asserts on its stdin/stdout
//! wire behavior, without a real backend engine process.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Resolve the built `gtp-proxy` binary. `gtp-proxy` is a sibling
/// workspace member rather than a dependency of this package, so cargo
/// does not set `CARGO_BIN_EXE_gtp-proxy` for us; resolve it relative
/// to the shared target directory instead, matching how the compiled
/// test binary itself was found.
fn binary_path() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let standard = manifest_dir.join("target/debug/gtp-proxy");
    if standard.exists() {
        return standard;
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join("gtp-proxy");
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

fn gtp_proxy() -> Command {
    Command::new(binary_path())
}

/// Write a minimal config pointing its log sink at a tempdir so tests
/// never write into the working tree.
fn config_path(dir: &tempfile::TempDir) -> PathBuf {
    let log_folder = dir.path().join("logs");
    let config = format!("[LOG]\nlog_folder = \"{}\"\n", log_folder.display());
    let path = dir.path().join("gtp-proxy.toml");
    std::fs::write(&path, config).unwrap();
    path
}

#[test]
fn version_flag_prints_version() {
    let outcome = gtp_proxy().arg("--version").assert().success();
    let stdout = String::from_utf8_lossy(&outcome.get_output().stdout);
    assert!(stdout.starts_with("gtp-proxy 0.1.0"), "got: {stdout}");
}

#[test]
fn help_flag_prints_usage() {
    let outcome = gtp_proxy().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&outcome.get_output().stdout);
    assert!(stdout.contains("USAGE:"), "got: {stdout}");
}

#[test]
fn unknown_flag_fails_with_message() {
    let outcome = gtp_proxy().arg("--bogus").assert().failure();
    let stderr = String::from_utf8_lossy(&outcome.get_output().stderr);
    assert!(stderr.contains("unexpected argument"), "got: {stderr}");
}

#[test]
fn quit_acks_with_blank_id_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = gtp_proxy()
        .env("GTP_PROXY_CONFIG", config_path(&dir))
        .write_stdin("quit\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&outcome.get_output().stdout);
    similar_asserts::assert_eq!(stdout, "= \n\n");
}

#[test]
fn default_command_acks_even_with_zero_engines_registered() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = gtp_proxy()
        .env("GTP_PROXY_CONFIG", config_path(&dir))
        .write_stdin("1 boardsize 19\nquit\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&outcome.get_output().stdout);
    similar_asserts::assert_eq!(stdout, "=1\n\n= \n\n");
}

