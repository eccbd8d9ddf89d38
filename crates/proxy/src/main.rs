// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gtp-proxy: speaks one GTP session to an upstream client (a GUI or
//! tournament manager) while multiplexing every command across a
//! roster of backend engines running in parallel (spec §1).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod app;
mod engine_factory;
mod logging;

use std::path::Path;
use std::sync::Arc;

use gtp_proxy_config::Config;

use crate::app::App;
use crate::engine_factory::ConfigEngineFactory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("gtp-proxy {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("gtp-proxy {}", env!("CARGO_PKG_VERSION"));
                println!("Multiplexes one upstream GTP session across many backend engines.");
                println!();
                println!("USAGE:");
                println!("    gtp-proxy");
                println!();
                println!("gtp-proxy is meant to be launched by a GUI or tournament manager");
                println!("as the GTP engine process; it speaks GTP on stdin/stdout and logs");
                println!("diagnostics to a file, never to stdout.");
                println!();
                println!("Configuration is read from $GTP_PROXY_CONFIG, or the platform");
                println!("config directory, falling back to ./gtp-proxy.toml.");
                println!();
                println!("OPTIONS:");
                println!("    -h, --help       Print help information");
                println!("    -v, --version    Print version information");
                return Ok(());
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                eprintln!("Usage: gtp-proxy [--help | --version]");
                std::process::exit(1);
            }
        }
    }

    let config = Config::load()?;
    let _log_guard = logging::setup(Path::new(&config.log.log_folder))?;

    tracing::info!("starting gtp-proxy");

    let factory: Box<dyn gtp_proxy_engine::EngineFactory> =
        Box::new(ConfigEngineFactory::new(Arc::new(config.clone())));
    let mut app = App::bootstrap(&config, factory).await;

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    app.run(stdin, stdout).await?;

    tracing::info!("gtp-proxy exiting");
    Ok(())
}
