// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-only structured logging (spec §7: stdout is reserved
//! exclusively for the GTP wire, so no diagnostic output may ever be
//! written there).

use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set up a non-blocking file appender under `log_folder` and install
/// it as the global subscriber, matching the daemon convention this
/// proxy is built from. The returned guard must be kept alive for the
/// process lifetime; dropping it stops the background flush thread.
pub fn setup(log_folder: &Path) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_folder)?;
    let file_appender = tracing_appender::rolling::never(log_folder, "gtp-proxy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}
