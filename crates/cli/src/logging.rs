// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Diagnostics go to stderr so stdout stays reserved for the log stream
//! itself. The level comes from `RUST_LOG`, defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber. Called once from `main`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
