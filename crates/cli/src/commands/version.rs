// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version printing.

use std::io::Write;

use mrlog_core::APP_NAME;

/// Version string injected at build time (see `build.rs`).
pub const VERSION: &str = env!("MRLOG_VERSION");

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{APP_NAME} version: {VERSION}")?;
    Ok(())
}
