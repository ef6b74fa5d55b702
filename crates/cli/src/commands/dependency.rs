// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency logging command.

use std::io::Write;

use mrlog_core::{Dependency, SystemClock};

use crate::cli::DependencyArgs;

pub fn run(args: DependencyArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let dependency = Dependency {
        name: args.name,
        version: args.version,
        hash: args.hash,
        filename: args.filename,
        metadata: args.metadata,
        dep_type: args.dep_type,
    };
    dependency.report(out, &SystemClock)?;
    Ok(())
}
