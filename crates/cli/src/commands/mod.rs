// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod dependency;
pub mod section;
pub mod version;

use clap::CommandFactory;

use crate::cli::{Cli, Command};

/// Route a parsed invocation to its command, writing to stdout.
pub fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Some(Command::Dependency(args)) => dependency::run(args, &mut out),
        Some(Command::SectionStart { name }) => section::start(&name, &mut out),
        Some(Command::SectionEnd { name, result }) => section::end(&name, result, &mut out),
        Some(Command::Section(args)) => section::wrapped(args, &mut out),
        Some(Command::Version) => version::run(&mut out),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
