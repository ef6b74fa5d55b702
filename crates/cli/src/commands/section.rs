// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Section logging commands: plain start/end markers and wrapped execution.

use std::io::Write;

use mrlog_core::{CommandRunner, Section, SectionError, SystemClock};

use crate::cli::SectionArgs;
use crate::exit_error::ExitError;

pub fn start(name: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    execute(&Section::start(name), out)
}

pub fn end(name: &str, result: i32, out: &mut dyn Write) -> anyhow::Result<()> {
    execute(&Section::end(name, result), out)
}

pub fn wrapped(args: SectionArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let section = Section::wrapped(args.name, args.command, args.on_success, args.on_failure);
    execute(&section, out)
}

fn execute(section: &Section, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut runner = CommandRunner;
    match section.execute(out, &SystemClock, &mut runner) {
        Ok(()) => Ok(()),
        // Propagate the wrapped command's exit code; its diagnostic is
        // already in the output stream, so nothing more is printed.
        Err(SectionError::CommandFailed { exit_code }) => {
            Err(ExitError::silent(exit_code).into())
        }
        Err(err) => Err(err.into()),
    }
}
