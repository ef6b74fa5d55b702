// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution behind a swappable runner.
//!
//! The section engine talks to a [`ProcessRunner`] instead of spawning
//! processes directly, so it can be exercised in tests with a scripted
//! runner (see `test_support`). [`CommandRunner`] is the production
//! implementation.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use tracing::debug;

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;

/// Outcome of running a wrapped command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process ran to completion and reported an exit code.
    Exited(i32),
    /// No usable exit status: the process could not be spawned or was
    /// terminated by a signal. Carries the human-readable diagnostic.
    Abnormal(String),
}

/// Trait abstracting how a wrapped command is executed.
///
/// The implementation must redirect the child's stdout and stderr into
/// `out`, the same stream the section records are written to. `Err` is
/// reserved for failures writing to `out`; a child that cannot run is an
/// `Ok(RunOutcome::Abnormal)`.
pub trait ProcessRunner {
    fn run(&mut self, program: &str, args: &[String], out: &mut dyn Write)
        -> io::Result<RunOutcome>;
}

/// Real runner used in production.
///
/// Blocks until the child terminates. The child's stdout and stderr are
/// collected and flushed into `out` before returning, so an end record
/// written afterwards always lands after the child's output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl ProcessRunner for CommandRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        out: &mut dyn Write,
    ) -> io::Result<RunOutcome> {
        debug!(command = program, "spawning wrapped command");

        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(source) => {
                return Ok(RunOutcome::Abnormal(format!(
                    "failed to spawn `{program}`: {source}"
                )));
            }
        };

        out.write_all(&output.stdout)?;
        out.write_all(&output.stderr)?;
        out.flush()?;

        match output.status.code() {
            Some(code) => {
                debug!(command = program, exit_code = code, "wrapped command exited");
                Ok(RunOutcome::Exited(code))
            }
            // No exit code means the child was killed by a signal.
            None => Ok(RunOutcome::Abnormal(format!(
                "command `{program}` terminated without an exit code: {status}",
                status = output.status
            ))),
        }
    }
}
