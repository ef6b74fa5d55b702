// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Section engine: paired start/end records around an optional subprocess.
//!
//! A section is constructed once per invocation and driven through
//! `Idle → Starting → Running → Ending → Done` by [`Section::execute`].
//! Plain start/end sections skip the `Running` state entirely; a wrapped
//! section additionally owns one child process invocation whose exit
//! behavior is folded into the end record.

use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

use crate::clock::Clock;
use crate::exec::{ProcessRunner, RunOutcome};
use crate::record::{EmitError, LogRecord};

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;

/// Errors that can occur while executing a section.
#[derive(Debug, Error)]
pub enum SectionError {
    /// Section name was empty. Detected before any output is written.
    #[error("missing section name")]
    MissingName,

    /// Wrapped section was given no command to run.
    #[error("the section subcommand requires a command parameter '-- <command> ...'")]
    MissingCommand,

    /// A log line could not be emitted.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// The output stream failed outside of record emission.
    #[error("failed to write: {0}")]
    Write(#[from] io::Error),

    /// The wrapped command failed. `exit_code` is the child's own exit code,
    /// or -1 when the child produced no usable exit status. The diagnostic
    /// for the failure is already in the output stream; callers deciding
    /// what to print are expected to consume only the code.
    #[error("wrapped command failed with exit code {exit_code}")]
    CommandFailed { exit_code: i32 },
}

/// What a section does, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Emit only a start record.
    Start,
    /// Emit only an end record with a caller-supplied result.
    End { result: i32 },
    /// Emit a start record, run a child process, emit an end record
    /// carrying the child's exit code.
    Wrapped {
        command: Vec<String>,
        on_success: Option<String>,
        on_failure: Option<String>,
    },
}

/// A named span of work bounded by start/end log records.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    kind: SectionKind,
}

impl Section {
    pub fn start(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: SectionKind::Start }
    }

    pub fn end(name: impl Into<String>, result: i32) -> Self {
        Self { name: name.into(), kind: SectionKind::End { result } }
    }

    pub fn wrapped(
        name: impl Into<String>,
        command: Vec<String>,
        on_success: Option<String>,
        on_failure: Option<String>,
    ) -> Self {
        Self { name: name.into(), kind: SectionKind::Wrapped { command, on_success, on_failure } }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &SectionKind {
        &self.kind
    }

    /// Run the section to completion, writing its records to `out`.
    ///
    /// Validation failures are reported before anything is written. A write
    /// failure aborts immediately: if the start record could not be written,
    /// the end record is not attempted.
    pub fn execute<C: Clock>(
        &self,
        out: &mut dyn Write,
        clock: &C,
        runner: &mut dyn ProcessRunner,
    ) -> Result<(), SectionError> {
        if self.name.is_empty() {
            return Err(SectionError::MissingName);
        }

        match &self.kind {
            SectionKind::Start => self.write_start(out, clock),
            SectionKind::End { result } => self.write_end(out, clock, *result, None),
            SectionKind::Wrapped { command, on_success, on_failure } => {
                let (program, args) =
                    command.split_first().ok_or(SectionError::MissingCommand)?;

                self.write_start(out, clock)?;

                debug!(section = %self.name, command = %program, "running wrapped command");
                let result = match runner.run(program, args, out)? {
                    RunOutcome::Exited(code) => code,
                    RunOutcome::Abnormal(diagnostic) => {
                        writeln!(out, "{diagnostic}")?;
                        -1
                    }
                };

                let message = if result == 0 { on_success } else { on_failure };
                self.write_end(out, clock, result, message.as_deref())?;

                if result != 0 {
                    return Err(SectionError::CommandFailed { exit_code: result });
                }
                Ok(())
            }
        }
    }

    fn write_start<C: Clock>(&self, out: &mut dyn Write, clock: &C) -> Result<(), SectionError> {
        let human = format!("section-start: '{}'", self.name);
        LogRecord::section_start(&self.name, clock.now()).emit(&human, out)?;
        Ok(())
    }

    fn write_end<C: Clock>(
        &self,
        out: &mut dyn Write,
        clock: &C,
        result: i32,
        message: Option<&str>,
    ) -> Result<(), SectionError> {
        let mut human = format!("section-end: '{}' result: {}", self.name, result);
        if let Some(message) = message {
            human.push_str(&format!(" message: '{message}'"));
        }
        LogRecord::section_end(&self.name, result, message, clock.now()).emit(&human, out)?;
        Ok(())
    }
}
