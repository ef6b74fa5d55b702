// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the injected collaborators.

use std::io::{self, Write};

use crate::exec::{ProcessRunner, RunOutcome};

/// Process runner that replays a scripted outcome instead of spawning.
///
/// Records every call so tests can assert on the command the engine asked
/// for, and optionally writes fake child output into the combined stream.
pub struct ScriptedRunner {
    outcome: RunOutcome,
    child_output: Vec<u8>,
    /// `(program, args)` pairs, one per `run` call.
    pub calls: Vec<(String, Vec<String>)>,
}

impl ScriptedRunner {
    /// Runner whose child exits with the given code.
    pub fn exits(code: i32) -> Self {
        Self { outcome: RunOutcome::Exited(code), child_output: Vec::new(), calls: Vec::new() }
    }

    /// Runner whose child terminates abnormally with the given diagnostic.
    pub fn abnormal(diagnostic: impl Into<String>) -> Self {
        Self {
            outcome: RunOutcome::Abnormal(diagnostic.into()),
            child_output: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Bytes the fake child writes into the combined stream before exiting.
    pub fn with_child_output(mut self, output: &[u8]) -> Self {
        self.child_output = output.to_vec();
        self
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        out: &mut dyn Write,
    ) -> io::Result<RunOutcome> {
        self.calls.push((program.to_string(), args.to_vec()));
        out.write_all(&self.child_output)?;
        Ok(self.outcome.clone())
    }
}

/// Writer that fails after a fixed number of successful writes.
pub struct FailingWriter {
    remaining: usize,
    /// Bytes accepted before the writer started failing.
    pub written: Vec<u8>,
}

impl FailingWriter {
    pub fn new(successful_writes: usize) -> Self {
        Self { remaining: successful_writes, written: Vec::new() }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("write-error"));
        }
        self.remaining -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
