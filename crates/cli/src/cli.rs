// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument definitions

use clap::{Args, Parser, Subcommand};

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "mrlog", version, about = "Annotate build logs with machine-readable records")]
pub struct Cli {
    /// Omitted subcommand prints usage and exits cleanly.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a dependency in MRL format
    Dependency(DependencyArgs),

    /// Log a section beginning in MRL format
    SectionStart {
        /// Name of the section
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Log a section ending in MRL format
    SectionEnd {
        /// Name of the section
        #[arg(long, default_value = "")]
        name: String,
        /// Exit code for the section
        #[arg(long, default_value_t = 0)]
        result: i32,
    },

    /// Execute a command between section begin and section end records
    Section(SectionArgs),

    /// Print the mrlog version
    Version,
}

#[derive(Debug, Args)]
pub struct DependencyArgs {
    /// Name of the dependency
    #[arg(long)]
    pub name: Option<String>,

    /// Version of the dependency
    #[arg(long)]
    pub version: Option<String>,

    /// Hash sum of the dependency, if it has one
    #[arg(long)]
    pub hash: Option<String>,

    /// Name of the dependency, if it is a file
    #[arg(long)]
    pub filename: Option<String>,

    /// Free-form JSON metadata attached to the record
    #[arg(long)]
    pub metadata: Option<String>,

    /// Dependency type tag, folded into the record type
    #[arg(long = "type")]
    pub dep_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct SectionArgs {
    /// Name of the section
    #[arg(long, default_value = "")]
    pub name: String,

    /// Message attached to the end record when the command succeeds
    #[arg(long)]
    pub on_success: Option<String>,

    /// Message attached to the end record when the command fails
    #[arg(long)]
    pub on_failure: Option<String>,

    /// Command to execute, supplied after `--`
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}
