// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mrlog binary entry point: parse arguments, dispatch, map errors to a
//! process exit code.

mod cli;
mod commands;
mod exit_error;
mod logging;

use clap::Parser;

use crate::exit_error::ExitError;

fn main() {
    logging::init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help/version requests print to stdout and exit cleanly;
            // usage errors go to stderr and exit 1.
            let _ = err.print();
            if err.use_stderr() {
                std::process::exit(1);
            }
            return;
        }
    };

    if let Err(err) = commands::dispatch(cli) {
        let code = match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("{err:#}");
                1
            }
        };
        std::process::exit(code);
    }
}
