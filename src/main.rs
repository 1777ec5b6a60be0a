// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Potext reads, checks and merges PO files.
//!
//! The following sub-commands are available:
//!
//! - [`check`](#check-files): check that files can be parsed
//! - [`merge`](#merge-files): merge files, the last translation of each msgid wins
//! - [`dump`](#dump-a-file): display translations read from a file
//!
//! # Check files
//!
//! The `check` command parses all gettext files (*.po) given on command-line or
//! found in the provided directories, and reports the first error of each file
//! with its line number.
//!
//! The .gitignore rules are respected: ignored files are skipped.
//!
//! # Merge files
//!
//! The `merge` command reads the files in the order given and writes a single
//! PO text where each msgid appears once, with its last translation.
//!
//! # Dump a file
//!
//! The `dump` command displays the translations read from a file, as text or JSON.

mod args;
mod checker;
mod config;
mod dir;
mod dump;
mod error;
mod merge;
mod result;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};
use crate::checker::run_check;
use crate::config::Config;
use crate::dump::run_dump;
use crate::merge::run_merge;

/// Initialize logging on standard error; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            std::process::exit(1);
        }
    };
    let rc = match &args.command {
        Command::Check(args) => run_check(args, &config),
        Command::Merge(args) => run_merge(args, &config),
        Command::Dump(args) => run_dump(args, &config),
    };
    std::process::exit(rc);
}
