// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(
    author,
    name = "potext",
    about = "PO file parser and serializer.",
    after_help = "For help with a specific command, see: `potext help <command>`."
)]
#[command(version)]
pub struct Cli {
    /// Configuration file [default: potext.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display debug messages (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that files can be parsed
    Check(CheckArgs),

    /// Merge files into one, keeping the last translation of each msgid
    Merge(MergeArgs),

    /// Display translations read from a file
    Dump(DumpArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// List of files or directories
    #[clap(help = "List of files or directories [default: .]")]
    pub files: Vec<PathBuf>,

    /// Encoding of files (overrides the configuration)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Output format (overrides the configuration)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Quiet mode: do not report any error, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `merge` command.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Files to merge, in order: translations of the last files win
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Encoding of files (overrides the configuration)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Write the result to this file instead of standard output
    #[arg(short = 'w', long)]
    pub write: Option<PathBuf>,
}

/// Arguments for the `dump` command.
#[derive(Debug, Args)]
pub struct DumpArgs {
    /// File to read
    pub file: PathBuf,

    /// Encoding of the file (overrides the configuration)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Output format (overrides the configuration)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    /// Human readable text format
    Human,

    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_merge_args() {
        let cli = Cli::parse_from(["potext", "merge", "a.po", "b.po", "-w", "out.po", "-v"]);
        assert!(cli.verbose);
        let Command::Merge(args) = cli.command else {
            panic!("expected merge command");
        };
        assert_eq!(args.files, vec![PathBuf::from("a.po"), PathBuf::from("b.po")]);
        assert_eq!(args.write, Some(PathBuf::from("out.po")));
    }

    #[test]
    fn parse_check_args() {
        let cli = Cli::parse_from(["potext", "--config", "x.toml", "check", "-o", "json"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert!(args.files.is_empty());
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert_eq!(args.output.unwrap_or_default().to_string(), "json");
    }

    #[test]
    fn merge_requires_files() {
        assert!(Cli::try_parse_from(["potext", "merge"]).is_err());
    }
}
