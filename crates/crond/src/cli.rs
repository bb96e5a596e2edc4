// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line flags, mirroring dcron's `getopt("d:l:L:fbSc:")` surface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "crond", about = "Periodic job daemon")]
pub struct Args {
    /// Per-user crontab spool directory (overrides the config file and
    /// the built-in default).
    #[arg(short = 'c', long)]
    pub crontabs_dir: Option<PathBuf>,

    /// System-wide crontab spool directory.
    #[arg(short = 's', long)]
    pub scrontabs_dir: Option<PathBuf>,

    /// Per-entry timestamp directory.
    #[arg(short = 't', long)]
    pub timestamps_dir: Option<PathBuf>,

    /// Debug level: error, warn, info, debug, trace.
    #[arg(short = 'd', long)]
    pub debug_level: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(short = 'L', long)]
    pub log_file: Option<PathBuf>,

    /// Send logs to syslog instead of stderr.
    #[arg(short = 'S', long, default_value_t = false)]
    pub syslog: bool,

    /// Stay in the foreground instead of daemonizing.
    #[arg(short = 'f', long, default_value_t = false)]
    pub foreground: bool,

    /// Force background even if already backgrounded by the caller's shell.
    #[arg(short = 'b', long, default_value_t = false)]
    pub background: bool,

    /// Optional TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
