// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "crontab", about = "Install, list, or remove a user's crontab")]
struct Cli {
    /// Per-user crontab spool directory.
    #[arg(short = 'c', long, default_value = "/var/spool/cron/crontabs")]
    spool_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Install a crontab file for a user.
    Install { user: String, file: PathBuf },
    /// Print a user's installed crontab.
    List { user: String },
    /// Remove a user's installed crontab.
    Remove { user: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Install { user, file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            crontab::install(&cli.spool_dir, &user, &contents).context("installing crontab")?;
        }
        Command::List { user } => {
            let contents = crontab::list(&cli.spool_dir, &user).context("listing crontab")?;
            print!("{contents}");
        }
        Command::Remove { user } => {
            crontab::remove(&cli.spool_dir, &user).context("removing crontab")?;
        }
    }

    Ok(())
}
