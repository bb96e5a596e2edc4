// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon-wide configuration: compiled-in defaults, overridden by an
//! optional TOML file, overridden in turn by CLI flags.

use crate::cli::Args;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("parsing config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    pub crontabs_dir: Option<PathBuf>,
    pub scrontabs_dir: Option<PathBuf>,
    pub timestamps_dir: Option<PathBuf>,
    pub debug_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub syslog: Option<bool>,
    pub mailer: Option<PathBuf>,
    pub tmp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub crontabs_dir: PathBuf,
    pub scrontabs_dir: PathBuf,
    pub timestamps_dir: PathBuf,
    pub debug_level: String,
    pub log_file: Option<PathBuf>,
    pub syslog: bool,
    pub mailer: PathBuf,
    pub tmp_dir: PathBuf,
    pub foreground: bool,
}

impl Config {
    pub fn defaults() -> Self {
        Self {
            crontabs_dir: PathBuf::from("/var/spool/cron/crontabs"),
            scrontabs_dir: PathBuf::from("/etc/cron.d"),
            timestamps_dir: PathBuf::from("/var/spool/cron/cronstamps"),
            debug_level: "info".to_string(),
            log_file: None,
            syslog: false,
            mailer: PathBuf::from("/usr/sbin/sendmail"),
            tmp_dir: PathBuf::from("/tmp"),
            foreground: false,
        }
    }
}

pub fn load_file_config(path: &std::path::Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// CLI flags override the config file, which overrides the built-in
/// defaults — exactly dcron's `-c`/`-s` precedence over its compiled-in
/// `CRONTABS`/`SCRONTABS`.
pub fn resolve(args: &Args, file: Option<FileConfig>) -> Config {
    let defaults = Config::defaults();
    let file = file.unwrap_or_default();

    Config {
        crontabs_dir: args
            .crontabs_dir
            .clone()
            .or(file.crontabs_dir)
            .unwrap_or(defaults.crontabs_dir),
        scrontabs_dir: args
            .scrontabs_dir
            .clone()
            .or(file.scrontabs_dir)
            .unwrap_or(defaults.scrontabs_dir),
        timestamps_dir: args
            .timestamps_dir
            .clone()
            .or(file.timestamps_dir)
            .unwrap_or(defaults.timestamps_dir),
        debug_level: args
            .debug_level
            .clone()
            .or(file.debug_level)
            .unwrap_or(defaults.debug_level),
        log_file: args.log_file.clone().or(file.log_file),
        syslog: args.syslog || file.syslog.unwrap_or(false),
        mailer: file.mailer.unwrap_or(defaults.mailer),
        tmp_dir: file.tmp_dir.unwrap_or(defaults.tmp_dir),
        foreground: args.foreground,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
