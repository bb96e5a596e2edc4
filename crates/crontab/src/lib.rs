// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! crontab: the out-of-scope administrative editor, implemented only at
//! its interface. Installs, lists, or removes a user's crontab file in
//! the spool directory and touches `cron.update` so the daemon notices —
//! it never parses crontab syntax itself, leaving validation to `crond`'s
//! own loader on the next tick.

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("reading {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("writing {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("removing {path}: {source}")]
    Remove { path: PathBuf, source: std::io::Error },
    #[error("no crontab for user `{0}`")]
    NotFound(String),
}

fn user_crontab_path(spool_dir: &Path, user: &str) -> PathBuf {
    spool_dir.join(user)
}

fn marker_path(spool_dir: &Path) -> PathBuf {
    spool_dir.join("cron.update")
}

/// Replace (or create) `user`'s crontab with the contents of `source`,
/// then touch the update marker naming that user so the daemon picks up
/// the change on its next catalog resync instead of waiting for a full
/// mtime sweep.
pub fn install(spool_dir: &Path, user: &str, contents: &str) -> Result<(), EditorError> {
    let path = user_crontab_path(spool_dir, user);
    std::fs::write(&path, contents).map_err(|source| EditorError::Write { path, source })?;
    touch_marker(spool_dir, user)
}

pub fn list(spool_dir: &Path, user: &str) -> Result<String, EditorError> {
    let path = user_crontab_path(spool_dir, user);
    std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => EditorError::NotFound(user.to_string()),
        _ => EditorError::Read { path, source },
    })
}

pub fn remove(spool_dir: &Path, user: &str) -> Result<(), EditorError> {
    let path = user_crontab_path(spool_dir, user);
    std::fs::remove_file(&path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => EditorError::NotFound(user.to_string()),
        _ => EditorError::Remove { path, source },
    })?;
    touch_marker(spool_dir, user)
}

fn touch_marker(spool_dir: &Path, user: &str) -> Result<(), EditorError> {
    let path = marker_path(spool_dir);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| EditorError::Write { path: path.clone(), source })?;
    writeln!(file, "{user}").map_err(|source| EditorError::Write { path, source })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
