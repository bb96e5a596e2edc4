// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog-update marker (`cron.update`) handling.
//!
//! Each tick, the loader checks the marker file's mtime against the last
//! time it synced. If the marker is newer, its contents name which spool
//! entries changed (one name per line, a bare `*` meaning "resync
//! everything"); a name prefixed with `!` additionally force-arms that
//! file's `@reboot`/`@noauto` entries immediately, mirroring dcron's
//! forced-resync convention for the catalog-update marker.

use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerState {
    /// Marker absent or not modified since `since_mtime`.
    Unchanged,
    /// Marker changed; lists the targets to resync.
    Changed(Vec<MarkerTarget>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTarget {
    pub name: String,
    pub force_arm: bool,
}

/// `*` alone means "resync the whole spool", represented as an empty name.
pub const RESYNC_ALL: &str = "*";

pub fn check_marker(path: &Path, since_mtime: i64) -> std::io::Result<MarkerState> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(MarkerState::Unchanged),
        Err(e) => return Err(e),
    };

    let mtime = metadata
        .modified()?
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    if mtime <= since_mtime {
        return Ok(MarkerState::Unchanged);
    }

    let contents = std::fs::read_to_string(path)?;
    let targets = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| match l.strip_prefix('!') {
            Some(rest) => MarkerTarget { name: rest.to_string(), force_arm: true },
            None => MarkerTarget { name: l.to_string(), force_arm: false },
        })
        .collect();

    Ok(MarkerState::Changed(targets))
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
