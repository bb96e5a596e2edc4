// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single loaded crontab file: the owning user, its entries, and the
//! bookkeeping flags the catalog loader needs to resync it in place.
//!
//! Entries live in a slot arena (`Vec<Option<CronEntry>>`) rather than an
//! intrusive list: clearing a slot to `None` is the Rust analogue of the C
//! loader NULL-ing a line's cross-pointers before freeing it, and any
//! `WaiterEdge`/`NotifierEdge` recorded against that slot's index simply
//! stops resolving to anything instead of dangling.

use crate::entry::CronEntry;

/// A crontab file tracked by the catalog.
#[derive(Debug, Clone)]
pub struct CronFile {
    /// Absolute path to the crontab file on disk.
    pub path: std::path::PathBuf,
    /// Owning user: the filename in the per-user spool, or the user field
    /// of a line in the system-wide spool.
    pub owner: String,
    /// Last-observed mtime, used to detect on-disk changes.
    pub mtime: i64,
    /// Marked once `@reboot` jobs have been armed for this file so a
    /// later resync does not re-arm them.
    pub startup_jobs_armed: bool,
    /// Tombstoned: the file was removed or replaced on disk, but is kept
    /// around until every `Running` entry in it has been reaped.
    pub deleted: bool,
    pub entries: Vec<Option<CronEntry>>,
}

impl CronFile {
    pub fn new(path: std::path::PathBuf, owner: impl Into<String>) -> Self {
        Self {
            path,
            owner: owner.into(),
            mtime: 0,
            startup_jobs_armed: false,
            deleted: false,
            entries: Vec::new(),
        }
    }

    /// True once no entry in this file is still `Running`, meaning a
    /// tombstoned file can be dropped from the catalog entirely.
    pub fn safe_to_drop(&self) -> bool {
        self.deleted
            && self.entries.iter().flatten().all(|e| {
                !matches!(e.state, crate::entry::EntryState::Running(_))
            })
    }

    pub fn push(&mut self, entry: CronEntry) -> usize {
        let index = self.entries.len();
        self.entries.push(Some(entry));
        index
    }

    pub fn get(&self, index: usize) -> Option<&CronEntry> {
        self.entries.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CronEntry> {
        self.entries.get_mut(index).and_then(|slot| slot.as_mut())
    }

    /// Look up an entry's arena index by its `ID=` attribute, needed to
    /// resolve `AFTER=` references while parsing a file top to bottom.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|e| e.id == *id))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
