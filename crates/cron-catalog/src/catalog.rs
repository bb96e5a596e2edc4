// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The full set of loaded crontab files, indexed the way the loader and
//! scheduler both need to walk it: by position for a full sweep, and by
//! path for mtime-based resync.

use cron_core::CronFile;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub files: Vec<CronFile>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_path(&self, path: &std::path::Path) -> Option<usize> {
        self.files.iter().position(|f| f.path == path)
    }

    pub fn replace_or_insert(&mut self, file: CronFile) -> usize {
        match self.find_by_path(&file.path) {
            Some(index) => {
                self.files[index] = file;
                index
            }
            None => {
                self.files.push(file);
                self.files.len() - 1
            }
        }
    }

    /// Tombstone every loaded file whose path is not in `present_paths`,
    /// rather than dropping it immediately, so any `Running` entries in it
    /// still get reaped (see `CronFile::safe_to_drop`).
    pub fn mark_removed(&mut self, present_paths: &[std::path::PathBuf]) {
        for file in &mut self.files {
            if !present_paths.contains(&file.path) {
                file.deleted = true;
            }
        }
    }

    /// Drop every tombstoned file that has no running entries left.
    pub fn reap_dropped(&mut self) {
        self.files.retain(|f| !f.safe_to_drop());
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
