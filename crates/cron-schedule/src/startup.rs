// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reboot/startup job pass: `@reboot` entries run exactly once, the first
//! time their file is seen after the daemon starts (or after the file is
//! freshly loaded/resynced), never again on a later tick. Grounded in
//! `database.c`'s `TestStartupJobs`.

use cron_core::entry::{EntryState, Freq};
use cron_core::CronFile;

/// Arm every `@reboot` entry in `file` if it has not already been done
/// for this file, and mark the file so a later call is a no-op. Returns
/// the arena indices armed, for the caller to hand to the job runner.
pub fn arm_startup_jobs(file: &mut CronFile) -> Vec<usize> {
    if file.startup_jobs_armed {
        return Vec::new();
    }

    let mut armed = Vec::new();
    for (index, slot) in file.entries.iter_mut().enumerate() {
        if let Some(entry) = slot {
            if entry.freq == Freq::Reboot && entry.state == EntryState::Idle {
                entry.state = EntryState::Armed;
                armed.push(index);
            }
        }
    }
    file.startup_jobs_armed = true;
    armed
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
