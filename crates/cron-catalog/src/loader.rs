// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spool-directory walker: turns a directory of crontab files into
//! `CronFile`s full of `CronEntry`s, resolving `AFTER=` references into
//! arena-index waiter/notifier edges as it goes.
//!
//! Grounded in `database.c`'s `SynchronizeDir`/`SynchronizeFile`. The
//! per-file entry ceiling is 256, except for the file owned by `root`,
//! which gets 65535 (dcron's `maxEntries`); independently, no more than
//! 10x that many *lines* (including comments and blanks) are read from a
//! single file, so a file of nothing but comments can't stall the loader.
//!
//! A malformed line is logged and skipped, not fatal to the rest of the
//! file; a file that can't be read or loaded at all is logged and skipped,
//! not fatal to the rest of the directory — matching `crates/runbook/src/
//! find.rs`'s skip-and-warn walk, rather than aborting on the first bad
//! entry anywhere in the spool.

use crate::error::LoadError;
use crate::line::{parse_line, Schedule};
use crate::reconcile::build_bitmaps;
use crate::timestamp::{read_timestamp, write_timestamp, TimestampRecord};
use cron_core::entry::{CronEntry, EntryState, Freq, NotifierEdge, WaiterEdge, WaitFlag};
use cron_core::{CronFile, EntryId};
use std::path::{Path, PathBuf};

const USER_MAX_ENTRIES: usize = 256;
const ROOT_MAX_ENTRIES: usize = 65535;
const LINE_CEILING_MULTIPLIER: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoolKind {
    /// Per-user spool: one file per user, named after the owner, no user
    /// column in its lines (e.g. `/var/spool/cron/crontabs/<user>`).
    User,
    /// System-wide spool: every line carries an explicit user column
    /// (e.g. `/etc/crontab`, `/etc/cron.d/*`).
    System,
}

/// Load every crontab file in `dir`. `now` staggers a freshly-seen `Period`
/// entry's first `not_until`; `timestamps_dir` is where its persisted
/// retry/last-ran state lives (spec §4.3 step 11, §4.11). Only a failure
/// to even read the directory is fatal; a bad file within it is logged and
/// skipped.
pub fn load_spool(
    dir: &Path,
    kind: SpoolKind,
    now: i64,
    timestamps_dir: &Path,
) -> Result<Vec<CronFile>, LoadError> {
    let read_dir = std::fs::read_dir(dir)
        .map_err(|source| LoadError::ReadDir { path: dir.to_path_buf(), source })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                tracing::warn!(path = %dir.display(), %source, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match load_file(&path, kind, now, timestamps_dir) {
            Ok(file) => files.push(file),
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping crontab file"),
        }
    }
    Ok(files)
}

fn load_file(path: &Path, kind: SpoolKind, now: i64, timestamps_dir: &Path) -> Result<CronFile, LoadError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|source| LoadError::ReadFile { path: path.to_path_buf(), source })?;

    let file_owner = match kind {
        SpoolKind::User => path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string(),
        SpoolKind::System => "root".to_string(),
    };

    let max_entries = if file_owner == "root" { ROOT_MAX_ENTRIES } else { USER_MAX_ENTRIES };
    let max_lines = max_entries * LINE_CEILING_MULTIPLIER;

    let mut file = CronFile::new(path.to_path_buf(), file_owner.clone());
    let mut pending_after: Vec<(usize, Vec<crate::line::AfterRef>)> = Vec::new();

    for (line_no, raw) in contents.lines().enumerate() {
        if line_no >= max_lines {
            return Err(LoadError::TooManyLines { path: path.to_path_buf(), limit: max_lines });
        }

        let has_user_column = kind == SpoolKind::System;
        let parsed = match parse_line(has_user_column, raw) {
            Ok(Some(p)) => p,
            Ok(None) => continue,
            Err(message) => {
                tracing::warn!(path = %path.display(), line = line_no + 1, %message, "skipping malformed crontab line");
                continue;
            }
        };

        if file.entries.len() >= max_entries {
            return Err(LoadError::TooManyEntries { path: path.to_path_buf(), limit: max_entries });
        }

        let owner = parsed.run_as.clone().unwrap_or_else(|| file_owner.clone());
        let id = parsed
            .id
            .clone()
            .unwrap_or_else(|| format!("{}:{}", path.display(), line_no));

        let freq = match &parsed.schedule {
            Schedule::Fields { .. } => Freq::ByFields,
            Schedule::Reboot => Freq::Reboot,
            Schedule::NoAuto => Freq::NoAuto,
            Schedule::Period(period, delay) => Freq::Period { period: *period, delay: *delay },
        };
        let freq = if let Some((period, delay)) = parsed.freq_override {
            Freq::Period { period, delay }
        } else {
            freq
        };

        let (minutes, hours, mdays, months, dows, mday_is_wildcard, dow_is_wildcard) =
            match &parsed.schedule {
                Schedule::Fields {
                    minutes, hours, mdays, months, dows, mday_is_wildcard, dow_is_wildcard,
                } => {
                    let bitmaps =
                        build_bitmaps(minutes, hours, mdays, months, dows, *mday_is_wildcard, *dow_is_wildcard);
                    (
                        bitmaps.minutes,
                        bitmaps.hours,
                        bitmaps.mdays,
                        bitmaps.months,
                        bitmaps.dows,
                        *mday_is_wildcard,
                        *dow_is_wildcard,
                    )
                }
                _ => ([false; 60], [false; 24], [false; 32], [false; 12], [0; 7], true, true),
            };

        let (last_ran, not_until) = match &freq {
            Freq::Period { period, delay } => load_period_timestamps(
                timestamps_dir,
                &owner,
                &id,
                *period,
                *delay,
                now,
            ),
            _ => (0, 0),
        };

        let entry = CronEntry {
            id: EntryId::new(id),
            command: format!("{owner}:{}", parsed.command),
            freq,
            minutes,
            hours,
            mdays,
            months,
            dows,
            mday_is_wildcard,
            dow_is_wildcard,
            state: EntryState::Idle,
            last_ran,
            not_until,
            waiters: Vec::new(),
            notifiers: Vec::new(),
        };

        let index = file.push(entry);
        if !parsed.after.is_empty() {
            pending_after.push((index, parsed.after));
        }
    }

    for (waiter_index, after_refs) in pending_after {
        for after_ref in after_refs {
            let Some(notifier_index) = file.index_of(&after_ref.id) else {
                tracing::warn!(
                    path = %path.display(),
                    id = %after_ref.id,
                    "AFTER= references unknown id, ignoring this dependency"
                );
                continue;
            };

            if let Some(waiter_entry) = file.get_mut(waiter_index) {
                waiter_entry.waiters.push(WaiterEdge {
                    notifier_index,
                    flag: WaitFlag::Pending,
                    max_wait: after_ref.max_wait,
                });
                waiter_entry.state = EntryState::Waiting;
            }
            if let Some(notifier_entry) = file.get_mut(notifier_index) {
                notifier_entry.notifiers.push(NotifierEdge { waiter_index });
            }
        }
    }

    Ok(file)
}

/// Resolve a `Period` entry's `(last_ran, not_until)` from its persisted
/// timestamp, per `database.c`'s `ReadTimestamps`: a bare stamp is the
/// last run, due again at `last_ran + period`; an `after `-prefixed stamp
/// is a `not_until` deadline directly. If nothing is on disk yet, this is
/// the first time this entry has ever been loaded: stagger `not_until` to
/// `now + delay` and persist that choice immediately so a later resync
/// doesn't keep resetting it.
fn load_period_timestamps(
    timestamps_dir: &Path,
    owner: &str,
    id: &str,
    period: u32,
    delay: u32,
    now: i64,
) -> (i64, i64) {
    match read_timestamp(timestamps_dir, owner, id) {
        Ok(Some(TimestampRecord::RanAt(last_ran))) => (last_ran, last_ran + i64::from(period)),
        Ok(Some(TimestampRecord::NotUntil(not_until))) => (0, not_until),
        Ok(None) => {
            let not_until = now + i64::from(delay);
            if let Err(err) = write_timestamp(timestamps_dir, owner, id, TimestampRecord::NotUntil(not_until)) {
                tracing::warn!(%owner, %id, %err, "failed to write initial timestamp");
            }
            (0, not_until)
        }
        Err(err) => {
            tracing::warn!(%owner, %id, %err, "failed to read timestamp, staggering from now");
            (0, now + i64::from(delay))
        }
    }
}

/// Strip the synthetic `<owner>:` prefix this loader embeds in a
/// command so the job runner always knows which account to drop
/// privileges to, independent of how the entry's command string looks.
pub fn split_owner_command(command: &str) -> Option<(&str, &str)> {
    command.split_once(':')
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
