// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-entry timestamp store: one file per `<user>.<id>` under the
//! timestamp directory, holding either the last time an entry ran or, for
//! a `FREQ=`/period entry that was delayed, the next time it may run.
//!
//! Grounded in `database.c`'s `ReadTimestamps`/timestamp-write path. The
//! stored text is always `CRONSTAMP_FMT` (`%Y-%m-%d %H:%M`), optionally
//! prefixed with `after `. Reconstructing a epoch second from that local,
//! second-less string requires fixing both `tm_sec = 0` and leaving DST
//! ambiguity to the zone database (`tm_isdst = -1`) before converting back
//! to an absolute time; dropping either step reproduces the historical
//! fallthrough bug this store is written to avoid.

use crate::error::TimestampError;
use chrono::{Local, NaiveDateTime, TimeZone, Timelike};
use std::path::{Path, PathBuf};

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const AFTER_PREFIX: &str = "after ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampRecord {
    /// The entry last ran at this epoch second.
    RanAt(i64),
    /// The entry may not run again before this epoch second.
    NotUntil(i64),
}

fn stamp_path(dir: &Path, user: &str, id: &str) -> PathBuf {
    dir.join(format!("{user}.{id}"))
}

pub fn read_timestamp(
    dir: &Path,
    user: &str,
    id: &str,
) -> Result<Option<TimestampRecord>, TimestampError> {
    let path = stamp_path(dir, user, id);
    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(TimestampError::Read { path, source }),
    };

    let trimmed = contents.trim();
    let (is_after, datetime_text) = match trimmed.strip_prefix(AFTER_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let epoch = parse_local_datetime(&path, datetime_text)?;
    Ok(Some(if is_after {
        TimestampRecord::NotUntil(epoch)
    } else {
        TimestampRecord::RanAt(epoch)
    }))
}

pub fn write_timestamp(
    dir: &Path,
    user: &str,
    id: &str,
    record: TimestampRecord,
) -> Result<(), TimestampError> {
    let path = stamp_path(dir, user, id);
    let (prefix, epoch) = match record {
        TimestampRecord::RanAt(epoch) => ("", epoch),
        TimestampRecord::NotUntil(epoch) => (AFTER_PREFIX, epoch),
    };

    let naive = chrono::DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default();
    let local = Local.from_utc_datetime(&naive);
    let body = format!("{prefix}{}", local.format(STAMP_FORMAT));

    std::fs::write(&path, body).map_err(|source| TimestampError::Write { path, source })
}

fn parse_local_datetime(path: &Path, text: &str) -> Result<i64, TimestampError> {
    let naive = NaiveDateTime::parse_from_str(text, STAMP_FORMAT)
        .map_err(|_| TimestampError::InvalidDatetime { path: path.to_path_buf(), text: text.to_string() })?
        // the stamp format carries no seconds; pin it to :00 explicitly
        // rather than let it default, and resolve DST ambiguity the
        // way a libc mktime(tm_isdst = -1) would: prefer the earliest
        // of two valid offsets across a fall-back transition.
        .with_second(0)
        .ok_or_else(|| TimestampError::Malformed { path: path.to_path_buf(), contents: text.to_string() })?;

    match Local.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => Ok(dt.timestamp()),
        chrono::LocalResult::Ambiguous(earliest, _latest) => Ok(earliest.timestamp()),
        chrono::LocalResult::None => {
            Err(TimestampError::InvalidDatetime { path: path.to_path_buf(), text: text.to_string() })
        }
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
