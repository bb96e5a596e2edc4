// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-minute predicate evaluation: decomposes an epoch second into local
//! broken-down time once per tick, then checks an entry's five field
//! bitmaps against it. Day-of-month and day-of-week reconcile the way
//! `database.c`'s `FixDayDow`/`TestJobs` do: AND whenever either field is a
//! wildcard; when both are explicitly restricted, `cron-catalog`'s loader
//! has already folded the mday selection into a weekday-occurrence mask and
//! forced mday back to "any day", so the fields read as a single combined
//! "Nth weekday-of-month" check via AND, not OR.

use chrono::{Datelike, Local, TimeZone, Timelike};
use cron_core::{weekday_occurrence_bit, CronEntry};

/// Days in `month0` (0-based, January = 0) of `year`, accounting for leap
/// years. Used to compute the runtime weekday-occurrence bit.
fn days_in_month(year: i32, month0: usize) -> u32 {
    const LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month0 == 1 && (year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)) {
        29
    } else {
        LENGTHS[month0]
    }
}

/// The decomposed local time for one scheduler tick, computed once and
/// reused across every entry checked that minute.
#[derive(Debug, Clone, Copy)]
pub struct MinuteContext {
    pub minute: u32,
    pub hour: u32,
    pub mday: u32,
    /// 0-based, January = 0, matching `MonthBitmap`'s indexing.
    pub month0: usize,
    /// 0-based, Sunday = 0, matching `DowBitmap`'s indexing.
    pub wday: usize,
    /// Which occurrence of `wday` this `mday` is within its month.
    pub occurrence_bit: u8,
}

impl MinuteContext {
    pub fn from_epoch(epoch: i64) -> Self {
        let local = Local
            .timestamp_opt(epoch, 0)
            .single()
            .unwrap_or_else(|| Local.timestamp_opt(epoch, 0).earliest().unwrap_or_else(Local::now));

        let month0 = local.month0() as usize;
        let days = days_in_month(local.year(), month0);

        Self {
            minute: local.minute(),
            hour: local.hour(),
            mday: local.day(),
            month0,
            wday: local.weekday().num_days_from_sunday() as usize,
            occurrence_bit: weekday_occurrence_bit(local.day(), days),
        }
    }
}

/// True if this entry's five fields match the given tick. Only meaningful
/// for `Freq::ByFields` entries; period/reboot/noauto entries are decided
/// in `cron-schedule::arm` instead.
pub fn matches_fields(entry: &CronEntry, ctx: &MinuteContext) -> bool {
    if !entry.minutes[ctx.minute as usize] || !entry.hours[ctx.hour as usize] {
        return false;
    }
    if !entry.months[ctx.month0] {
        return false;
    }

    let mday_matches = entry.mdays[ctx.mday as usize];
    let dow_matches = entry.dows[ctx.wday] & ctx.occurrence_bit != 0;

    match (entry.mday_is_wildcard, entry.dow_is_wildcard) {
        (true, true) => true,
        (true, false) => dow_matches,
        (false, true) => mday_matches,
        (false, false) => mday_matches && dow_matches,
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
