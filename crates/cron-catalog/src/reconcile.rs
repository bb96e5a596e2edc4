// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Converts a parsed line's field vectors into the fixed-size bitmaps
//! `cron-core` stores on a `CronEntry`.
//!
//! A plain (non position-qualified) day-of-week match expands to "any
//! occurrence" (`ALL_DOW`) so the predicate evaluator's weekday-position
//! check in cron-schedule degrades correctly for entries that never named
//! a specific occurrence.
//!
//! When *both* mday and dow are explicitly restricted, this cron flavor
//! does not reconcile them with an OR the way classic vixie-cron does:
//! `FixDayDow` (`database.c:895-960`) instead reinterprets the mday
//! selection as a set of weekday-occurrence ordinals (1st..5th, or "last"
//! for anything 6 and up) and folds it into the dow field's occurrence
//! mask, then resets mday back to "every day admissible" so the predicate
//! evaluator's AND against the (now occurrence-qualified) dow field is the
//! only gate left. A `0 9 1-5,29-31 * fri` line, for example, becomes "the
//! 1st through 5th, or last, Friday of the month" — in practice, every
//! Friday, since 1-5 already covers every possible occurrence ordinal.

use cron_core::{mday_position_bit, DowBitmap, HourBitmap, MdayBitmap, MinuteBitmap, MonthBitmap, ALL_DOW};

pub struct FieldBitmaps {
    pub minutes: MinuteBitmap,
    pub hours: HourBitmap,
    pub mdays: MdayBitmap,
    pub months: MonthBitmap,
    pub dows: DowBitmap,
}

fn to_fixed<const N: usize>(source: &[bool]) -> [bool; N] {
    let mut out = [false; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = source.get(i).copied().unwrap_or(false);
    }
    out
}

/// Build the fixed-size bitmaps an entry stores from the parser's
/// variable-length vectors, reconciling a dual mday/dow restriction into
/// the "Nth weekday-of-month" mask per `FixDayDow`.
pub fn build_bitmaps(
    minutes: &[bool],
    hours: &[bool],
    mdays: &[bool],
    months: &[bool],
    dows: &[bool],
    mday_is_wildcard: bool,
    dow_is_wildcard: bool,
) -> FieldBitmaps {
    let both_restricted = !mday_is_wildcard && !dow_is_wildcard;

    let dow_bitmap: DowBitmap = {
        let mut out: DowBitmap = [0; 7];
        for (i, selected) in dows.iter().enumerate().take(7) {
            if !*selected {
                continue;
            }
            out[i] = if both_restricted {
                mdays
                    .iter()
                    .enumerate()
                    .filter(|(_, selected)| **selected)
                    .fold(0u8, |mask, (mday, _)| mask | mday_position_bit(mday as u32))
            } else {
                ALL_DOW
            };
        }
        out
    };

    let mdays_out = if both_restricted {
        // The mday field no longer names actual days once it has been
        // folded into the dow occurrence mask above; every day is
        // admissible and the dow field's occurrence bits are the only
        // remaining gate.
        [true; 32]
    } else {
        to_fixed::<32>(mdays)
    };

    FieldBitmaps {
        minutes: to_fixed::<60>(minutes),
        hours: to_fixed::<24>(hours),
        mdays: mdays_out,
        months: to_fixed::<12>(months),
        dows: dow_bitmap,
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
