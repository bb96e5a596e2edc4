// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-size time bitmaps and the day-of-week positional bits.
//!
//! Kept as plain fixed-size arrays rather than a bitset type: each is tiny
//! (60, 24, 32, 12, or 7 elements) and a reader should be able to index them
//! directly with `tm_min`/`tm_hour`/etc without going through an abstraction.

/// Minutes, 0..59.
pub type MinuteBitmap = [bool; 60];
/// Hours, 0..23.
pub type HourBitmap = [bool; 24];
/// Days of month. Index 0 is unused; valid days are 1..31.
pub type MdayBitmap = [bool; 32];
/// Months, 0..11 (January = 0).
pub type MonthBitmap = [bool; 12];
/// Days of week, 0..6 (Sunday = 0). Each slot holds a 6-bit occurrence mask.
pub type DowBitmap = [u8; 7];

/// Bit for "this is the 1st occurrence of this weekday in the month".
pub const FIRST_DOW: u8 = 1 << 0;
pub const SECOND_DOW: u8 = 1 << 1;
pub const THIRD_DOW: u8 = 1 << 2;
pub const FOURTH_DOW: u8 = 1 << 3;
pub const FIFTH_DOW: u8 = 1 << 4;
/// Bit for "this is the last occurrence of this weekday in the month",
/// regardless of whether that is the 4th or 5th occurrence.
pub const LAST_DOW: u8 = 1 << 5;
pub const ALL_DOW: u8 = FIRST_DOW | SECOND_DOW | THIRD_DOW | FOURTH_DOW | FIFTH_DOW | LAST_DOW;

/// Map a *selected month-day value* from a crontab field to the occurrence
/// bit it stands for when folding a dual mday/dow restriction into a single
/// "Nth weekday-of-month" mask (`FixDayDow`, `database.c`): values 1..5 name
/// the 1st..5th occurrence of whatever weekday the dow field picked, and
/// anything from 6 up names "the last occurrence", since no month has a 6th
/// occurrence of a weekday. This is a load-time mask-building helper; it is
/// not the same computation as the runtime occurrence of *today's actual
/// date* — see `weekday_occurrence_bit` for that.
pub fn mday_position_bit(mday: u32) -> u8 {
    match mday {
        1 => FIRST_DOW,
        2 => SECOND_DOW,
        3 => THIRD_DOW,
        4 => FOURTH_DOW,
        5 => FIFTH_DOW,
        _ => LAST_DOW,
    }
}

/// Which occurrence of its weekday `mday` is, within a month of
/// `days_in_month` days: `1 << ((mday - 1) / 7)` gives the 1st..5th
/// occurrence bit, and the last occurrence additionally carries `LAST_DOW`
/// so a "last Friday of the month" check matches regardless of whether that
/// month has four or five Fridays. Grounded in `database.c`'s `ArmJob`
/// (~1081-1086): `n_wday = 1 << ((tm_mday - 1) / 7)`, OR-ing in `LAST_DOW`
/// when that occurrence is the 4th or later and `mday + 7` falls in the
/// next month.
pub fn weekday_occurrence_bit(mday: u32, days_in_month: u32) -> u8 {
    let occurrence = (mday.saturating_sub(1)) / 7;
    let mut bit = 1u8 << occurrence.min(4);
    if bit >= FOURTH_DOW && mday + 7 > days_in_month {
        bit |= LAST_DOW;
    }
    bit
}

#[cfg(test)]
#[path = "bitmap_tests.rs"]
mod tests;
