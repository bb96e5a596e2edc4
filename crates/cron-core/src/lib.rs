// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cron-core: catalog data model shared by the loader, scheduler, and runner.

pub mod bitmap;
pub mod clock;
pub mod entry;
pub mod file;
pub mod id;
pub mod macros;

pub use bitmap::{
    mday_position_bit, weekday_occurrence_bit, DowBitmap, HourBitmap, MdayBitmap, MinuteBitmap,
    MonthBitmap, ALL_DOW, FIFTH_DOW, FIRST_DOW, FOURTH_DOW, LAST_DOW, SECOND_DOW, THIRD_DOW,
};
pub use clock::{Clock, FakeClock, SystemClock};
pub use entry::{CronEntry, EntryState, Freq, NotifierEdge, WaitFlag, WaiterEdge};
pub use file::CronFile;
pub use id::EntryId;
