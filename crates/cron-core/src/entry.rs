// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog entry (a single crontab line) and its scheduling attributes.
//!
//! Mirrors the C `CronLine`/`CronWaiter`/`CronNotifier` structs, but the
//! waiter/notifier cross-links become plain slot indices into the owning
//! file's `entries` arena instead of intrusive pointers: `AFTER=` can only
//! name an id defined earlier in the same file, so there is never a need for
//! an edge to reach into another file's arena.

use crate::bitmap::{DowBitmap, HourBitmap, MdayBitmap, MinuteBitmap, MonthBitmap};
use crate::id::EntryId;
use crate::simple_display;

/// How an entry's run times are determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freq {
    /// Ordinary five-field crontab line: fields are checked every minute.
    ByFields,
    /// `@noauto`: never run on a timer, only ever armed by a notifier.
    NoAuto,
    /// `@reboot`: run once, at daemon startup only.
    Reboot,
    /// `@hourly`/`@daily`/`@weekly`/`@monthly`/`@yearly`, or a `FREQ=`
    /// attribute: run every `period` seconds, measured from `last_ran`.
    /// `delay` is the backoff used instead of `period` when a run could
    /// not even be started (the `EAGAIN` retry case) and the stagger
    /// applied to `not_until` the first time the entry is loaded.
    Period { period: u32, delay: u32 },
}

simple_display!(Freq {
    ByFields => "fields",
    NoAuto => "noauto",
    Reboot => "reboot",
    Period { .. } => "period",
});

/// Lifecycle state of an entry's most recent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Not due, not waiting on anything.
    Idle,
    /// Matched its predicate (or a `Period` deadline) this minute and is
    /// queued to run, but has not forked yet.
    Armed,
    /// Has unresolved `AFTER=` dependencies (waiter edges not yet cleared).
    Waiting,
    /// Forked and running under this pid.
    Running(i32),
}

/// Resolution of one `AFTER=` dependency at arm time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitFlag {
    /// Dependency has not finished (or has not even been armed) yet.
    Pending,
    /// Dependency finished successfully; this edge no longer blocks arming.
    Cleared,
    /// Dependency finished with a nonzero exit status.
    Failed(i32),
}

/// An edge recorded on the entry that waits: "I can't arm until the entry
/// at `notifier_index` clears."
#[derive(Debug, Clone, Copy)]
pub struct WaiterEdge {
    pub notifier_index: usize,
    pub flag: WaitFlag,
    /// The `/<interval>` suffix on this dependency's `AFTER=` entry, in
    /// seconds. `0` means "always wait" (the default when no suffix is
    /// given); a positive value bounds how long the waiter will hold off
    /// arming before giving up on a notifier that isn't going to run soon.
    /// Grounded in `database.c`'s `CronWaiter.cw_MaxWait`.
    pub max_wait: u32,
}

/// The mirror image, recorded on the entry that is waited upon: "when I
/// finish, update the waiter at `waiter_index`."
#[derive(Debug, Clone, Copy)]
pub struct NotifierEdge {
    pub waiter_index: usize,
}

/// One parsed, schedulable line from a crontab file.
#[derive(Debug, Clone)]
pub struct CronEntry {
    /// `ID=` attribute, or a file-relative synthetic id when absent.
    pub id: EntryId,
    pub command: String,
    pub freq: Freq,

    pub minutes: MinuteBitmap,
    pub hours: HourBitmap,
    pub mdays: MdayBitmap,
    pub months: MonthBitmap,
    pub dows: DowBitmap,
    /// True when the day-of-month field was `*` (affects AND/OR
    /// reconciliation between mday and dow per spec §4.4).
    pub mday_is_wildcard: bool,
    /// True when the day-of-week field was `*`.
    pub dow_is_wildcard: bool,

    pub state: EntryState,
    /// Epoch seconds of the last successful arm/run, or 0 if never run.
    pub last_ran: i64,
    /// For `Period` entries: earliest epoch second this may next run.
    pub not_until: i64,

    pub waiters: Vec<WaiterEdge>,
    pub notifiers: Vec<NotifierEdge>,
}

impl CronEntry {
    /// True if any `AFTER=` dependency reports a nonzero exit.
    pub fn any_dependency_failed(&self) -> bool {
        self.waiters
            .iter()
            .any(|w| matches!(w.flag, WaitFlag::Failed(_)))
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
