// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `AFTER=<id>/<max_wait>` window-sweep: when a waiter's `max_wait` is
//! nonzero, it does not wait on its notifier forever — it gives up and
//! arms anyway once it can tell the notifier will not run again soon.
//! Grounded in `database.c`'s `ArmJob`, which walks the notifier's own
//! schedule forward across the interval `(now, now + max_wait]` before
//! deciding whether to keep the waiter blocked.

use crate::predicate::{matches_fields, MinuteContext};
use cron_core::entry::Freq;
use cron_core::CronEntry;

/// Upper bound on how far the sweep looks ahead, regardless of how large
/// a `max_wait` a crontab line declares, so a multi-year `AFTER=x/400d`
/// can't turn one tick's arming decision into a long scan.
const MAX_LOOKAHEAD_MINUTES: i64 = 1440;

/// True if `notifier` is expected to become due at some point in
/// `(now, now + window]`. `Reboot`/`NoAuto` notifiers never fire from the
/// timer, so they are never "due within a window" — a waiter depending on
/// one only ever clears when that notifier actually finishes.
pub fn notifier_due_within(notifier: &CronEntry, now: i64, window: u32) -> bool {
    match &notifier.freq {
        Freq::Period { .. } => notifier.not_until <= now + i64::from(window),
        Freq::ByFields => {
            let lookahead_secs = i64::from(window).min(MAX_LOOKAHEAD_MINUTES * 60);
            let start = now - now.rem_euclid(60);
            let mut t = start;
            while t <= now + lookahead_secs {
                if matches_fields(notifier, &MinuteContext::from_epoch(t)) {
                    return true;
                }
                t += 60;
            }
            false
        }
        Freq::Reboot | Freq::NoAuto => false,
    }
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
