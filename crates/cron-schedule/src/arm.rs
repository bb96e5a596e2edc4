// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The arm protocol: turns "did this entry's predicate/period fire this
//! tick" into a scheduling decision, accounting for unresolved `AFTER=`
//! dependencies. Grounded in `database.c`'s `ArmJob`.

use crate::predicate::{matches_fields, MinuteContext};
use crate::wait::notifier_due_within;
use cron_core::entry::{EntryState, Freq, WaitFlag};
use cron_core::{CronEntry, CronFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmDecision {
    /// Nothing to do this tick.
    Idle,
    /// Ready to fork and run right now.
    Arm,
    /// Due, but blocked on an unresolved `AFTER=` dependency.
    Wait,
}

/// True once every `AFTER=` dependency on `entry` has either cleared or
/// given up waiting. A `Pending` edge with `max_wait == 0` blocks forever
/// (dcron's "always wait" default); a `Pending` edge with a nonzero
/// `max_wait` blocks only while its notifier is still expected to run
/// within that window — once the sweep says the notifier won't make it,
/// the waiter gives up and arms anyway. A dangling edge (notifier slot
/// gone) never blocks.
fn all_waiters_clear(file: &CronFile, entry: &CronEntry, now: i64) -> bool {
    entry.waiters.iter().all(|waiter| match waiter.flag {
        WaitFlag::Cleared | WaitFlag::Failed(_) => true,
        WaitFlag::Pending => {
            if waiter.max_wait == 0 {
                return false;
            }
            match file.get(waiter.notifier_index) {
                Some(notifier) => !notifier_due_within(notifier, now, waiter.max_wait),
                None => true,
            }
        }
    })
}

/// Decide what to do with the entry at `index` this tick. `now` is the
/// current epoch second, used for `Period` entries' `not_until` deadline
/// and the `AFTER=` window-sweep; `ctx` is only consulted for `ByFields`
/// entries.
pub fn arm_tick(file: &CronFile, index: usize, ctx: &MinuteContext, now: i64) -> ArmDecision {
    let Some(entry) = file.get(index) else {
        return ArmDecision::Idle;
    };

    if matches!(entry.state, EntryState::Running(_)) {
        return ArmDecision::Idle;
    }

    let due = match &entry.freq {
        Freq::ByFields => matches_fields(entry, ctx),
        Freq::Period { .. } => now >= entry.not_until,
        Freq::Reboot => false,
        Freq::NoAuto => false,
    };

    if !due {
        // A NoAuto (or any) entry whose dependencies just cleared can
        // still arm out of band from the timer predicate.
        if matches!(&entry.freq, Freq::NoAuto)
            && !entry.waiters.is_empty()
            && !entry.any_dependency_failed()
            && all_waiters_clear(file, entry, now)
        {
            return ArmDecision::Arm;
        }
        return ArmDecision::Idle;
    }

    if entry.any_dependency_failed() {
        return ArmDecision::Idle;
    }
    if !all_waiters_clear(file, entry, now) {
        return ArmDecision::Wait;
    }
    ArmDecision::Arm
}

#[cfg(test)]
#[path = "arm_tests.rs"]
mod tests;
