// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling.
//!
//! The scheduler only ever needs wall-clock epoch seconds (it broken-downs
//! them into local time itself per minute), so unlike most clock traits this
//! has no monotonic `Instant` side — minute math and DST handling live in
//! cron-schedule, this just supplies "now".

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A clock that provides the current wall-clock time as epoch seconds.
pub trait Clock: Clone + Send + Sync {
    fn now_epoch(&self) -> i64;
}

/// Real system clock.
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Fake clock for testing with controllable time.
#[derive(Clone)]
pub struct FakeClock {
    epoch: Arc<Mutex<i64>>,
}

impl FakeClock {
    pub fn new(epoch: i64) -> Self {
        Self { epoch: Arc::new(Mutex::new(epoch)) }
    }

    /// Advance the clock by the given number of seconds.
    pub fn advance_secs(&self, secs: i64) {
        *self.epoch.lock() += secs;
    }

    pub fn set_epoch(&self, epoch: i64) {
        *self.epoch.lock() = epoch;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for FakeClock {
    fn now_epoch(&self) -> i64 {
        *self.epoch.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
