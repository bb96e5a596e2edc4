// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SIGHUP (reopen the log file) and SIGCHLD (a job finished) wiring. The
//! handlers only set a flag; the tick loop polls and clears it, keeping
//! everything that isn't async-signal-safe out of the handler itself.

use nix::sys::signal::{self, SigHandler, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

static SIGHUP_RECEIVED: AtomicBool = AtomicBool::new(false);
static SIGCHLD_RECEIVED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_sighup(_: libc::c_int) {
    SIGHUP_RECEIVED.store(true, Ordering::SeqCst);
}

extern "C" fn on_sigchld(_: libc::c_int) {
    SIGCHLD_RECEIVED.store(true, Ordering::SeqCst);
}

/// # Safety
/// Must be called once, early in `main`, before any additional threads
/// exist — installing a signal handler is only sound while the process
/// is still single-threaded with respect to signal delivery semantics.
pub unsafe fn install() -> Result<(), nix::Error> {
    signal::signal(Signal::SIGHUP, SigHandler::Handler(on_sighup))?;
    signal::signal(Signal::SIGCHLD, SigHandler::Handler(on_sigchld))?;
    Ok(())
}

pub fn take_sighup() -> bool {
    SIGHUP_RECEIVED.swap(false, Ordering::SeqCst)
}

pub fn take_sigchld() -> bool {
    SIGCHLD_RECEIVED.swap(false, Ordering::SeqCst)
}

#[cfg(test)]
#[path = "signals_tests.rs"]
mod tests;
