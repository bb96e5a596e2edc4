// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemonization: fork-and-exit the parent, start a new session, and
//! redirect the standard fds to `/dev/null`. Grounded in `main.c`'s
//! startup sequence. Must run before any catalog is loaded or thread
//! spawned — forking a multi-threaded process is unsafe in ways that
//! would corrupt state the cron tick loop depends on.

use nix::unistd::{close, dup2, fork, setsid, ForkResult};
use std::fs::OpenOptions;
use std::os::fd::AsRawFd;

#[derive(Debug, thiserror::Error)]
pub enum DaemonizeError {
    #[error("forking: {0}")]
    Fork(nix::Error),
    #[error("starting a new session: {0}")]
    Setsid(nix::Error),
    #[error("opening /dev/null: {0}")]
    DevNull(std::io::Error),
    #[error("redirecting standard fd {fd}: {source}")]
    Redirect { fd: i32, source: nix::Error },
}

/// Fork, let the parent exit immediately, and continue in the child
/// after `setsid()` and fd redirection. Returns without forking at all
/// when `foreground` is set.
pub fn daemonize(foreground: bool) -> Result<(), DaemonizeError> {
    if foreground {
        return Ok(());
    }

    // SAFETY: called at the very start of main, before any catalog I/O,
    // logging subscriber, or extra thread exists.
    match unsafe { fork() }.map_err(DaemonizeError::Fork)? {
        ForkResult::Parent { .. } => std::process::exit(0),
        ForkResult::Child => {}
    }

    setsid().map_err(DaemonizeError::Setsid)?;
    redirect_standard_fds()?;
    Ok(())
}

fn redirect_standard_fds() -> Result<(), DaemonizeError> {
    let dev_null = OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/null")
        .map_err(DaemonizeError::DevNull)?;
    let fd = dev_null.as_raw_fd();

    for target in [0, 1, 2] {
        dup2(fd, target).map_err(|source| DaemonizeError::Redirect { fd: target, source })?;
    }

    // Close anything else that leaked in from the parent's environment.
    for extra_fd in 3..256 {
        let _ = close(extra_fd);
    }

    Ok(())
}
