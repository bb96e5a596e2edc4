// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The job runner: fork, drop privileges in the child, redirect stdout
//! and stderr into the mail capture file, exec `/bin/sh -c <command>`,
//! and later reap the child and decide whether to mail its output.
//! Grounded in `job.c`'s `RunJob`/`EndJob`.

use crate::error::RunError;
use crate::mail::{create_capture_file, deliver_if_nonempty, rename_with_pid};
use crate::privilege::drop_privileges;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{fork, ForkResult};
use std::ffi::CString;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SpawnedJob {
    pub pid: i32,
    pub capture_path: PathBuf,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Exited(i32),
    Signaled(i32),
}

/// Fork and run `command` as `user`, capturing its combined stdout/stderr.
/// The parent returns immediately with the child's pid; the caller is
/// responsible for reaping it later via `reap_children`.
pub fn spawn_job(
    id: &str,
    user: &str,
    command: &str,
    tmp_dir: &Path,
) -> Result<SpawnedJob, RunError> {
    let (capture_path, capture_file) = create_capture_file(tmp_dir, user, id)
        .map_err(|source| RunError::CaptureFile { path: tmp_dir.to_path_buf(), source })?;

    // SAFETY: the parent only inspects the returned pid; the child path
    // immediately drops privileges and execs without returning through
    // any Rust call that assumes it still shares the parent's threads.
    let fork_result = unsafe { fork() }.map_err(|source| RunError::Fork { id: id.to_string(), source })?;

    match fork_result {
        ForkResult::Parent { child } => {
            let pid = child.as_raw();
            let _ = rename_with_pid(&capture_path, pid);
            Ok(SpawnedJob { pid, capture_path: capture_path.with_extension(pid.to_string()), user: user.to_string() })
        }
        ForkResult::Child => {
            run_child(user, command, &capture_file);
        }
    }
}

/// Runs entirely in the forked child. Never returns: either `execv`
/// replaces this process image, or a setup failure exits non-zero
/// directly, matching the original's fd-8 "log the error, then die"
/// convention (simplified here to stderr since the child no longer has
/// its own log sink once privileges are dropped).
fn run_child(user: &str, command: &str, capture_file: &std::fs::File) -> ! {
    if let Err(err) = drop_privileges(user) {
        eprintln!("cron: {user}: {err}");
        std::process::exit(127);
    }

    let fd = capture_file.as_raw_fd();
    let _ = nix::unistd::dup2(fd, 1);
    let _ = nix::unistd::dup2(fd, 2);

    let shell = CString::new("/bin/sh").unwrap_or_default();
    let flag = CString::new("-c").unwrap_or_default();
    let cmd = CString::new(command).unwrap_or_default();
    let argv = [shell.clone(), flag, cmd];

    let _ = nix::unistd::execv(&shell, &argv);
    // execv only returns on failure.
    std::process::exit(126);
}

/// Non-blocking reap of any finished children, each paired with its
/// pid's outcome and, for a clean pid match, a chance to mail its
/// capture file. Call once per tick from the daemon's SIGCHLD handling.
pub fn reap_children(jobs: &[SpawnedJob], mailer: &Path) -> Vec<(i32, JobOutcome)> {
    let mut outcomes = Vec::new();
    for job in jobs {
        let pid = nix::unistd::Pid::from_raw(job.pid);
        match waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::Exited(_, code)) => {
                let _ = deliver_if_nonempty(&job.capture_path, &job.user, mailer);
                outcomes.push((job.pid, JobOutcome::Exited(code)));
            }
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                let _ = deliver_if_nonempty(&job.capture_path, &job.user, mailer);
                outcomes.push((job.pid, JobOutcome::Signaled(signal as i32)));
            }
            _ => {}
        }
    }
    outcomes
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
