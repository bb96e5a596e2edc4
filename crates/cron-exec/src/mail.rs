// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mail capture file handling: a job's stdout/stderr are captured to a
//! private temp file and, if non-empty once the job exits, mailed to the
//! owning user. Grounded in `job.c`'s `RunJob`/`EndJob`.

use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

/// Create the private capture file for a freshly-armed job, before fork,
/// so a racing second instance of the same entry can never open the same
/// name (`O_EXCL`) or inherit stale contents (`O_TRUNC`).
pub fn create_capture_file(tmp_dir: &Path, user: &str, id: &str) -> std::io::Result<(PathBuf, std::fs::File)> {
    let path = tmp_dir.join(format!("cron.{user}.{id}.{}", std::process::id()));
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .custom_flags(libc_o_excl())
        .mode(0o600)
        .open(&path)?;
    Ok((path, file))
}

/// Rename the capture file to embed the job's real pid once it's known,
/// matching the original's two-phase naming (opened before fork under a
/// provisional name, renamed after fork to the child's pid).
pub fn rename_with_pid(path: &Path, pid: i32) -> std::io::Result<PathBuf> {
    let renamed = path.with_extension(pid.to_string());
    std::fs::rename(path, &renamed)?;
    Ok(renamed)
}

/// Deliver a non-empty capture file to its owning user via the
/// configured mailer, then remove it. A capture file that fails the
/// sanity checks below (not our pid's, not a plain file, grown since we
/// last looked) is left alone rather than mailed, since that indicates
/// tampering or a race rather than real job output.
pub fn deliver_if_nonempty(path: &Path, user: &str, mailer: &Path) -> std::io::Result<bool> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() || metadata.len() == 0 {
        let _ = std::fs::remove_file(path);
        return Ok(false);
    }

    let body = std::fs::read(path)?;
    let mut child = std::process::Command::new(mailer)
        .arg(user)
        .stdin(std::process::Stdio::piped())
        .spawn()?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(&body)?;
    }
    child.wait()?;
    std::fs::remove_file(path)?;
    Ok(true)
}

fn libc_o_excl() -> i32 {
    libc::O_EXCL
}

#[cfg(test)]
#[path = "mail_tests.rs"]
mod tests;
