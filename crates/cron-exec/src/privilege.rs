// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Privilege drop: look up the target user, then give up group and user
//! privileges in the order that actually matters — groups before the
//! user id that would stop us being allowed to change them. Grounded in
//! `subs.c`'s `ChangeUser`.

use crate::error::PrivilegeError;
use nix::unistd::{self, Gid, Uid, User};

/// Drop from root to `username`: `initgroups`, then `setgid`, then
/// `setuid`, then `chdir` into the user's home (falling back to `/tmp`
/// if the home directory doesn't exist or isn't reachable). Each step is
/// fatal to the caller on failure, matching the original's "this process
/// must never run a job as the wrong user" stance.
pub fn drop_privileges(username: &str) -> Result<(), PrivilegeError> {
    let user = User::from_name(username)
        .map_err(|source| PrivilegeError::Lookup { user: username.to_string(), source })?
        .ok_or_else(|| PrivilegeError::UnknownUser(username.to_string()))?;

    // SAFETY: single-threaded at the point this runs — called only in a
    // freshly forked child before any other thread could exist, and
    // before exec.
    unsafe {
        unistd::initgroups(
            std::ffi::CString::new(username).unwrap_or_default().as_c_str(),
            user.gid,
        )
    }
    .map_err(|source| PrivilegeError::InitGroups { user: username.to_string(), source })?;

    unistd::setgid(user.gid).map_err(|source| PrivilegeError::SetGid {
        user: username.to_string(),
        gid: user.gid.as_raw(),
        source,
    })?;

    unistd::setuid(user.uid).map_err(|source| PrivilegeError::SetUid {
        user: username.to_string(),
        uid: user.uid.as_raw(),
        source,
    })?;

    let home = &user.dir;
    if std::env::set_current_dir(home).is_err() {
        std::env::set_current_dir("/tmp").map_err(|_| PrivilegeError::ChDir {
            user: username.to_string(),
            home: home.display().to_string(),
            fallback: "/tmp".to_string(),
        })?;
    }

    std::env::set_var("USER", username);
    std::env::set_var("HOME", home);
    if !user.shell.as_os_str().is_empty() {
        std::env::set_var("SHELL", &user.shell);
    }

    Ok(())
}

#[allow(dead_code)]
fn raw_ids(uid: Uid, gid: Gid) -> (u32, u32) {
    (uid.as_raw(), gid.as_raw())
}

#[cfg(test)]
#[path = "privilege_tests.rs"]
mod tests;
