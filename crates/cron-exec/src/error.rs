// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrivilegeError {
    #[error("no such user `{0}`")]
    UnknownUser(String),
    #[error("looking up user `{user}`: {source}")]
    Lookup { user: String, source: nix::Error },
    #[error("initgroups for `{user}`: {source}")]
    InitGroups { user: String, source: nix::Error },
    #[error("setgid to {gid} for `{user}`: {source}")]
    SetGid { user: String, gid: u32, source: nix::Error },
    #[error("setuid to {uid} for `{user}`: {source}")]
    SetUid { user: String, uid: u32, source: nix::Error },
    #[error("chdir to home `{home}` (and fallback `{fallback}`) failed for `{user}`")]
    ChDir { user: String, home: String, fallback: String },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("creating mail capture file {path}: {source}")]
    CaptureFile { path: std::path::PathBuf, source: std::io::Error },
    #[error("forking job `{id}`: {source}")]
    Fork { id: String, source: nix::Error },
    #[error("dropping privileges for job `{id}`: {source}")]
    Privilege { id: String, #[source] source: PrivilegeError },
    #[error("reaping pid {pid}: {source}")]
    Wait { pid: i32, source: nix::Error },
}
