// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for catalog loading and the timestamp store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading spool directory {path}: {source}")]
    ReadDir { path: std::path::PathBuf, source: std::io::Error },
    #[error("reading crontab file {path}: {source}")]
    ReadFile { path: std::path::PathBuf, source: std::io::Error },
    #[error("{path}: exceeded the {limit} entry ceiling")]
    TooManyEntries { path: std::path::PathBuf, limit: usize },
    #[error("{path}: exceeded the {limit} line ceiling")]
    TooManyLines { path: std::path::PathBuf, limit: usize },
}

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("reading timestamp file {path}: {source}")]
    Read { path: std::path::PathBuf, source: std::io::Error },
    #[error("writing timestamp file {path}: {source}")]
    Write { path: std::path::PathBuf, source: std::io::Error },
    #[error("timestamp file {path} has malformed contents: {contents:?}")]
    Malformed { path: std::path::PathBuf, contents: String },
    #[error("timestamp file {path} has an unparseable datetime `{text}`")]
    InvalidDatetime { path: std::path::PathBuf, text: String },
}
