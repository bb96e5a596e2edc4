// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A file writer that can be told to reopen its path, so a SIGHUP handler
//! can make the log file layer pick up a log-rotated file without
//! restarting the daemon.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReopenableFile {
    path: PathBuf,
    file: Arc<Mutex<File>>,
}

impl ReopenableFile {
    pub fn open(path: PathBuf) -> io::Result<Self> {
        let file = open_append(&path)?;
        Ok(Self { path, file: Arc::new(Mutex::new(file)) })
    }

    /// Reopen the underlying path. Idempotent to call from a signal
    /// handler's deferred-work queue even if nothing rotated.
    pub fn reopen(&self) -> io::Result<()> {
        let new_file = open_append(&self.path)?;
        *self.file.lock() = new_file;
        Ok(())
    }
}

fn open_append(path: &std::path::Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl io::Write for ReopenableFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.lock().flush()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ReopenableFile {
    type Writer = ReopenableFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
#[path = "reopen_tests.rs"]
mod tests;
