// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builds the process-wide `tracing` subscriber for one of the three
//! sinks the daemon can be pointed at, gated by `LogLevel`.

use crate::level::LogLevel;
use crate::reopen::ReopenableFile;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone)]
pub enum LogSink {
    Stderr,
    Syslog,
    File(PathBuf),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("opening log file {path}: {source}")]
    OpenFile { path: PathBuf, source: std::io::Error },
    #[error("connecting to syslog: {source}")]
    Syslog { source: syslog::Error },
    #[error("installing the global tracing subscriber")]
    AlreadyInstalled,
}

/// Handle returned by `init`; `reopen` is a no-op for sinks other than
/// `File`, since only a rotated file needs reopening after a SIGHUP.
pub enum LoggingHandle {
    Stderr,
    Syslog,
    File(ReopenableFile),
}

impl LoggingHandle {
    pub fn reopen(&self) -> std::io::Result<()> {
        match self {
            LoggingHandle::File(writer) => writer.reopen(),
            _ => Ok(()),
        }
    }
}

pub fn init(sink: LogSink, level: LogLevel) -> Result<LoggingHandle, LoggingError> {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.to_tracing());

    match sink {
        LogSink::Stderr => {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|_| LoggingError::AlreadyInstalled)?;
            Ok(LoggingHandle::Stderr)
        }
        LogSink::File(path) => {
            let writer = ReopenableFile::open(path.clone())
                .map_err(|source| LoggingError::OpenFile { path, source })?;
            let layer = tracing_subscriber::fmt::layer().with_writer(writer.clone()).with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|_| LoggingError::AlreadyInstalled)?;
            Ok(LoggingHandle::File(writer))
        }
        LogSink::Syslog => {
            let logger = syslog::unix(syslog::Formatter3164 {
                facility: syslog::Facility::LOG_CRON,
                hostname: None,
                process: "crond".to_string(),
                pid: std::process::id(),
            })
            .map_err(|source| LoggingError::Syslog { source })?;
            let writer = SyslogWriter { logger: Arc::new(parking_lot::Mutex::new(logger)) };
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|_| LoggingError::AlreadyInstalled)?;
            Ok(LoggingHandle::Syslog)
        }
    }
}

/// Bridges `tracing-subscriber`'s byte-oriented `fmt` layer onto the
/// `syslog` crate's line-oriented `Logger`. Every formatted line is sent
/// at `info` severity: the daemon's own `LogLevel` threshold has already
/// decided whether the line exists at all, so a second severity mapping
/// through syslog's facility levels would be redundant bookkeeping.
#[derive(Clone)]
struct SyslogWriter {
    logger: Arc<parking_lot::Mutex<syslog::Logger<syslog::LoggerBackend, syslog::Formatter3164>>>,
}

impl Write for SyslogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines() {
            if !line.is_empty() {
                let _ = self.logger.lock().info(line);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SyslogWriter {
    type Writer = SyslogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
