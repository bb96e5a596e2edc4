// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cron-logging: a level-gated `tracing` pipeline with a stderr, syslog,
//! or reopenable-file sink, matching the three log destinations dcron's
//! `-S`/`-L`/default stderr flags select between.

pub mod level;
pub mod reopen;
pub mod sink;

pub use level::LogLevel;
pub use sink::{init, LogSink, LoggingError, LoggingHandle};
