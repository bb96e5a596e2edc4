// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! crond: the daemon binary's argument parsing, configuration resolution,
//! daemonization, and tick-loop math, kept in a library so it can be unit
//! tested without actually forking or running an infinite loop.

pub mod cli;
pub mod config;
pub mod daemonize;
pub mod signals;
pub mod tick;
