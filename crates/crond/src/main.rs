// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon entry point: parse flags, resolve configuration, daemonize,
//! install signal handlers, load the catalog, then run the one-minute
//! cooperative tick loop until killed.

use anyhow::Context;
use clap::Parser;
use crond::cli::Args;
use crond::config::{self, Config};
use crond::tick::{self, TickAction};
use crond::{daemonize, signals};
use cron_catalog::{Catalog, SpoolKind, TimestampRecord};
use cron_core::clock::{Clock, SystemClock};
use cron_core::entry::{EntryState, Freq, WaitFlag};
use cron_exec::{reap_children, spawn_job, JobOutcome, SpawnedJob};
use cron_logging::{LogLevel, LogSink};
use cron_schedule::{arm_startup_jobs, arm_tick, ArmDecision, MinuteContext};
use std::thread;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => Some(config::load_file_config(path).context("loading config file")?),
        None => None,
    };
    let config = config::resolve(&args, file_config);

    daemonize::daemonize(config.foreground).context("daemonizing")?;

    let sink = match (&config.log_file, config.syslog) {
        (Some(path), _) => LogSink::File(path.clone()),
        (None, true) => LogSink::Syslog,
        (None, false) => LogSink::Stderr,
    };
    let level = LogLevel::from_str_lenient(&config.debug_level);
    let logging = cron_logging::init(sink, level).context("initializing logging")?;

    // SAFETY: still single-threaded here, immediately after daemonizing
    // and before the tick loop spawns any job.
    unsafe { signals::install() }.context("installing signal handlers")?;

    tracing::info!(?config.crontabs_dir, ?config.scrontabs_dir, "crond starting");

    let clock = SystemClock;
    let mut catalog = Catalog::new();
    let mut running: Vec<SpawnedJob> = Vec::new();
    let mut last_sync = 0i64;

    run_tick_loop(&config, &clock, &mut catalog, &mut running, &mut last_sync, &logging)
}

fn run_tick_loop(
    config: &Config,
    clock: &SystemClock,
    catalog: &mut Catalog,
    running: &mut Vec<SpawnedJob>,
    last_sync: &mut i64,
    logging: &cron_logging::LoggingHandle,
) -> anyhow::Result<()> {
    let mut interval = tick::STEADY_INTERVAL;

    loop {
        if signals::take_sighup() {
            let _ = logging.reopen();
            tracing::info!("reopened log sink after SIGHUP");
        }

        let now = clock.now_epoch();
        let expected = *last_sync + interval;
        let action = if *last_sync == 0 {
            TickAction::RunJobs
        } else {
            tick::classify_disparity(expected, now)
        };

        resync_catalog(config, catalog, now)?;

        if action == TickAction::RunJobs {
            run_due_jobs(config, catalog, now, running);
            interval = tick::STEADY_INTERVAL;
        } else {
            tracing::warn!(%now, %expected, "clock disparity detected, resyncing without running jobs");
            interval = tick::RESYNC_INTERVAL;
        }

        *last_sync = now;

        if signals::take_sigchld() {
            let finished = reap_children(running, &config.mailer);
            let finished_pids: Vec<i32> = finished.iter().map(|(pid, _)| *pid).collect();
            for (pid, outcome) in &finished {
                tracing::info!(pid, ?outcome, "job finished");
            }
            running.retain(|job| !finished_pids.contains(&job.pid));
            clear_finished_state(catalog, &finished);
        }

        catalog.reap_dropped();
        thread::sleep(tick::next_sleep(now, interval));
    }
}

/// Move every `Running` entry whose pid just reaped back to `Idle`, and
/// propagate its outcome onto every entry waiting `AFTER=` it: a zero
/// exit clears the waiter edge, anything else fails it. Grounded in
/// `job.c`'s `EndJob`, which is the notifier side of `database.c`'s
/// `ArmJob` wait-graph walk.
fn clear_finished_state(catalog: &mut Catalog, finished: &[(i32, JobOutcome)]) {
    for file in &mut catalog.files {
        let mut completed: Vec<(usize, JobOutcome)> = Vec::new();
        for (index, slot) in file.entries.iter_mut().enumerate() {
            if let Some(entry) = slot {
                if let EntryState::Running(pid) = entry.state {
                    if let Some((_, outcome)) = finished.iter().find(|(p, _)| *p == pid) {
                        entry.state = EntryState::Idle;
                        completed.push((index, *outcome));
                    }
                }
            }
        }

        for (notifier_index, outcome) in completed {
            let flag = match outcome {
                JobOutcome::Exited(0) => WaitFlag::Cleared,
                JobOutcome::Exited(code) => WaitFlag::Failed(code),
                JobOutcome::Signaled(signal) => WaitFlag::Failed(signal),
            };
            let waiter_indices: Vec<usize> = file
                .get(notifier_index)
                .map(|n| n.notifiers.iter().map(|edge| edge.waiter_index).collect())
                .unwrap_or_default();

            for waiter_index in waiter_indices {
                if let Some(waiter_entry) = file.get_mut(waiter_index) {
                    for waiter_edge in &mut waiter_entry.waiters {
                        if waiter_edge.notifier_index == notifier_index {
                            waiter_edge.flag = flag;
                        }
                    }
                    let still_pending =
                        waiter_entry.waiters.iter().any(|w| matches!(w.flag, WaitFlag::Pending));
                    if !still_pending && waiter_entry.state == EntryState::Waiting {
                        waiter_entry.state = EntryState::Idle;
                    }
                }
            }
        }
    }
}

fn resync_catalog(config: &Config, catalog: &mut Catalog, now: i64) -> anyhow::Result<()> {
    let user_files =
        cron_catalog::load_spool(&config.crontabs_dir, SpoolKind::User, now, &config.timestamps_dir)
            .context("loading per-user crontabs")?;
    let system_files = cron_catalog::load_spool(
        &config.scrontabs_dir,
        SpoolKind::System,
        now,
        &config.timestamps_dir,
    )
    .context("loading system crontabs")?;

    for mut file in user_files.into_iter().chain(system_files) {
        arm_startup_jobs(&mut file);
        catalog.replace_or_insert(file);
    }
    Ok(())
}

fn run_due_jobs(config: &Config, catalog: &mut Catalog, now: i64, running: &mut Vec<SpawnedJob>) {
    let ctx = MinuteContext::from_epoch(now);

    for file in &mut catalog.files {
        if file.deleted {
            continue;
        }
        let owner = file.owner.clone();
        for index in 0..file.entries.len() {
            match arm_tick(file, index, &ctx, now) {
                ArmDecision::Arm => {}
                ArmDecision::Wait | ArmDecision::Idle => continue,
            }

            let Some(entry) = file.get(index) else { continue };
            let (job_owner, command) = cron_catalog::loader::split_owner_command(&entry.command)
                .unwrap_or((owner.as_str(), entry.command.as_str()));
            let id = entry.id.as_str().to_string();
            let job_owner = job_owner.to_string();
            let command = command.to_string();
            let freq = entry.freq.clone();

            match spawn_job(&id, &job_owner, &command, &config.tmp_dir) {
                Ok(job) => {
                    let pid = job.pid;
                    running.push(job);
                    if let Some(entry) = file.get_mut(index) {
                        entry.state = EntryState::Running(pid);
                        entry.last_ran = now;
                        if let Freq::Period { period, .. } = &freq {
                            entry.not_until = now + i64::from(*period);
                        }
                    }
                    if let Freq::Period { .. } = &freq {
                        if let Err(err) = cron_catalog::write_timestamp(
                            &config.timestamps_dir,
                            &job_owner,
                            &id,
                            TimestampRecord::RanAt(now),
                        ) {
                            tracing::warn!(%err, %id, "failed to persist run timestamp");
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(%err, %id, "failed to spawn job");
                    if let Freq::Period { delay, .. } = &freq {
                        let not_until = now + i64::from(*delay);
                        if let Some(entry) = file.get_mut(index) {
                            entry.not_until = not_until;
                        }
                        if let Err(err) = cron_catalog::write_timestamp(
                            &config.timestamps_dir,
                            &job_owner,
                            &id,
                            TimestampRecord::NotUntil(not_until),
                        ) {
                            tracing::warn!(%err, %id, "failed to persist retry timestamp");
                        }
                    }
                }
            }
        }
    }
}
