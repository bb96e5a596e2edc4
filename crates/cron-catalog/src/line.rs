// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-line crontab parsing: leading `ID=`/`FREQ=`/`AFTER=` attributes,
//! the five time fields (or an `@keyword`), an optional system-spool user
//! column, and the command. Grounded in `database.c`'s `ParseLine` /
//! `ParseAttributes` / `ParseOneAttribute`.

use cron_fields::{parse_field, parse_freq_delay, parse_interval, FieldKind};

/// One `AFTER=` dependency: the id it waits on, and the `/<interval>`
/// suffix (`0` when absent, meaning "always wait" — see `WaiterEdge`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterRef {
    pub id: String,
    pub max_wait: u32,
}

/// What a parsed, non-blank, non-comment line contained.
#[derive(Debug, Clone)]
pub struct ParsedLine {
    pub id: Option<String>,
    pub after: Vec<AfterRef>,
    pub freq_override: Option<(u32, u32)>,
    pub schedule: Schedule,
    /// Present only for system-spool lines (`/etc/crontab`, `/etc/cron.d/*`),
    /// which carry a user column the per-user spool does not.
    pub run_as: Option<String>,
    pub command: String,
}

#[derive(Debug, Clone)]
pub enum Schedule {
    Fields {
        minutes: Vec<bool>,
        hours: Vec<bool>,
        mdays: Vec<bool>,
        months: Vec<bool>,
        dows: Vec<bool>,
        mday_is_wildcard: bool,
        dow_is_wildcard: bool,
    },
    Reboot,
    NoAuto,
    /// `@hourly`/`@daily`/`@weekly`/`@monthly`/`@yearly`, already resolved
    /// to a fixed `(period, delay)` pair in seconds (`@monthly` gets its
    /// own 30-day branch rather than falling through to `@yearly`, per the
    /// corrected semantics this loader implements). `delay` here is the
    /// computed default (`ParseTimeInterval`): `period / 20`, rounded down
    /// to the minute, with a 60s floor.
    Period(u32, u32),
}

const HOURLY: u32 = 60 * 60;
const DAILY: u32 = 24 * HOURLY;
const WEEKLY: u32 = 7 * DAILY;
const MONTHLY: u32 = 30 * DAILY;
const YEARLY: u32 = 365 * DAILY;

/// Default retry/stagger delay for a bare `@keyword` period, grounded in
/// `database.c`'s `ParseTimeInterval`: `cl_Delay = cl_Freq / 20`, rounded
/// down to the nearest minute, with a 60s floor.
fn default_delay(period: u32) -> u32 {
    let raw = (period / 20) / 60 * 60;
    raw.max(60)
}

pub fn parse_line(has_user_column: bool, raw: &str) -> Result<Option<ParsedLine>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace().peekable();
    let mut id = None;
    let mut after = Vec::new();
    let mut freq_override = None;

    while let Some(&tok) = tokens.peek() {
        if let Some(value) = tok.strip_prefix("ID=") {
            id = Some(value.to_string());
        } else if let Some(value) = tok.strip_prefix("AFTER=") {
            for item in value.split(',') {
                let (name, max_wait) = match item.split_once('/') {
                    Some((name, interval)) => {
                        let secs = parse_interval(interval)
                            .map_err(|e| format!("invalid AFTER= wait interval: {e}"))?;
                        (name.to_string(), secs)
                    }
                    None => (item.to_string(), 0),
                };
                after.push(AfterRef { id: name, max_wait });
            }
        } else if let Some(value) = tok.strip_prefix("FREQ=") {
            freq_override =
                Some(parse_freq_delay(value).map_err(|e| format!("invalid FREQ=: {e}"))?);
        } else {
            break;
        }
        tokens.next();
    }

    let first = tokens.next().ok_or_else(|| "missing schedule".to_string())?;

    let schedule = if let Some(keyword) = first.strip_prefix('@') {
        match keyword {
            "reboot" => Schedule::Reboot,
            "noauto" => Schedule::NoAuto,
            "hourly" => Schedule::Period(HOURLY, default_delay(HOURLY)),
            "daily" | "midnight" => Schedule::Period(DAILY, default_delay(DAILY)),
            "weekly" => Schedule::Period(WEEKLY, default_delay(WEEKLY)),
            "monthly" => Schedule::Period(MONTHLY, default_delay(MONTHLY)),
            "yearly" | "annually" => Schedule::Period(YEARLY, default_delay(YEARLY)),
            other => return Err(format!("unknown @keyword `{other}`")),
        }
    } else {
        let minute_text = first;
        let hour_text = tokens.next().ok_or_else(|| "missing hour field".to_string())?;
        let mday_text = tokens.next().ok_or_else(|| "missing day-of-month field".to_string())?;
        let month_text = tokens.next().ok_or_else(|| "missing month field".to_string())?;
        let dow_text = tokens.next().ok_or_else(|| "missing day-of-week field".to_string())?;

        let (minutes, _) =
            parse_field(FieldKind::Minute, minute_text).map_err(|e| e.to_string())?;
        let (hours, _) = parse_field(FieldKind::Hour, hour_text).map_err(|e| e.to_string())?;
        let (mdays, mday_is_wildcard) =
            parse_field(FieldKind::MonthDay, mday_text).map_err(|e| e.to_string())?;
        let (months, _) =
            parse_field(FieldKind::Month, month_text).map_err(|e| e.to_string())?;
        let (dows, dow_is_wildcard) =
            parse_field(FieldKind::WeekDay, dow_text).map_err(|e| e.to_string())?;

        Schedule::Fields { minutes, hours, mdays, months, dows, mday_is_wildcard, dow_is_wildcard }
    };

    let run_as = if has_user_column {
        Some(tokens.next().ok_or_else(|| "missing user column".to_string())?.to_string())
    } else {
        None
    };

    let command: String = tokens.collect::<Vec<_>>().join(" ");
    if command.is_empty() {
        return Err("missing command".to_string());
    }

    let is_period = matches!(schedule, Schedule::Period(..)) || freq_override.is_some();
    if is_period && id.is_none() {
        return Err(
            "a FREQ=/@period entry must be named with ID= so its retry state can persist"
                .to_string(),
        );
    }

    Ok(Some(ParsedLine { id, after, freq_override, schedule, run_as, command }))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
