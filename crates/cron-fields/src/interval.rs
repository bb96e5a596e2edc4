// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for the `FREQ=` interval shorthand (`30m`, `2h`, `1d`, `1w`) and
//! the `@hourly`/`@daily`/`@weekly`/`@monthly`/`@yearly` keywords, grounded
//! in `database.c`'s `ParseTimeInterval` and `defs.h`'s `*_FREQ` constants.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("empty interval")]
    Empty,
    #[error("invalid interval `{0}`, expected a number followed by m/h/d/w")]
    InvalidSyntax(String),
    #[error("interval count must be positive, got `{0}`")]
    InvalidCount(String),
}

const MINUTE: u32 = 60;
const HOUR: u32 = 60 * MINUTE;
const DAY: u32 = 24 * HOUR;
const WEEK: u32 = 7 * DAY;

/// `@monthly` gets its own branch (not a fixed-seconds period, see
/// `parse_keyword`) because calendar months vary in length; every other
/// keyword and every `Nm`/`Nh`/`Nd`/`Nw` literal maps to a fixed second
/// count.
pub fn parse_interval(text: &str) -> Result<u32, IntervalError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(IntervalError::Empty);
    }

    let (digits, unit) = text.split_at(text.len() - 1);
    let count: u32 = digits
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| IntervalError::InvalidCount(digits.to_string()))?;

    let unit_seconds = match unit {
        "m" => MINUTE,
        "h" => HOUR,
        "d" => DAY,
        "w" => WEEK,
        _ => return Err(IntervalError::InvalidSyntax(text.to_string())),
    };

    Ok(count * unit_seconds)
}

/// Parse the `FREQ=<freq>[/<delay>]` attribute: an explicit `/<delay>`
/// suffix overrides the retry backoff; absent, `delay` falls back to
/// `freq` itself. Grounded in `database.c`'s `ParseOneAttribute`
/// (`FREQ_TAG` branch): `ptr = ParseInterval(&cl_Freq, ptr); if (*ptr=='/')
/// ptr = ParseInterval(&cl_Delay, ++ptr); else cl_Delay = cl_Freq;`.
pub fn parse_freq_delay(text: &str) -> Result<(u32, u32), IntervalError> {
    match text.split_once('/') {
        Some((freq_text, delay_text)) => {
            let freq = parse_interval(freq_text)?;
            let delay = parse_interval(delay_text)?;
            Ok((freq, delay))
        }
        None => {
            let freq = parse_interval(text)?;
            Ok((freq, freq))
        }
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
