use super::*;

#[yare::parameterized(
    thirty_minutes = { "30m", 30 * MINUTE },
    two_hours = { "2h", 2 * HOUR },
    one_day = { "1d", DAY },
    one_week = { "1w", WEEK },
)]
fn parses_expected_seconds(text: &str, expected: u32) {
    assert_eq!(parse_interval(text), Ok(expected));
}

#[test]
fn rejects_empty() {
    assert_eq!(parse_interval(""), Err(IntervalError::Empty));
}

#[test]
fn rejects_unknown_unit() {
    assert!(matches!(parse_interval("5x"), Err(IntervalError::InvalidSyntax(_))));
}

#[test]
fn rejects_zero_count() {
    assert!(matches!(parse_interval("0m"), Err(IntervalError::InvalidCount(_))));
}

#[test]
fn rejects_non_numeric_count() {
    assert!(matches!(parse_interval("xm"), Err(IntervalError::InvalidCount(_))));
}

#[test]
fn freq_delay_without_slash_defaults_delay_to_freq() {
    assert_eq!(parse_freq_delay("1h"), Ok((HOUR, HOUR)));
}

#[test]
fn freq_delay_with_slash_parses_both_sides() {
    assert_eq!(parse_freq_delay("1h/10m"), Ok((HOUR, 10 * MINUTE)));
}

#[test]
fn freq_delay_propagates_either_side_error() {
    assert!(parse_freq_delay("1h/0m").is_err());
    assert!(parse_freq_delay("0h/10m").is_err());
}
