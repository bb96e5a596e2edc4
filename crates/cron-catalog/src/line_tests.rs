use super::*;

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert!(parse_line(false, "").unwrap().is_none());
    assert!(parse_line(false, "   ").unwrap().is_none());
    assert!(parse_line(false, "# a comment").unwrap().is_none());
}

#[test]
fn parses_plain_five_field_line() {
    let parsed = parse_line(false, "0 3 * * * /usr/bin/backup").unwrap().unwrap();
    assert_eq!(parsed.command, "/usr/bin/backup");
    assert!(matches!(parsed.schedule, Schedule::Fields { .. }));
}

#[test]
fn parses_attributes_before_schedule() {
    let parsed = parse_line(false, "ID=sync AFTER=prep,stage FREQ=30m @noauto /bin/sync")
        .unwrap()
        .unwrap();
    assert_eq!(parsed.id.as_deref(), Some("sync"));
    assert_eq!(
        parsed.after,
        vec![
            AfterRef { id: "prep".to_string(), max_wait: 0 },
            AfterRef { id: "stage".to_string(), max_wait: 0 },
        ]
    );
    assert_eq!(parsed.freq_override, Some((30 * 60, 30 * 60)));
    assert!(matches!(parsed.schedule, Schedule::NoAuto));
}

#[test]
fn after_with_a_max_wait_suffix_is_parsed_per_id() {
    let parsed = parse_line(false, "ID=sync AFTER=prep/30m,other @noauto /bin/sync")
        .unwrap()
        .unwrap();
    assert_eq!(
        parsed.after,
        vec![
            AfterRef { id: "prep".to_string(), max_wait: 30 * 60 },
            AfterRef { id: "other".to_string(), max_wait: 0 },
        ]
    );
}

#[test]
fn freq_with_explicit_delay_overrides_the_default() {
    let parsed = parse_line(false, "ID=sync FREQ=1h/10m @noauto /bin/sync").unwrap().unwrap();
    assert_eq!(parsed.freq_override, Some((HOURLY, 10 * 60)));
}

#[test]
fn monthly_is_thirty_days_not_yearly() {
    let parsed = parse_line(false, "ID=sync @monthly /bin/true").unwrap().unwrap();
    assert!(matches!(parsed.schedule, Schedule::Period(p, _) if p == MONTHLY));
    assert_ne!(MONTHLY, YEARLY);
}

#[test]
fn keyword_period_gets_a_computed_default_delay() {
    let parsed = parse_line(false, "ID=sync @hourly /bin/true").unwrap().unwrap();
    match parsed.schedule {
        Schedule::Period(period, delay) => {
            assert_eq!(period, HOURLY);
            assert_eq!(delay, default_delay(HOURLY));
        }
        other => panic!("expected Period, got {other:?}"),
    }
}

#[test]
fn period_entry_without_id_is_rejected() {
    assert!(parse_line(false, "@hourly /bin/true").is_err());
    assert!(parse_line(false, "FREQ=30m 0 3 * * * /bin/true").is_err());
}

#[test]
fn system_spool_line_requires_user_column() {
    let parsed = parse_line(true, "0 3 * * * root /usr/bin/backup").unwrap().unwrap();
    assert_eq!(parsed.run_as.as_deref(), Some("root"));
    assert_eq!(parsed.command, "/usr/bin/backup");
}

#[test]
fn rejects_unknown_keyword() {
    assert!(parse_line(false, "@fortnightly /bin/true").is_err());
}

#[test]
fn rejects_missing_command() {
    assert!(parse_line(false, "0 3 * * *").is_err());
}
