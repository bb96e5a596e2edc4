use super::*;

#[yare::parameterized(
    wildcard_minute = { FieldKind::Minute, "*", 60 },
    single_minute = { FieldKind::Minute, "5", 60 },
    range_minute = { FieldKind::Minute, "0-10", 60 },
    step_minute = { FieldKind::Minute, "*/15", 60 },
    month_name = { FieldKind::Month, "jan,dec", 12 },
    weekday_name = { FieldKind::WeekDay, "mon-fri", 7 },
)]
fn parse_field_accepts_valid_syntax(kind: FieldKind, text: &str, expected_len: usize) {
    let (bitmap, _) = parse_field(kind, text).expect("should parse");
    assert_eq!(bitmap.len(), expected_len);
}

#[test]
fn wildcard_is_flagged() {
    let (_, is_wildcard) = parse_field(FieldKind::Hour, "*").unwrap();
    assert!(is_wildcard);
    let (_, is_wildcard) = parse_field(FieldKind::Hour, "0-23").unwrap();
    assert!(!is_wildcard);
}

#[test]
fn step_fills_expected_slots() {
    let (bitmap, _) = parse_field(FieldKind::Minute, "0-30/10").unwrap();
    assert!(bitmap[0] && bitmap[10] && bitmap[20] && bitmap[30]);
    assert!(!bitmap[5] && !bitmap[15]);
}

#[test]
fn comma_list_unions_items() {
    let (bitmap, _) = parse_field(FieldKind::Hour, "1,3,5").unwrap();
    assert!(bitmap[1] && bitmap[3] && bitmap[5]);
    assert!(!bitmap[2] && !bitmap[4]);
}

#[test]
fn weekday_seven_aliases_sunday() {
    let (bitmap, _) = parse_field(FieldKind::WeekDay, "7").unwrap();
    assert!(bitmap[0]);
}

#[test]
fn rejects_out_of_range_value() {
    assert_eq!(
        parse_field(FieldKind::Hour, "24"),
        Err(FieldError::OutOfRange { value: 24, min: 0, max: 23 })
    );
}

#[test]
fn rejects_backwards_range() {
    assert_eq!(
        parse_field(FieldKind::Minute, "30-10"),
        Err(FieldError::BackwardsRange(30, 10))
    );
}

#[test]
fn rejects_zero_step() {
    assert!(matches!(
        parse_field(FieldKind::Minute, "*/0"),
        Err(FieldError::InvalidStep(_))
    ));
}

#[test]
fn rejects_empty_field() {
    assert_eq!(parse_field(FieldKind::Minute, ""), Err(FieldError::Empty));
}

#[test]
fn rejects_unknown_name() {
    assert!(matches!(
        parse_field(FieldKind::Month, "frob"),
        Err(FieldError::InvalidToken(_))
    ));
}

proptest::proptest! {
    #[test]
    fn fill_never_panics_on_arbitrary_step_ranges(lo in 0u32..59, span in 0u32..59, step in 1u32..100) {
        let hi = (lo + span).min(59);
        let text = format!("{lo}-{hi}/{step}");
        let _ = parse_field(FieldKind::Minute, &text);
    }
}
