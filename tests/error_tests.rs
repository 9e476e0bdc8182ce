use chrono::NaiveDate;
use ummalqura::{
    Calendar, CalendarError, CalendarTable, ErrorKind, Field, FormatError, LocaleError,
    PackedYear, ParseError, TableError, Unit,
};

#[test]
fn test_out_of_range_display() {
    let err = Calendar::default().to_date(1440, 13, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for month: 13 (must be between 1 and 12)"
    );
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_year_out_of_range_names_bounds() {
    let err = Calendar::default().hijri_to_gregorian(1275, 12, 1).unwrap_err();
    assert_eq!(
        err,
        CalendarError::OutOfRange {
            field: Field::Year,
            value: 1275,
            min: 1276,
            max: 1500
        }
    );
    assert!(err.to_string().contains("between 1276 and 1500"));
}

#[test]
fn test_instant_out_of_range_display() {
    let instant = NaiveDate::from_ymd_opt(1850, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let err = Calendar::default().gregorian_to_hijri(instant).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("1850-01-01"));
    assert!(msg.contains("1859-07-30"));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_invalid_unit_display() {
    let err = "decade".parse::<Unit>().unwrap_err();
    assert_eq!(err.to_string(), "invalid value for unit: 'decade'");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_unsupported_unit_display() {
    let cal = Calendar::default();
    let instant = NaiveDate::from_ymd_opt(2019, 7, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let err = cal.end_of(instant, Unit::Millisecond).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unit 'millisecond' is not supported by end_of"
    );
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_overflow_is_a_range_error() {
    let cal = Calendar::default();
    let instant = NaiveDate::from_ymd_opt(2019, 7, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let err = cal.add_years(instant, i64::MAX).unwrap_err();
    assert!(matches!(err, CalendarError::Overflow { unit: Unit::Year, .. }));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_invariant_violation_kind() {
    let err = CalendarError::InvariantViolation("year 1440 has 356 days".to_string());
    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert!(err.to_string().contains("356 days"));
}

#[test]
fn test_table_error_display() {
    let rows = [
        PackedYear::new(0x12BA, 2018, 9, 11),
        PackedYear::new(0x0000, 2019, 8, 31),
    ];
    let err = CalendarTable::new(1440, &rows).unwrap_err();
    assert_eq!(
        err.to_string(),
        "month-length mask 0x12ba for year 1440 uses more than 12 bits"
    );

    let err = TableError::EpochMismatch {
        year: 1441,
        expected: 354,
        actual: 353,
    };
    assert_eq!(
        err.to_string(),
        "year 1441 starts 353 day(s) after a previous year of 354 days"
    );
}

#[test]
fn test_format_error_is_transparent() {
    let parse = ParseError::UnterminatedQuote {
        position: 2,
        quote: '"',
    };
    assert_eq!(parse.to_string(), "unterminated quote \" at position 2");
    let err: FormatError = parse.clone().into();
    assert_eq!(err.to_string(), parse.to_string());
}

#[test]
fn test_locale_error_display() {
    assert_eq!(
        LocaleError::AlreadyRegistered("ar".to_string()).to_string(),
        "a locale with the same name 'ar' is already registered"
    );
    assert!(LocaleError::EmptyName.to_string().contains("must not be empty"));
}
