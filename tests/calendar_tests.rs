//! Arithmetic, period and comparison tests through the `Calendar` API.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use ummalqura::{Calendar, CalendarError, ErrorKind, HijriDate, Inclusivity, Unit};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_milli_opt(h, min, s, ms)
        .unwrap()
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0, 0, 0)
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_months_examples() {
    let cal = Calendar::default();
    let d = midnight(2019, 7, 3);
    assert_eq!(cal.add_months(d, 5).unwrap(), midnight(2019, 11, 27));
    assert_eq!(cal.add_months(d, -10).unwrap(), midnight(2018, 9, 10));
    assert_eq!(cal.add_years(d, 5).unwrap(), midnight(2024, 5, 8));
    assert_eq!(cal.add_months(midnight(2019, 7, 1), 1).unwrap(), midnight(2019, 7, 31));
}

#[test]
fn test_add_month_clamps_to_short_month() {
    let cal = Calendar::default();
    // Find every 30th of a long month followed by a short month in 1440-1442
    for year in 1440..=1442 {
        for month in 1..=11 {
            if cal.days_in_month(year, month).unwrap() == 30
                && cal.days_in_month(year, month + 1).unwrap() == 29
            {
                let thirtieth = cal.hijri_to_gregorian(year, month, 30).unwrap();
                let next = cal.add_months(thirtieth, 1).unwrap();
                assert_eq!(
                    cal.gregorian_to_hijri(next).unwrap(),
                    HijriDate::new(year, month + 1, 29)
                );
            }
        }
    }
}

#[test]
fn test_add_months_inverse_without_clamping() {
    let cal = Calendar::default();
    let start = at(1990, 1, 1, 6, 30, 0, 0);
    for n in -60..=60 {
        let there = cal.add_months(start, n).unwrap();
        let day = cal.day_of_month(there).unwrap();
        if day <= 29 {
            assert_eq!(cal.add_months(there, -n).unwrap(), start, "n = {}", n);
        }
        assert_eq!(there.time(), start.time());
    }
}

#[test]
fn test_add_and_subtract_by_unit() {
    let cal = Calendar::default();
    let d = at(2019, 7, 3, 23, 59, 59, 999);
    assert_eq!(cal.add(d, 1, Unit::Millisecond).unwrap(), midnight(2019, 7, 4));
    assert_eq!(cal.add(d, 1, Unit::Week).unwrap(), at(2019, 7, 10, 23, 59, 59, 999));
    assert_eq!(cal.subtract(d, 1, Unit::Day).unwrap(), at(2019, 7, 2, 23, 59, 59, 999));
    assert_eq!(cal.subtract(d, 24, Unit::Hour).unwrap(), cal.subtract(d, 1, Unit::Day).unwrap());
    assert_eq!(
        cal.subtract(d, 5, Unit::Month).unwrap(),
        cal.add_months(d, -5).unwrap()
    );
}

#[test]
fn test_units_parse_from_names() {
    let cal = Calendar::default();
    let d = midnight(2019, 7, 3);
    let unit: Unit = "month".parse().unwrap();
    assert_eq!(cal.add(d, 5, unit).unwrap(), midnight(2019, 11, 27));

    let err = "decade".parse::<Unit>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_add_months_out_of_table() {
    let cal = Calendar::default();
    let err = cal.add_months(cal.max_instant(), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(cal.add_months(midnight(2100, 1, 1), 1).is_err());
}

// ============================================================================
// Periods
// ============================================================================

#[test]
fn test_boundaries_contain_instant() {
    let cal = Calendar::default();
    let units = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];
    let samples = [
        at(2019, 7, 3, 13, 27, 41, 512),
        at(1900, 4, 30, 0, 0, 0, 0),
        at(1999, 12, 31, 23, 59, 59, 999),
        at(2077, 11, 16, 12, 0, 0, 0),
    ];
    for instant in samples {
        for unit in units {
            let start = cal.start_of(instant, unit).unwrap();
            let end = cal.end_of(instant, unit).unwrap();
            assert!(start <= instant && instant <= end, "{} {}", instant, unit);
            if !unit.is_time_of_day() {
                assert_eq!(start.time().num_seconds_from_midnight(), 0);
                assert_eq!(end.time(), at(2000, 1, 1, 23, 59, 59, 999).time());
            }
        }
    }
}

#[test]
fn test_start_and_end_of_hijri_month() {
    let cal = Calendar::default();
    let d = at(2019, 7, 3, 13, 27, 41, 512);
    assert_eq!(cal.start_of(d, Unit::Month).unwrap(), midnight(2019, 6, 4));
    assert_eq!(cal.end_of(d, Unit::Month).unwrap(), at(2019, 7, 3, 23, 59, 59, 999));
    assert_eq!(cal.start_of(d, Unit::Year).unwrap(), midnight(2018, 9, 11));
    assert_eq!(cal.end_of(d, Unit::Year).unwrap(), at(2019, 8, 30, 23, 59, 59, 999));
}

#[test]
fn test_start_of_hour_keeps_hour() {
    let cal = Calendar::default();
    let d = at(2019, 7, 3, 13, 27, 41, 512);
    let start = cal.start_of(d, Unit::Hour).unwrap();
    assert_eq!((start.hour(), start.minute(), start.second()), (13, 0, 0));
}

#[test]
fn test_month_grid_for_every_month() {
    let cal = Calendar::default();
    for year in cal.min_year()..=cal.max_year() {
        for month in 1..=12 {
            let first = cal.hijri_to_gregorian(year, month, 1).unwrap();
            let grid = cal.month_array(first).unwrap();
            assert!(grid.len() == 5 || grid.len() == 6, "{}-{}", year, month);

            let days: Vec<NaiveDate> = grid.iter().flatten().flatten().copied().collect();
            let expected = cal.days_in_month(year, month).unwrap() as usize;
            assert_eq!(days.len(), expected);
            assert_eq!(days[0], first.date());
            // Cells are consecutive and sit in their weekday column
            for (row, week) in grid.iter().enumerate() {
                for (col, cell) in week.iter().enumerate() {
                    if let Some(day) = cell {
                        let at_day = day.and_hms_opt(0, 0, 0).unwrap();
                        let dow = cal.day_of_week(at_day) as usize;
                        assert_eq!(dow, col, "{}-{} row {}", year, month, row);
                        assert_eq!(cal.month(at_day).unwrap(), month);
                    }
                }
            }
            // No week-row is empty
            assert!(grid.iter().all(|week| week.iter().any(Option::is_some)));
        }
    }
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_comparisons_by_hijri_month() {
    let cal = Calendar::default();
    let last_of_shawwal = at(2019, 7, 3, 20, 0, 0, 0);
    let first_of_dhul_qadah = midnight(2019, 7, 4);

    assert!(cal.is_before(last_of_shawwal, first_of_dhul_qadah, Unit::Month).unwrap());
    assert!(!cal.is_same(last_of_shawwal, first_of_dhul_qadah, Unit::Month).unwrap());
    assert!(cal.is_same(last_of_shawwal, first_of_dhul_qadah, Unit::Year).unwrap());
    assert!(cal.is_after(first_of_dhul_qadah, last_of_shawwal, Unit::Day).unwrap());
    assert!(cal
        .is_same_or_after(first_of_dhul_qadah, last_of_shawwal, Unit::Year)
        .unwrap());
    assert!(cal
        .is_between(
            midnight(2019, 6, 15),
            midnight(2019, 6, 4),
            last_of_shawwal,
            Unit::Month,
            Inclusivity::INCLUSIVE
        )
        .unwrap());
    assert!(!cal
        .is_between(
            midnight(2019, 6, 15),
            midnight(2019, 6, 4),
            last_of_shawwal,
            Unit::Month,
            Inclusivity::default()
        )
        .unwrap());
}

#[test]
fn test_comparison_outside_table_fails() {
    let cal = Calendar::default();
    let err = cal
        .is_before(midnight(1800, 1, 1), midnight(2019, 1, 1), Unit::Day)
        .unwrap_err();
    assert!(matches!(err, CalendarError::InstantOutOfRange { .. }));
}
