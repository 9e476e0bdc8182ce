//! Field queries over Gregorian instants and Hijri years.

use chrono::NaiveDateTime;

use crate::error::CalendarError;
use crate::gregorian::{weekday_index, DAYS_PER_WEEK};
use crate::hijri::{check_month, gregorian_to_hijri, hijri_to_gregorian};
use crate::table::{CalendarTable, DAYS_IN_LONG_YEAR, DAYS_IN_SHORT_YEAR};

/// The number of days (29 or 30) in a Hijri month.
pub fn days_in_month(table: &CalendarTable, year: i32, month: u32) -> Result<u32, CalendarError> {
    let record = table.year(year)?;
    check_month(month)?;
    Ok(record.month_lengths().days_in_month(month))
}

/// The number of days (354 or 355) in a Hijri year.
pub fn days_in_year(table: &CalendarTable, year: i32) -> Result<u32, CalendarError> {
    let days = table.year(year)?.month_lengths().days_in_year();
    if days != DAYS_IN_SHORT_YEAR && days != DAYS_IN_LONG_YEAR {
        return Err(CalendarError::InvariantViolation(format!(
            "year {year} has {days} days"
        )));
    }
    Ok(days)
}

/// A leap year is one with 355 days.
pub fn is_leap_year(table: &CalendarTable, year: i32) -> Result<bool, CalendarError> {
    Ok(days_in_year(table, year)? == DAYS_IN_LONG_YEAR)
}

/// The Hijri year of an instant.
pub fn year(table: &CalendarTable, instant: NaiveDateTime) -> Result<i32, CalendarError> {
    Ok(gregorian_to_hijri(table, instant)?.year)
}

/// The Hijri month (1-12) of an instant.
pub fn month(table: &CalendarTable, instant: NaiveDateTime) -> Result<u32, CalendarError> {
    Ok(gregorian_to_hijri(table, instant)?.month)
}

/// The Hijri day of month (1-30) of an instant.
pub fn day_of_month(table: &CalendarTable, instant: NaiveDateTime) -> Result<u32, CalendarError> {
    Ok(gregorian_to_hijri(table, instant)?.day)
}

/// The 1-based day within the Hijri year.
pub fn day_of_year(table: &CalendarTable, instant: NaiveDateTime) -> Result<u32, CalendarError> {
    let date = gregorian_to_hijri(table, instant)?;
    let record = table.year(date.year)?;
    Ok(record.month_lengths().days_before_month(date.month) + date.day)
}

/// The 1-based week of the Hijri year, with weeks starting on Sunday.
///
/// Week 1 is the (possibly partial) week containing 1 Muharram. The date is
/// moved to the day of its week that shares 1 Muharram's weekday, and that
/// day's ordinal is rounded up to whole weeks. A trailing partial week whose
/// moved day falls in the next year is week 1 of that year.
pub fn week_of_year(table: &CalendarTable, instant: NaiveDateTime) -> Result<u32, CalendarError> {
    let date = gregorian_to_hijri(table, instant)?;
    let first = hijri_to_gregorian(table, date.year, 1, 1)?;
    let ordinal = table.year(date.year)?.month_lengths().days_before_month(date.month) + date.day;

    // The moved day is never before 1 Muharram, so this cannot underflow
    let lead = weekday_index(first.date());
    let shifted = ordinal + lead - weekday_index(instant.date());
    if shifted > days_in_year(table, date.year)? {
        return Ok(1);
    }
    Ok(shifted.div_ceil(DAYS_PER_WEEK as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TableVariant;
    use chrono::NaiveDate;

    fn table() -> &'static CalendarTable {
        TableVariant::UmmAlQura.table()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(table(), 1440).unwrap(), 354);
        assert_eq!(days_in_year(table(), 1441).unwrap(), 355);
        assert!(!is_leap_year(table(), 1440).unwrap());
        assert!(is_leap_year(table(), 1441).unwrap());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(table(), 1440, 9).unwrap(), 29);
        assert_eq!(days_in_month(table(), 1440, 10).unwrap(), 30);
        assert!(days_in_month(table(), 1440, 0).is_err());
        assert!(days_in_month(table(), 1440, 13).is_err());
        assert!(days_in_month(table(), 1501, 1).is_err());
    }

    #[test]
    fn test_fields_of_instant() {
        let d = midnight(2019, 7, 3);
        assert_eq!(year(table(), d).unwrap(), 1440);
        assert_eq!(month(table(), d).unwrap(), 10);
        assert_eq!(day_of_month(table(), d).unwrap(), 30);
        assert_eq!(day_of_year(table(), d).unwrap(), 296);
    }

    #[test]
    fn test_week_of_year() {
        assert_eq!(week_of_year(table(), midnight(2019, 7, 3)).unwrap(), 43);
        // 1 Muharram 1440 (a Tuesday) and the following Saturday share week 1
        assert_eq!(week_of_year(table(), midnight(2018, 9, 11)).unwrap(), 1);
        assert_eq!(week_of_year(table(), midnight(2018, 9, 15)).unwrap(), 1);
        assert_eq!(week_of_year(table(), midnight(2018, 9, 16)).unwrap(), 2);
    }

    #[test]
    fn test_week_spanning_new_year_is_week_one() {
        // 1441-12-29 (Wednesday) and 1442-01-01 (Thursday) share a week
        let last = midnight(2020, 8, 19);
        let next = midnight(2020, 8, 20);
        assert_eq!(year(table(), last).unwrap(), 1441);
        assert_eq!(year(table(), next).unwrap(), 1442);
        assert_eq!(week_of_year(table(), last).unwrap(), 1);
        assert_eq!(week_of_year(table(), next).unwrap(), 1);
        // The Sunday opening that week is still in 1441
        assert_eq!(week_of_year(table(), midnight(2020, 8, 16)).unwrap(), 1);
        assert_eq!(week_of_year(table(), midnight(2020, 8, 15)).unwrap(), 51);
    }

    #[test]
    fn test_queries_reject_out_of_range_instant() {
        assert!(day_of_year(table(), midnight(1800, 1, 1)).is_err());
        assert!(week_of_year(table(), midnight(2100, 1, 1)).is_err());
    }
}
