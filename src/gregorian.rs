//! Gregorian-side helpers over `chrono` instants.
//!
//! Instants are timezone-free wall-clock values (`NaiveDateTime`). Day
//! arithmetic keeps the time of day; time arithmetic carries into the date.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::{CalendarError, Field};
use crate::units::Unit;

pub(crate) const MILLIS_PER_SECOND: u32 = 1_000;
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Day of week with 0 = Sunday through 6 = Saturday.
pub fn day_of_week(instant: NaiveDateTime) -> u32 {
    weekday_index(instant.date())
}

pub(crate) fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// The millisecond component of a time (0-999).
pub(crate) fn millisecond(time: NaiveTime) -> u32 {
    // Leap seconds report nanoseconds past 1e9
    (time.nanosecond() / 1_000_000).min(MILLIS_PER_SECOND - 1)
}

/// Builds a time of day from validated components.
pub(crate) fn time_of_day(
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> Result<NaiveTime, CalendarError> {
    check_field(Field::Hour, hour, 23)?;
    check_field(Field::Minute, minute, 59)?;
    check_field(Field::Second, second, 59)?;
    check_field(Field::Millisecond, millisecond, MILLIS_PER_SECOND - 1)?;
    NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or_else(|| {
        CalendarError::InvariantViolation(format!(
            "{hour}:{minute}:{second}.{millisecond} rejected after validation"
        ))
    })
}

fn check_field(field: Field, value: u32, max: u32) -> Result<(), CalendarError> {
    if value > max {
        return Err(CalendarError::out_of_range(field, value, 0, i64::from(max)));
    }
    Ok(())
}

/// Shifts a date by whole days.
pub(crate) fn shift_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Adds whole days, keeping the time of day.
pub fn add_days(instant: NaiveDateTime, days: i64) -> Result<NaiveDateTime, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or(CalendarError::Overflow {
            instant,
            value: days,
            unit: Unit::Day,
        })
}

/// Adds whole weeks, keeping the time of day.
pub fn add_weeks(instant: NaiveDateTime, weeks: i64) -> Result<NaiveDateTime, CalendarError> {
    let days = weeks
        .checked_mul(DAYS_PER_WEEK)
        .ok_or(CalendarError::Overflow {
            instant,
            value: weeks,
            unit: Unit::Week,
        })?;
    add_days(instant, days)
}

/// Adds hours, minutes, seconds or milliseconds. Overflow past midnight
/// carries into the date.
pub fn add_time(
    instant: NaiveDateTime,
    value: i64,
    unit: Unit,
) -> Result<NaiveDateTime, CalendarError> {
    let delta = match unit {
        Unit::Hour => TimeDelta::try_hours(value),
        Unit::Minute => TimeDelta::try_minutes(value),
        Unit::Second => TimeDelta::try_seconds(value),
        Unit::Millisecond => TimeDelta::try_milliseconds(value),
        _ => {
            return Err(CalendarError::UnsupportedUnit {
                unit,
                operation: "add_time",
            })
        }
    };

    delta
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or(CalendarError::Overflow {
            instant,
            value,
            unit,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(h, min, s, ms)
            .unwrap()
    }

    #[test]
    fn test_day_of_week_sunday_first() {
        // 2019-07-03 was a Wednesday
        assert_eq!(day_of_week(at(2019, 7, 3, 0, 0, 0, 0)), 3);
        assert_eq!(day_of_week(at(2019, 6, 30, 0, 0, 0, 0)), 0);
        assert_eq!(day_of_week(at(2019, 7, 6, 0, 0, 0, 0)), 6);
    }

    #[test]
    fn test_add_time_carries_into_date() {
        let d = at(2019, 7, 3, 12, 30, 30, 500);
        assert_eq!(add_time(d, 13, Unit::Hour).unwrap(), at(2019, 7, 4, 1, 30, 30, 500));
        assert_eq!(add_time(d, 35, Unit::Minute).unwrap(), at(2019, 7, 3, 13, 5, 30, 500));
        assert_eq!(add_time(d, 35, Unit::Second).unwrap(), at(2019, 7, 3, 12, 31, 5, 500));
        assert_eq!(
            add_time(d, 600, Unit::Millisecond).unwrap(),
            at(2019, 7, 3, 12, 30, 31, 100)
        );
        assert_eq!(add_time(d, -13, Unit::Hour).unwrap(), at(2019, 7, 2, 23, 30, 30, 500));
    }

    #[test]
    fn test_add_time_rejects_date_units() {
        let d = at(2019, 7, 3, 0, 0, 0, 0);
        assert!(matches!(
            add_time(d, 1, Unit::Day),
            Err(CalendarError::UnsupportedUnit { unit: Unit::Day, .. })
        ));
    }

    #[test]
    fn test_add_days_overflow() {
        let d = at(2019, 7, 3, 0, 0, 0, 0);
        assert!(matches!(
            add_days(d, i64::MAX),
            Err(CalendarError::Overflow { .. })
        ));
    }

    #[test]
    fn test_time_of_day_validation() {
        assert!(time_of_day(23, 59, 59, 999).is_ok());
        assert_eq!(
            time_of_day(24, 0, 0, 0).unwrap_err(),
            CalendarError::OutOfRange {
                field: Field::Hour,
                value: 24,
                min: 0,
                max: 23
            }
        );
        assert!(time_of_day(0, 60, 0, 0).is_err());
        assert!(time_of_day(0, 0, 60, 0).is_err());
        assert!(time_of_day(0, 0, 0, 1000).is_err());
    }
}
