//! Calendar arithmetic.
//!
//! Years and months move through the Hijri calendar; weeks, days and time
//! units are plain Gregorian durations. All operations keep the time of day
//! unless they add a time unit.

use chrono::NaiveDateTime;

use crate::error::CalendarError;
use crate::gregorian::{add_days, add_time, add_weeks};
use crate::hijri::{gregorian_to_hijri, hijri_to_gregorian};
use crate::query::days_in_month;
use crate::table::CalendarTable;
use crate::units::Unit;

const MONTHS_PER_YEAR: i64 = 12;

/// Adds Hijri months.
///
/// A day past the 29th is clamped to the length of the target month, so
/// 30 Shawwal plus one month is 29 Dhu al-Qa'dah when that month is short.
pub fn add_months(
    table: &CalendarTable,
    instant: NaiveDateTime,
    count: i64,
) -> Result<NaiveDateTime, CalendarError> {
    let overflow = || CalendarError::Overflow {
        instant,
        value: count,
        unit: Unit::Month,
    };

    let date = gregorian_to_hijri(table, instant)?;
    let index = (i64::from(date.month) - 1)
        .checked_add(count)
        .ok_or_else(overflow)?;
    let year = i64::from(date.year)
        .checked_add(index.div_euclid(MONTHS_PER_YEAR))
        .and_then(|year| i32::try_from(year).ok())
        .ok_or_else(overflow)?;
    // rem_euclid is in 0..12
    let month = index.rem_euclid(MONTHS_PER_YEAR) as u32 + 1;

    let day = if date.day > 29 {
        date.day.min(days_in_month(table, year, month)?)
    } else {
        date.day
    };

    let start = hijri_to_gregorian(table, year, month, day)?;
    Ok(start.date().and_time(instant.time()))
}

/// Adds Hijri years, as twelve months each.
pub fn add_years(
    table: &CalendarTable,
    instant: NaiveDateTime,
    count: i64,
) -> Result<NaiveDateTime, CalendarError> {
    let months = count
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(CalendarError::Overflow {
            instant,
            value: count,
            unit: Unit::Year,
        })?;
    add_months(table, instant, months)
}

/// Adds `value` of any unit.
pub fn add(
    table: &CalendarTable,
    instant: NaiveDateTime,
    value: i64,
    unit: Unit,
) -> Result<NaiveDateTime, CalendarError> {
    match unit {
        Unit::Year => add_years(table, instant, value),
        Unit::Month => add_months(table, instant, value),
        Unit::Week => add_weeks(instant, value),
        Unit::Day => add_days(instant, value),
        Unit::Hour | Unit::Minute | Unit::Second | Unit::Millisecond => {
            add_time(instant, value, unit)
        }
    }
}

/// Subtracts `value` of any unit; the same as adding its negation.
pub fn subtract(
    table: &CalendarTable,
    instant: NaiveDateTime,
    value: i64,
    unit: Unit,
) -> Result<NaiveDateTime, CalendarError> {
    let negated = value.checked_neg().ok_or(CalendarError::Overflow {
        instant,
        value,
        unit,
    })?;
    add(table, instant, negated, unit)
}
