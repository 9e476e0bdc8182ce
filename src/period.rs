//! Unit boundaries and month grids.
//!
//! `start_of` and `end_of` first pick the boundary date for the unit, then
//! set every time field finer than the unit to its minimum or maximum. Fields
//! at or coarser than the unit are left alone, so the start of an hour keeps
//! its hour and the start of a day keeps its date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::CalendarError;
use crate::gregorian::{millisecond, shift_date, time_of_day, weekday_index, DAYS_PER_WEEK};
use crate::hijri::{gregorian_to_hijri, hijri_to_gregorian};
use crate::query::days_in_month;
use crate::table::CalendarTable;
use crate::units::Unit;

/// Time-of-day fields, coarsest first, with their largest values.
const TIME_FIELDS: [(Unit, u32); 4] = [
    (Unit::Hour, 23),
    (Unit::Minute, 59),
    (Unit::Second, 59),
    (Unit::Millisecond, 999),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Start,
    End,
}

/// One week-row of a month grid, Sunday first. Days outside the month are
/// `None`.
pub type Week = [Option<NaiveDate>; 7];

/// The first instant of the unit containing `instant`.
///
/// Weeks start on Sunday. `Unit::Millisecond` is rejected since it is the
/// finest unit an instant carries.
pub fn start_of(
    table: &CalendarTable,
    instant: NaiveDateTime,
    unit: Unit,
) -> Result<NaiveDateTime, CalendarError> {
    boundary(table, instant, unit, Boundary::Start, "start_of")
}

/// The last instant of the unit containing `instant`. Date units end at
/// 23:59:59.999.
pub fn end_of(
    table: &CalendarTable,
    instant: NaiveDateTime,
    unit: Unit,
) -> Result<NaiveDateTime, CalendarError> {
    boundary(table, instant, unit, Boundary::End, "end_of")
}

fn boundary(
    table: &CalendarTable,
    instant: NaiveDateTime,
    unit: Unit,
    side: Boundary,
    operation: &'static str,
) -> Result<NaiveDateTime, CalendarError> {
    if unit == Unit::Millisecond {
        return Err(CalendarError::UnsupportedUnit { unit, operation });
    }
    table.check_instant(instant)?;

    let date = boundary_date(table, instant, unit, side)?;
    let time = boundary_time(instant.time(), unit, side)?;
    Ok(date.and_time(time))
}

fn boundary_date(
    table: &CalendarTable,
    instant: NaiveDateTime,
    unit: Unit,
    side: Boundary,
) -> Result<NaiveDate, CalendarError> {
    let date = instant.date();
    match unit {
        Unit::Year => {
            let hijri = gregorian_to_hijri(table, instant)?;
            let (month, day) = match side {
                Boundary::Start => (1, 1),
                Boundary::End => (12, days_in_month(table, hijri.year, 12)?),
            };
            Ok(hijri_to_gregorian(table, hijri.year, month, day)?.date())
        }
        Unit::Month => {
            let hijri = gregorian_to_hijri(table, instant)?;
            let day = match side {
                Boundary::Start => 1,
                Boundary::End => days_in_month(table, hijri.year, hijri.month)?,
            };
            Ok(hijri_to_gregorian(table, hijri.year, hijri.month, day)?.date())
        }
        Unit::Week => week_boundary(date, side).ok_or(CalendarError::Overflow {
            instant,
            value: DAYS_PER_WEEK,
            unit: Unit::Week,
        }),
        Unit::Day | Unit::Hour | Unit::Minute | Unit::Second | Unit::Millisecond => Ok(date),
    }
}

fn week_boundary(date: NaiveDate, side: Boundary) -> Option<NaiveDate> {
    let weekday = i64::from(weekday_index(date));
    match side {
        Boundary::Start => shift_date(date, -weekday),
        Boundary::End => shift_date(date, DAYS_PER_WEEK - 1 - weekday),
    }
}

fn boundary_time(time: NaiveTime, unit: Unit, side: Boundary) -> Result<NaiveTime, CalendarError> {
    let mut parts = [time.hour(), time.minute(), time.second(), millisecond(time)];
    for (part, (field, max)) in parts.iter_mut().zip(TIME_FIELDS) {
        if field.is_finer_than(unit) {
            *part = match side {
                Boundary::Start => 0,
                Boundary::End => max,
            };
        }
    }
    let [hour, minute, second, milli] = parts;
    time_of_day(hour, minute, second, milli)
}

/// The calendar grid of the Hijri month containing `instant`.
///
/// Rows are whole Sunday-to-Saturday weeks from the week holding the 1st
/// through the week holding the last day, so a month spans 5 or 6 rows.
pub fn month_array(
    table: &CalendarTable,
    instant: NaiveDateTime,
) -> Result<Vec<Week>, CalendarError> {
    let first = start_of(table, instant, Unit::Month)?.date();
    let last = end_of(table, instant, Unit::Month)?.date();

    let overflow = CalendarError::Overflow {
        instant,
        value: DAYS_PER_WEEK,
        unit: Unit::Week,
    };
    let grid_start = week_boundary(first, Boundary::Start).ok_or_else(|| overflow.clone())?;
    let grid_end = week_boundary(last, Boundary::End).ok_or(overflow)?;
    let cells = (grid_end - grid_start).num_days() + 1;

    let days: Vec<Option<NaiveDate>> = grid_start
        .iter_days()
        .take(usize::try_from(cells).unwrap_or(0))
        .map(|day| (first..=last).contains(&day).then_some(day))
        .collect();

    if days.len() as i64 != cells || days.len() % 7 != 0 {
        return Err(CalendarError::InvariantViolation(format!(
            "month grid from {grid_start} to {grid_end} is not whole weeks"
        )));
    }

    Ok(days
        .chunks_exact(7)
        .map(|chunk| {
            let mut week: Week = [None; 7];
            week.copy_from_slice(chunk);
            week
        })
        .collect())
}
