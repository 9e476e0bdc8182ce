//! Umm al-Qura (Hijri) date conversion.
//!
//! Both directions index the year table directly; there is no closed form.
//!
//! - Hijri to Gregorian: the year selects a record, and the lengths of the
//!   preceding months plus the day give a day offset from the record's epoch.
//! - Gregorian to Hijri: an estimated record index is refined by a forward
//!   scan, then the remaining day offset is walked month by month.

use std::fmt;

use chrono::{Days, NaiveDateTime, NaiveTime};

use crate::error::{CalendarError, Field};
use crate::gregorian::time_of_day;
use crate::table::{CalendarTable, DAYS_IN_LONG_YEAR};

/// The most days any Hijri month can have.
pub const MAX_DAYS_IN_MONTH: u32 = 30;

/// A Hijri calendar date.
///
/// Fields are ordered year, month, day, so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        HijriDate { year, month, day }
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<(i32, u32, u32)> for HijriDate {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        HijriDate::new(year, month, day)
    }
}

pub(crate) fn check_month(month: u32) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::out_of_range(Field::Month, month, 1, 12));
    }
    Ok(())
}

/// Convert a Hijri date to the Gregorian instant at midnight on that day.
///
/// The day is checked against 1-30 only; day 30 of a 29-day month lands on
/// the first day of the next month. Use [`to_date`] for strict validation.
pub fn hijri_to_gregorian(
    table: &CalendarTable,
    year: i32,
    month: u32,
    day: u32,
) -> Result<NaiveDateTime, CalendarError> {
    let record = table.year(year)?;
    check_month(month)?;
    if !(1..=MAX_DAYS_IN_MONTH).contains(&day) {
        return Err(CalendarError::out_of_range(
            Field::Day,
            day,
            1,
            i64::from(MAX_DAYS_IN_MONTH),
        ));
    }

    let offset = record.month_lengths().days_before_month(month) + day - 1;
    record
        .epoch()
        .checked_add_days(Days::new(u64::from(offset)))
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| {
            CalendarError::InvariantViolation(format!(
                "day offset {offset} from {} overflows",
                record.epoch()
            ))
        })
}

/// Convert a Gregorian instant to its Hijri date. The time of day is ignored.
pub fn gregorian_to_hijri(
    table: &CalendarTable,
    instant: NaiveDateTime,
) -> Result<HijriDate, CalendarError> {
    table.check_instant(instant)?;
    let date = instant.date();
    let min_date = table.min_instant().date();

    // No year is longer than 355 days, so this never lands past the target
    let elapsed = (date - min_date).num_days();
    let mut index = usize::try_from(elapsed / i64::from(DAYS_IN_LONG_YEAR)).map_err(|_| {
        CalendarError::InvariantViolation(format!("{date} precedes the table start {min_date}"))
    })?;

    // The sentinel epoch lies past max_instant, so the scan stops inside the table
    while table.epoch_at(index + 1).is_some_and(|next| date >= next) {
        index += 1;
    }

    let record = table.record_at(index).ok_or_else(|| {
        CalendarError::InvariantViolation(format!("no table record at index {index} for {date}"))
    })?;
    let mut offset = (date - record.epoch()).num_days();
    if offset < 0 {
        return Err(CalendarError::InvariantViolation(format!(
            "negative day offset {offset} from {} for {date}",
            record.epoch()
        )));
    }

    let lengths = record.month_lengths();
    let mut month = 1;
    while month < 12 && offset >= i64::from(lengths.days_in_month(month)) {
        offset -= i64::from(lengths.days_in_month(month));
        month += 1;
    }
    if offset >= i64::from(lengths.days_in_month(month)) {
        return Err(CalendarError::InvariantViolation(format!(
            "{date} falls past the end of its hijri year"
        )));
    }

    // index < table.len(), and max_year() fits in an i32
    let year = table.min_year() + index as i32;
    Ok(HijriDate::new(year, month, offset as u32 + 1))
}

/// Build the Gregorian instant for a Hijri date and time of day, validating
/// the day against the actual length of the month.
pub fn to_date_time(
    table: &CalendarTable,
    date: HijriDate,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> Result<NaiveDateTime, CalendarError> {
    let days = table.year(date.year).and_then(|record| {
        check_month(date.month)?;
        Ok(record.month_lengths().days_in_month(date.month))
    })?;
    if !(1..=days).contains(&date.day) {
        return Err(CalendarError::out_of_range(
            Field::Day,
            date.day,
            1,
            i64::from(days),
        ));
    }
    let time = time_of_day(hour, minute, second, millisecond)?;

    let start = hijri_to_gregorian(table, date.year, date.month, date.day)?;
    Ok(start.date().and_time(time))
}

/// Build the Gregorian instant at midnight of a Hijri date, validating the
/// day against the actual length of the month.
pub fn to_date(
    table: &CalendarTable,
    year: i32,
    month: u32,
    day: u32,
) -> Result<NaiveDateTime, CalendarError> {
    to_date_time(table, HijriDate::new(year, month, day), 0, 0, 0, 0)
}
