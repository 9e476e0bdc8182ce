//! The `Calendar` context: a table plus an optional locale.
//!
//! Every operation is also available as a free function taking the table
//! explicitly; `Calendar` saves passing it around.

use chrono::{NaiveDate, NaiveDateTime};

use crate::arith;
use crate::compare::{self, Inclusivity};
use crate::error::{CalendarError, FormatError};
use crate::formatter::{self, HijriFields};
use crate::gregorian;
use crate::hijri::{self, HijriDate};
use crate::locale::{default_locale, lookup_locale, Locale};
use crate::options::CalendarOptions;
use crate::period::{self, Week};
use crate::query;
use crate::table::CalendarTable;
use crate::units::Unit;

/// Hijri calendar operations over one table.
#[derive(Debug, Clone)]
pub struct Calendar<'t> {
    table: &'t CalendarTable,
    locale: Option<String>,
}

impl Default for Calendar<'static> {
    fn default() -> Self {
        Calendar::new(CalendarOptions::default())
    }
}

impl Calendar<'static> {
    /// Builds a calendar over one of the embedded tables.
    pub fn new(options: CalendarOptions) -> Self {
        Calendar {
            table: options.variant.table(),
            locale: options.locale,
        }
    }
}

impl<'t> Calendar<'t> {
    /// Builds a calendar over a caller-supplied table.
    pub fn with_table(table: &'t CalendarTable) -> Self {
        Calendar {
            table,
            locale: None,
        }
    }

    /// Sets the locale used by [`format`](Self::format).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn table(&self) -> &'t CalendarTable {
        self.table
    }

    /// The locale `format` uses: this calendar's own, or the process-wide
    /// default.
    pub fn locale(&self) -> Locale {
        match &self.locale {
            Some(name) => lookup_locale(name),
            None => default_locale(),
        }
    }

    pub fn min_year(&self) -> i32 {
        self.table.min_year()
    }

    pub fn max_year(&self) -> i32 {
        self.table.max_year()
    }

    pub fn min_instant(&self) -> NaiveDateTime {
        self.table.min_instant()
    }

    pub fn max_instant(&self) -> NaiveDateTime {
        self.table.max_instant()
    }

    // Conversion

    pub fn hijri_to_gregorian(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<NaiveDateTime, CalendarError> {
        hijri::hijri_to_gregorian(self.table, year, month, day)
    }

    pub fn gregorian_to_hijri(&self, instant: NaiveDateTime) -> Result<HijriDate, CalendarError> {
        hijri::gregorian_to_hijri(self.table, instant)
    }

    pub fn to_date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDateTime, CalendarError> {
        hijri::to_date(self.table, year, month, day)
    }

    pub fn to_date_time(
        &self,
        date: HijriDate,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<NaiveDateTime, CalendarError> {
        hijri::to_date_time(self.table, date, hour, minute, second, millisecond)
    }

    // Arithmetic

    pub fn add_years(
        &self,
        instant: NaiveDateTime,
        count: i64,
    ) -> Result<NaiveDateTime, CalendarError> {
        arith::add_years(self.table, instant, count)
    }

    pub fn add_months(
        &self,
        instant: NaiveDateTime,
        count: i64,
    ) -> Result<NaiveDateTime, CalendarError> {
        arith::add_months(self.table, instant, count)
    }

    pub fn add_weeks(
        &self,
        instant: NaiveDateTime,
        count: i64,
    ) -> Result<NaiveDateTime, CalendarError> {
        gregorian::add_weeks(instant, count)
    }

    pub fn add_days(
        &self,
        instant: NaiveDateTime,
        count: i64,
    ) -> Result<NaiveDateTime, CalendarError> {
        gregorian::add_days(instant, count)
    }

    pub fn add_time(
        &self,
        instant: NaiveDateTime,
        value: i64,
        unit: Unit,
    ) -> Result<NaiveDateTime, CalendarError> {
        gregorian::add_time(instant, value, unit)
    }

    pub fn add(
        &self,
        instant: NaiveDateTime,
        value: i64,
        unit: Unit,
    ) -> Result<NaiveDateTime, CalendarError> {
        arith::add(self.table, instant, value, unit)
    }

    pub fn subtract(
        &self,
        instant: NaiveDateTime,
        value: i64,
        unit: Unit,
    ) -> Result<NaiveDateTime, CalendarError> {
        arith::subtract(self.table, instant, value, unit)
    }

    // Queries

    pub fn year(&self, instant: NaiveDateTime) -> Result<i32, CalendarError> {
        query::year(self.table, instant)
    }

    pub fn month(&self, instant: NaiveDateTime) -> Result<u32, CalendarError> {
        query::month(self.table, instant)
    }

    pub fn day_of_month(&self, instant: NaiveDateTime) -> Result<u32, CalendarError> {
        query::day_of_month(self.table, instant)
    }

    pub fn day_of_year(&self, instant: NaiveDateTime) -> Result<u32, CalendarError> {
        query::day_of_year(self.table, instant)
    }

    /// Day of week, 0 = Sunday. Needs no table, so it never fails.
    pub fn day_of_week(&self, instant: NaiveDateTime) -> u32 {
        gregorian::day_of_week(instant)
    }

    pub fn week_of_year(&self, instant: NaiveDateTime) -> Result<u32, CalendarError> {
        query::week_of_year(self.table, instant)
    }

    pub fn days_in_year(&self, year: i32) -> Result<u32, CalendarError> {
        query::days_in_year(self.table, year)
    }

    pub fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        query::days_in_month(self.table, year, month)
    }

    pub fn is_leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        query::is_leap_year(self.table, year)
    }

    // Periods

    pub fn start_of(
        &self,
        instant: NaiveDateTime,
        unit: Unit,
    ) -> Result<NaiveDateTime, CalendarError> {
        period::start_of(self.table, instant, unit)
    }

    pub fn end_of(
        &self,
        instant: NaiveDateTime,
        unit: Unit,
    ) -> Result<NaiveDateTime, CalendarError> {
        period::end_of(self.table, instant, unit)
    }

    pub fn month_array(&self, instant: NaiveDateTime) -> Result<Vec<Week>, CalendarError> {
        period::month_array(self.table, instant)
    }

    // Comparisons

    pub fn is_before(
        &self,
        a: NaiveDateTime,
        b: NaiveDateTime,
        unit: Unit,
    ) -> Result<bool, CalendarError> {
        compare::is_before(self.table, a, b, unit)
    }

    pub fn is_after(
        &self,
        a: NaiveDateTime,
        b: NaiveDateTime,
        unit: Unit,
    ) -> Result<bool, CalendarError> {
        compare::is_after(self.table, a, b, unit)
    }

    pub fn is_same(
        &self,
        a: NaiveDateTime,
        b: NaiveDateTime,
        unit: Unit,
    ) -> Result<bool, CalendarError> {
        compare::is_same(self.table, a, b, unit)
    }

    pub fn is_same_or_before(
        &self,
        a: NaiveDateTime,
        b: NaiveDateTime,
        unit: Unit,
    ) -> Result<bool, CalendarError> {
        compare::is_same_or_before(self.table, a, b, unit)
    }

    pub fn is_same_or_after(
        &self,
        a: NaiveDateTime,
        b: NaiveDateTime,
        unit: Unit,
    ) -> Result<bool, CalendarError> {
        compare::is_same_or_after(self.table, a, b, unit)
    }

    pub fn is_between(
        &self,
        instant: NaiveDateTime,
        from: NaiveDateTime,
        to: NaiveDateTime,
        unit: Unit,
        inclusivity: Inclusivity,
    ) -> Result<bool, CalendarError> {
        compare::is_between(self.table, instant, from, to, unit, inclusivity)
    }

    // Formatting

    /// The Hijri fields a mask can print for `instant`.
    pub fn fields(&self, instant: NaiveDateTime) -> Result<HijriFields, CalendarError> {
        Ok(HijriFields {
            date: self.gregorian_to_hijri(instant)?,
            week_of_year: self.week_of_year(instant)?,
            day_of_week: self.day_of_week(instant),
        })
    }

    /// Formats `instant` with a mask or mask name in this calendar's locale.
    pub fn format(&self, instant: NaiveDateTime, mask: &str) -> Result<String, FormatError> {
        self.format_with_locale(instant, mask, &self.locale())
    }

    /// Formats `instant` with a mask or mask name in the given locale.
    pub fn format_with_locale(
        &self,
        instant: NaiveDateTime,
        mask: &str,
        locale: &Locale,
    ) -> Result<String, FormatError> {
        let fields = self.fields(instant)?;
        formatter::format(instant, mask, locale, &fields)
    }

    /// Days of the Hijri month containing `instant`, without the grid.
    pub fn month_days(&self, instant: NaiveDateTime) -> Result<Vec<NaiveDate>, CalendarError> {
        Ok(self.month_array(instant)?.into_iter().flatten().flatten().collect())
    }
}
