//! The Umm al-Qura year table.
//!
//! Umm al-Qura month lengths follow an officially published table, not a
//! formula, so every conversion is driven by this data. A table is an ordered
//! list of years, each carrying a 12-bit month-length mask and the Gregorian
//! date of its first day, followed by a sentinel date one day past the last
//! supported day.
//!
//! Tables are validated once when built. The embedded tables are built lazily
//! on first use and shared read-only for the life of the process.

mod data;

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{CalendarError, Field, TableError};
use crate::options::TableVariant;

/// Days in a Hijri year with six long months.
pub const DAYS_IN_SHORT_YEAR: u32 = 354;
/// Days in a Hijri year with seven long months.
pub const DAYS_IN_LONG_YEAR: u32 = 355;

const SHORT_MONTH_DAYS: u32 = 29;
const LONG_MONTH_DAYS: u32 = 30;

/// Month lengths of one Hijri year, one flag per month.
///
/// Bit 0 is Muharram, bit 11 is Dhu al-Hijjah. A set bit means the month has
/// 30 days, a clear bit 29 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonthLengths(u16);

impl MonthLengths {
    const MASK: u16 = 0x0FFF;

    /// Builds the flags from one entry per month, `true` meaning 30 days.
    pub fn from_months(long_months: [bool; 12]) -> Self {
        let bits = long_months
            .iter()
            .enumerate()
            .filter(|(_, long)| **long)
            .fold(0u16, |bits, (month, _)| bits | (1 << month));
        MonthLengths(bits)
    }

    /// Builds the flags from a raw mask. Returns `None` if bits above the
    /// twelfth are set.
    pub fn from_bits(bits: u16) -> Option<Self> {
        (bits & !Self::MASK == 0).then_some(MonthLengths(bits))
    }

    /// The raw 12-bit mask.
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Whether `month` (1-12) has 30 days. Months outside 1-12 are never long.
    pub fn is_long_month(&self, month: u32) -> bool {
        (1..=12).contains(&month) && self.0 & (1 << (month - 1)) != 0
    }

    /// The number of days in `month` (1-12).
    pub fn days_in_month(&self, month: u32) -> u32 {
        if self.is_long_month(month) {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// Days in the months preceding `month` (1-13; 13 gives the whole year).
    pub fn days_before_month(&self, month: u32) -> u32 {
        let preceding = month.clamp(1, 13) - 1;
        let long_months = self.0 & ((1u16 << preceding) - 1);
        SHORT_MONTH_DAYS * preceding + long_months.count_ones()
    }

    /// The number of days in the year.
    pub fn days_in_year(&self) -> u32 {
        self.days_before_month(13)
    }
}

/// One row of literal table data: the month-length mask and the Gregorian
/// date (month 1-12) of the year's first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedYear {
    pub month_lengths: u16,
    pub gregorian_year: i32,
    pub gregorian_month: u32,
    pub gregorian_day: u32,
}

impl PackedYear {
    pub const fn new(
        month_lengths: u16,
        gregorian_year: i32,
        gregorian_month: u32,
        gregorian_day: u32,
    ) -> Self {
        PackedYear {
            month_lengths,
            gregorian_year,
            gregorian_month,
            gregorian_day,
        }
    }
}

/// A validated Hijri year: its month lengths and the date of 1 Muharram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarYearRecord {
    month_lengths: MonthLengths,
    epoch: NaiveDate,
}

impl CalendarYearRecord {
    pub fn month_lengths(&self) -> MonthLengths {
        self.month_lengths
    }

    /// The Gregorian date of the first day of this year.
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }
}

/// An ordered, validated Umm al-Qura year table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    first_year: i32,
    years: Vec<CalendarYearRecord>,
    /// One day past the last supported day.
    end: NaiveDate,
}

impl CalendarTable {
    /// Builds a table whose first row is Hijri year `first_year`.
    ///
    /// The last row is the sentinel: only its date is used. Every other row
    /// must total 354 or 355 days, and each row's date must follow the
    /// previous one by exactly that many days.
    pub fn new(first_year: i32, rows: &[PackedYear]) -> Result<Self, TableError> {
        if rows.len() < 2 {
            return Err(TableError::TooShort { rows: rows.len() });
        }
        // Hijri years start at 1, and the last row's year must still fit
        let row_count =
            i32::try_from(rows.len()).map_err(|_| TableError::TooShort { rows: rows.len() })?;
        if first_year < 1 || first_year.checked_add(row_count).is_none() {
            return Err(TableError::InvalidFirstYear(first_year));
        }

        let mut years = Vec::with_capacity(rows.len() - 1);
        let mut previous: Option<CalendarYearRecord> = None;

        for (year, row) in (first_year..).zip(rows) {
            let epoch = NaiveDate::from_ymd_opt(
                row.gregorian_year,
                row.gregorian_month,
                row.gregorian_day,
            )
            .ok_or(TableError::InvalidEpoch {
                year,
                gregorian_year: row.gregorian_year,
                gregorian_month: row.gregorian_month,
                gregorian_day: row.gregorian_day,
            })?;

            if let Some(prev) = previous {
                let expected = prev.month_lengths.days_in_year();
                let actual = (epoch - prev.epoch).num_days();
                if actual != i64::from(expected) {
                    return Err(TableError::EpochMismatch {
                        year,
                        expected,
                        actual,
                    });
                }
            }

            // The sentinel row only marks the end of the range
            if years.len() == rows.len() - 1 {
                return Ok(CalendarTable {
                    first_year,
                    years,
                    end: epoch,
                });
            }

            let month_lengths = MonthLengths::from_bits(row.month_lengths).ok_or(
                TableError::InvalidMask {
                    year,
                    bits: row.month_lengths,
                },
            )?;
            let days = month_lengths.days_in_year();
            if days != DAYS_IN_SHORT_YEAR && days != DAYS_IN_LONG_YEAR {
                return Err(TableError::InvalidYearLength { year, days });
            }

            let record = CalendarYearRecord {
                month_lengths,
                epoch,
            };
            years.push(record);
            previous = Some(record);
        }

        Err(TableError::TooShort { rows: rows.len() })
    }

    /// Returns one of the embedded tables, building and validating it on
    /// first use.
    ///
    /// # Panics
    /// Panics if the embedded data is corrupt. That is a defect in this crate,
    /// never a condition callers can recover from.
    pub fn builtin(variant: TableVariant) -> &'static CalendarTable {
        static UMM_AL_QURA: OnceLock<CalendarTable> = OnceLock::new();
        static LEGACY: OnceLock<CalendarTable> = OnceLock::new();

        let (cell, rows): (&OnceLock<CalendarTable>, &[PackedYear]) = match variant {
            TableVariant::UmmAlQura => (&UMM_AL_QURA, &data::UMM_AL_QURA),
            TableVariant::Legacy => (&LEGACY, &data::LEGACY),
        };

        cell.get_or_init(|| {
            let table = CalendarTable::new(variant.first_year(), rows).unwrap_or_else(|err| {
                panic!("embedded {variant:?} calendar table is corrupt: {err}")
            });
            tracing::debug!(
                "validated {:?} calendar table: {}..={}",
                variant,
                table.min_year(),
                table.max_year()
            );
            table
        })
    }

    /// The first supported Hijri year.
    pub fn min_year(&self) -> i32 {
        self.first_year
    }

    /// The last supported Hijri year.
    pub fn max_year(&self) -> i32 {
        // new() checked that first_year + rows fits in an i32
        self.first_year + self.years.len() as i32 - 1
    }

    /// The first supported instant: 1 Muharram of the first year at midnight.
    pub fn min_instant(&self) -> NaiveDateTime {
        self.years[0].epoch.and_time(NaiveTime::MIN)
    }

    /// The last supported instant: the last day of the last year at
    /// 23:59:59.999.
    pub fn max_instant(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN) - TimeDelta::milliseconds(1)
    }

    /// The number of supported years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always false; a table holds at least one year.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Iterates over `(hijri_year, record)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &CalendarYearRecord)> + '_ {
        (self.first_year..).zip(self.years.iter())
    }

    /// Looks up the record for a Hijri year.
    pub fn year(&self, year: i32) -> Result<&CalendarYearRecord, CalendarError> {
        self.check_year(year)?;
        Ok(&self.years[(year - self.first_year) as usize])
    }

    /// Fails with a range error unless `year` is supported.
    pub fn check_year(&self, year: i32) -> Result<(), CalendarError> {
        if year < self.min_year() || year > self.max_year() {
            return Err(CalendarError::out_of_range(
                Field::Year,
                year,
                i64::from(self.min_year()),
                i64::from(self.max_year()),
            ));
        }
        Ok(())
    }

    /// Fails with a range error unless `instant` is within
    /// `[min_instant, max_instant]`.
    pub fn check_instant(&self, instant: NaiveDateTime) -> Result<(), CalendarError> {
        let (min, max) = (self.min_instant(), self.max_instant());
        if instant < min || instant > max {
            return Err(CalendarError::InstantOutOfRange { instant, min, max });
        }
        Ok(())
    }

    /// The record at a zero-based index.
    pub(crate) fn record_at(&self, index: usize) -> Option<&CalendarYearRecord> {
        self.years.get(index)
    }

    /// The first day of the year at `index`; `index == len()` is the sentinel.
    pub(crate) fn epoch_at(&self, index: usize) -> Option<NaiveDate> {
        match self.years.get(index) {
            Some(record) => Some(record.epoch),
            None if index == self.years.len() => Some(self.end),
            None => None,
        }
    }
}
