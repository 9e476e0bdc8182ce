//! Error types for calendar operations, table construction and formatting.

use std::fmt;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::units::Unit;

/// A numeric field that can be out of its valid interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millisecond => "millisecond",
        };
        f.write_str(name)
    }
}

/// Broad classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric input or instant outside its valid interval.
    Range,
    /// An unrecognized or unsupported unit.
    InvalidArgument,
    /// Internal consistency failure; the table or the engine is broken.
    InvariantViolation,
}

/// Errors returned by conversion, arithmetic and query operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("invalid value for {field}: {value} (must be between {min} and {max})")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("instant {instant} out of range (must be between {min} and {max})")]
    InstantOutOfRange {
        instant: NaiveDateTime,
        min: NaiveDateTime,
        max: NaiveDateTime,
    },

    #[error("arithmetic overflow adding {value} {unit}(s) to {instant}")]
    Overflow {
        instant: NaiveDateTime,
        value: i64,
        unit: Unit,
    },

    #[error("invalid value for unit: '{0}'")]
    InvalidUnit(String),

    #[error("unit '{unit}' is not supported by {operation}")]
    UnsupportedUnit { unit: Unit, operation: &'static str },

    #[error("calendar invariant violated: {0}")]
    InvariantViolation(String),
}

impl CalendarError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::OutOfRange { .. }
            | CalendarError::InstantOutOfRange { .. }
            | CalendarError::Overflow { .. } => ErrorKind::Range,
            CalendarError::InvalidUnit(_) | CalendarError::UnsupportedUnit { .. } => {
                ErrorKind::InvalidArgument
            }
            CalendarError::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }

    pub(crate) fn out_of_range(field: Field, value: impl Into<i64>, min: i64, max: i64) -> Self {
        CalendarError::OutOfRange {
            field,
            value: value.into(),
            min,
            max,
        }
    }
}

/// Errors raised while building a [`CalendarTable`](crate::CalendarTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("calendar table needs at least one year and a sentinel row, got {rows} row(s)")]
    TooShort { rows: usize },

    #[error("invalid first year {0}")]
    InvalidFirstYear(i32),

    #[error("month-length mask {bits:#06x} for year {year} uses more than 12 bits")]
    InvalidMask { year: i32, bits: u16 },

    #[error("year {year} has {days} days (must be 354 or 355)")]
    InvalidYearLength { year: i32, days: u32 },

    #[error("year {year} starts on bad date {gregorian_year}-{gregorian_month}-{gregorian_day}")]
    InvalidEpoch {
        year: i32,
        gregorian_year: i32,
        gregorian_month: u32,
        gregorian_day: u32,
    },

    #[error("year {year} starts {actual} day(s) after a previous year of {expected} days")]
    EpochMismatch { year: i32, expected: u32, actual: i64 },
}

/// Errors that can occur when parsing a format mask.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated quote {quote} at position {position}")]
    UnterminatedQuote { position: usize, quote: char },
}

/// Errors that can occur when formatting an instant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised by the locale registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("the locale's name must not be empty")]
    EmptyName,

    #[error("a locale with the same name '{0}' is already registered")]
    AlreadyRegistered(String),
}
