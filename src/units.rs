//! Units of time accepted by arithmetic, boundary and comparison operations.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A unit of time, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Unit; 8] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// The lower-case name used when parsing.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }

    /// Returns true if `self` is a strictly finer granularity than `other`.
    pub fn is_finer_than(&self, other: Unit) -> bool {
        *self > other
    }

    /// Returns true for hour, minute, second and millisecond.
    pub fn is_time_of_day(&self) -> bool {
        *self >= Unit::Hour
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| CalendarError::InvalidUnit(s.to_string()))
    }
}
