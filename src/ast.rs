//! AST types for parsed format masks.

use crate::error::ParseError;

/// Short (`ddd`, `MMM`) or full (`dddd`, `MMMM`) names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    Short,
    Full,
}

/// A number printed as-is or zero-padded to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    None,
    Two,
}

/// A numeric field of the instant or its Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Day,
    Month,
    /// Hour on a 12-hour clock, 1-12
    Hour12,
    Hour,
    Minute,
    Second,
}

/// The four AM/PM marker forms; each selects a pair of locale time names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeMarker {
    /// `t`: `a` / `p` in English
    LowerShort,
    /// `tt`: `am` / `pm`
    Lower,
    /// `T`: `A` / `P`
    UpperShort,
    /// `TT`: `AM` / `PM`
    Upper,
}

impl TimeMarker {
    /// Index of the morning name in a locale's eight time names; the evening
    /// name follows it.
    pub fn index(&self) -> usize {
        match self {
            TimeMarker::LowerShort => 0,
            TimeMarker::Lower => 2,
            TimeMarker::UpperShort => 4,
            TimeMarker::Upper => 6,
        }
    }
}

/// A part of a format mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaskPart {
    /// Text copied to the output
    Literal(String),
    Numeric(NumericField, Padding),
    /// Weekday name from the Gregorian weekday
    DayName(NameStyle),
    /// Hijri month name
    MonthName(NameStyle),
    /// Last two digits of the Hijri year
    YearShort,
    Year,
    /// Milliseconds, three digits
    Millisecond,
    /// Hundredths of a second, two digits
    Centisecond,
    TimeMarker(TimeMarker),
    /// Locale ordinal for the Hijri day
    Ordinal,
    WeekOfYear,
    DayOfWeek,
}

/// A parsed format mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Mask {
    parts: Vec<MaskPart>,
}

impl Mask {
    /// Parses a mask string. Adjacent literal text is merged into one part.
    pub fn parse(mask: &str) -> Result<Self, ParseError> {
        crate::parser::parse(mask)
    }

    pub(crate) fn from_parts(parts: Vec<MaskPart>) -> Self {
        Mask { parts }
    }

    pub fn parts(&self) -> &[MaskPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl std::str::FromStr for Mask {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mask::parse(s)
    }
}
