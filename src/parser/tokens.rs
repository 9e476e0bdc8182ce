//! Token types for the mask lexer.

/// A token in a format mask. Field tokens carry the length of their letter
/// run (`dd` is `Day(2)`).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    QuotedString(String),

    // Date fields
    Day(u8),   // d, dd, ddd, dddd
    Month(u8), // M, MM, MMM, MMMM
    Year(u8),  // yy, yyyy

    // Time fields
    Hour12(u8), // h, hh
    Hour24(u8), // H, HH
    Minute(u8), // m, mm
    Second(u8), // s, ss
    Millisecond, // l
    Centisecond, // L

    // Time markers
    MarkerLower(u8), // t, tt
    MarkerUpper(u8), // T, TT

    // Derived fields
    Ordinal,    // S
    WeekOfYear, // W
    DayOfWeek,  // N

    // End of input
    Eof,
}

/// A token with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
