//! ummalqura - Umm al-Qura Hijri calendar conversion, arithmetic and formatting
//!
//! This crate converts between Gregorian instants and the Umm al-Qura
//! calendar using the officially published month-length table, and provides
//! calendar arithmetic, period boundaries, month grids and localized
//! formatting on top of it.

pub mod ast;
pub mod error;
pub mod options;
pub mod units;

pub mod arith;
pub mod compare;
pub mod gregorian;
pub mod hijri;
pub mod period;
pub mod query;
pub mod table;

mod cache;
mod calendar;
pub mod formatter;
pub mod locale;
pub mod parser;

pub use ast::Mask;
pub use calendar::Calendar;
pub use compare::Inclusivity;
pub use error::{CalendarError, ErrorKind, Field, FormatError, LocaleError, ParseError, TableError};
pub use formatter::HijriFields;
pub use hijri::HijriDate;
pub use locale::{Locale, LocaleRegistry};
pub use options::{CalendarOptions, TableVariant};
pub use period::Week;
pub use table::{CalendarTable, CalendarYearRecord, MonthLengths, PackedYear};
pub use units::Unit;
