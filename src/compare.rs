//! Comparisons at a chosen granularity.
//!
//! With `Unit::Millisecond` instants compare directly. With a coarser unit,
//! `a` is before `b` when all of `a`'s unit lies before `b`, and the same as
//! `b` when `b` falls inside `a`'s unit.

use chrono::NaiveDateTime;

use crate::error::CalendarError;
use crate::period::{end_of, start_of};
use crate::table::CalendarTable;
use crate::units::Unit;

/// Which ends of an `is_between` interval are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inclusivity {
    pub from: bool,
    pub to: bool,
}

impl Inclusivity {
    pub const EXCLUSIVE: Inclusivity = Inclusivity {
        from: false,
        to: false,
    };
    pub const INCLUSIVE: Inclusivity = Inclusivity {
        from: true,
        to: true,
    };
}

/// Whether `a` lies before `b` at `unit` granularity.
pub fn is_before(
    table: &CalendarTable,
    a: NaiveDateTime,
    b: NaiveDateTime,
    unit: Unit,
) -> Result<bool, CalendarError> {
    if unit == Unit::Millisecond {
        return Ok(a < b);
    }
    Ok(end_of(table, a, unit)? < b)
}

/// Whether `a` lies after `b` at `unit` granularity.
pub fn is_after(
    table: &CalendarTable,
    a: NaiveDateTime,
    b: NaiveDateTime,
    unit: Unit,
) -> Result<bool, CalendarError> {
    if unit == Unit::Millisecond {
        return Ok(a > b);
    }
    Ok(b < start_of(table, a, unit)?)
}

/// Whether `a` and `b` fall in the same `unit`.
pub fn is_same(
    table: &CalendarTable,
    a: NaiveDateTime,
    b: NaiveDateTime,
    unit: Unit,
) -> Result<bool, CalendarError> {
    if unit == Unit::Millisecond {
        return Ok(a == b);
    }
    Ok(start_of(table, a, unit)? <= b && b <= end_of(table, a, unit)?)
}

pub fn is_same_or_before(
    table: &CalendarTable,
    a: NaiveDateTime,
    b: NaiveDateTime,
    unit: Unit,
) -> Result<bool, CalendarError> {
    Ok(is_same(table, a, b, unit)? || is_before(table, a, b, unit)?)
}

pub fn is_same_or_after(
    table: &CalendarTable,
    a: NaiveDateTime,
    b: NaiveDateTime,
    unit: Unit,
) -> Result<bool, CalendarError> {
    Ok(is_same(table, a, b, unit)? || is_after(table, a, b, unit)?)
}

/// Whether `instant` lies between `from` and `to` at `unit` granularity.
pub fn is_between(
    table: &CalendarTable,
    instant: NaiveDateTime,
    from: NaiveDateTime,
    to: NaiveDateTime,
    unit: Unit,
    inclusivity: Inclusivity,
) -> Result<bool, CalendarError> {
    let after_from = if inclusivity.from {
        !is_before(table, instant, from, unit)?
    } else {
        is_after(table, instant, from, unit)?
    };
    if !after_from {
        return Ok(false);
    }

    if inclusivity.to {
        Ok(!is_after(table, instant, to, unit)?)
    } else {
        is_before(table, instant, to, unit)
    }
}
