//! Calendar options and configuration.

use crate::table::CalendarTable;

/// Selects one of the embedded Umm al-Qura tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableVariant {
    /// Hijri 1276-1500 (Gregorian 1859-07-30 to 2077-11-16)
    #[default]
    UmmAlQura,
    /// Hijri 1318-1500 (Gregorian 1900-04-30 to 2077-11-16), the range of the
    /// first published table
    Legacy,
}

impl TableVariant {
    /// Returns the first Hijri year covered by this variant.
    pub fn first_year(&self) -> i32 {
        match self {
            TableVariant::UmmAlQura => 1276,
            TableVariant::Legacy => 1318,
        }
    }

    /// Returns the shared, validated table for this variant.
    pub fn table(&self) -> &'static CalendarTable {
        CalendarTable::builtin(*self)
    }
}

/// Options for building a [`Calendar`](crate::Calendar).
#[derive(Debug, Clone, Default)]
pub struct CalendarOptions {
    /// The embedded table to convert with.
    pub variant: TableVariant,
    /// The locale used by `format`. When `None`, the process-wide default
    /// locale is used at format time.
    pub locale: Option<String>,
}

impl CalendarOptions {
    pub fn with_variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
