//! Locale descriptors used by the formatter.

mod builtin;
mod registry;

pub use registry::{
    default_locale, lookup_locale, register_locale, set_default_locale, LocaleRegistry,
};

/// The named masks every locale provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Masks {
    pub default: &'static str,
    pub short_date: &'static str,
    pub medium_date: &'static str,
    pub long_date: &'static str,
    pub full_date: &'static str,
    pub short_time: &'static str,
    pub medium_time: &'static str,
    pub long_time: &'static str,
}

impl Masks {
    /// Looks up a mask by its name (`default`, `shortDate`, ... `longTime`).
    pub fn get(&self, name: &str) -> Option<&'static str> {
        let mask = match name {
            "default" => self.default,
            "shortDate" => self.short_date,
            "mediumDate" => self.medium_date,
            "longDate" => self.long_date,
            "fullDate" => self.full_date,
            "shortTime" => self.short_time,
            "mediumTime" => self.medium_time,
            "longTime" => self.long_time,
            _ => return None,
        };
        Some(mask)
    }
}

/// Locale settings for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub name: &'static str,
    /// Whether text in this locale reads right to left.
    pub rtl: bool,
    /// Weekday names, Sunday first.
    pub day_names_short: [&'static str; 7],
    pub day_names: [&'static str; 7],
    /// Hijri month names, Muharram first.
    pub month_names_short: [&'static str; 12],
    pub month_names: [&'static str; 12],
    /// Morning/evening name pairs for `t`, `tt`, `T` and `TT`.
    pub time_names: [&'static str; 8],
    pub masks: Masks,
    /// Replacement glyphs for the ASCII digits 0-9, if any.
    pub digits: Option<[char; 10]>,
    /// Replacement for `,` in literal mask text.
    pub comma: char,
    /// Ordinal text for a Hijri day (1-30), printed by `S`.
    pub day_ordinal: fn(u32) -> String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

impl Locale {
    /// Rewrites the ASCII digits of `text` in this locale's numerals.
    pub fn localize_number(&self, text: &str) -> String {
        match &self.digits {
            None => text.to_string(),
            Some(digits) => text
                .chars()
                .map(|ch| match ch.to_digit(10) {
                    Some(d) => digits[d as usize],
                    _ => ch,
                })
                .collect(),
        }
    }

    /// Ordinal text for a Hijri day.
    pub fn localize_day_number(&self, day: u32) -> String {
        (self.day_ordinal)(day)
    }

    /// Replaces ASCII commas with this locale's comma.
    pub fn localize_commas(&self, text: &str) -> String {
        if self.comma == ',' {
            return text.to_string();
        }
        text.replace(',', self.comma.encode_utf8(&mut [0; 4]))
    }

    /// Resolves a named mask of this locale.
    pub fn mask(&self, name: &str) -> Option<&'static str> {
        self.masks.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_number() {
        assert_eq!(Locale::en().localize_number("1440"), "1440");
        assert_eq!(Locale::ar().localize_number("1440"), "١٤٤٠");
        assert_eq!(Locale::ar().localize_number("09:5"), "٠٩:٥");
    }

    #[test]
    fn test_localize_commas() {
        assert_eq!(Locale::en().localize_commas("ddd, mmm"), "ddd, mmm");
        assert_eq!(Locale::ar().localize_commas("ddd, mmm"), "ddd، mmm");
    }

    #[test]
    fn test_masks_lookup() {
        let en = Locale::en();
        assert_eq!(en.mask("shortDate"), Some("M/d/yy"));
        assert_eq!(en.mask("isoDate"), None);
        assert_eq!(en.mask("short_date"), None);
    }
}
