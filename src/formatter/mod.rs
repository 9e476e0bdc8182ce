//! Mask resolution and formatting entry point

mod date;

pub use date::{format_mask, HijriFields};

use chrono::NaiveDateTime;

use crate::cache;
use crate::error::FormatError;
use crate::locale::Locale;

/// Named masks shared by every locale, checked after the locale's own.
pub const GLOBAL_MASKS: [(&str, &str); 4] = [
    ("isoDate", "yyyy-MM-dd"),
    ("isoTime", "HH:mm:ss"),
    ("isoDateTime", "yyyy-MM-dd'T'HH:mm:ss"),
    ("expiresHeaderFormat", "ddd, dd MMM yyyy HH:mm:ss"),
];

/// Resolves a mask argument to mask text.
///
/// An empty argument selects the locale's `default` mask. A locale mask
/// name wins over a global one; anything else is used as the mask itself.
pub fn resolve_mask<'a>(mask: &'a str, locale: &Locale) -> &'a str {
    if mask.is_empty() {
        return locale.masks.default;
    }
    if let Some(named) = locale.mask(mask) {
        return named;
    }
    GLOBAL_MASKS
        .iter()
        .find(|(name, _)| *name == mask)
        .map_or(mask, |&(_, text)| text)
}

/// Format an instant given its Hijri fields.
///
/// `mask` is resolved with [`resolve_mask`] and parsed through the mask
/// cache.
pub fn format(
    instant: NaiveDateTime,
    mask: &str,
    locale: &Locale,
    fields: &HijriFields,
) -> Result<String, FormatError> {
    let parsed = cache::get_or_parse(resolve_mask(mask, locale))?;
    Ok(format_mask(instant, &parsed, locale, fields))
}
