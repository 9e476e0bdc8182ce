//! Locale registration and lookup.
//!
//! A [`LocaleRegistry`] maps names to locales. A process-wide registry backs
//! the free functions, together with the default locale name used when a
//! caller does not pick one.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use super::Locale;
use crate::error::LocaleError;

/// The locale used when a lookup fails.
pub const FALLBACK_LOCALE: &str = "en";

/// A set of named locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: HashMap<&'static str, Locale>,
}

impl Default for LocaleRegistry {
    /// A registry holding the built-in `en` and `ar` locales.
    fn default() -> Self {
        let locales = [Locale::en(), Locale::ar()]
            .into_iter()
            .map(|locale| (locale.name, locale))
            .collect();
        LocaleRegistry { locales }
    }
}

impl LocaleRegistry {
    /// Adds a locale. Names must be non-empty and unique.
    pub fn register(&mut self, locale: Locale) -> Result<(), LocaleError> {
        if locale.name.is_empty() {
            return Err(LocaleError::EmptyName);
        }
        if self.locales.contains_key(locale.name) {
            return Err(LocaleError::AlreadyRegistered(locale.name.to_string()));
        }
        self.locales.insert(locale.name, locale);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Locale> {
        self.locales.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locales.contains_key(name)
    }

    /// Returns the named locale, or English with a warning if no locale of
    /// that name is registered.
    pub fn lookup(&self, name: &str) -> Locale {
        if let Some(locale) = self.get(name) {
            return locale.clone();
        }
        tracing::warn!(
            "locale '{}' is not registered, falling back to '{}'",
            name,
            FALLBACK_LOCALE
        );
        self.get(FALLBACK_LOCALE).cloned().unwrap_or_else(Locale::en)
    }

    /// Registered locale names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.locales.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

fn global() -> &'static RwLock<LocaleRegistry> {
    static REGISTRY: OnceLock<RwLock<LocaleRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(LocaleRegistry::default()))
}

static DEFAULT_LOCALE: RwLock<Option<&'static str>> = RwLock::new(None);

/// Registers a locale in the process-wide registry.
pub fn register_locale(locale: Locale) -> Result<(), LocaleError> {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(locale)
}

/// Looks up a locale in the process-wide registry, falling back to English.
pub fn lookup_locale(name: &str) -> Locale {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .lookup(name)
}

/// Sets the process-wide default locale. An unregistered name selects
/// English, as `lookup_locale` does. The last call wins.
pub fn set_default_locale(name: &str) {
    let resolved = lookup_locale(name).name;
    *DEFAULT_LOCALE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(resolved);
}

/// The process-wide default locale, English unless changed.
pub fn default_locale() -> Locale {
    let name = *DEFAULT_LOCALE.read().unwrap_or_else(PoisonError::into_inner);
    lookup_locale(name.unwrap_or(FALLBACK_LOCALE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &'static str) -> Locale {
        Locale {
            name,
            ..Locale::en()
        }
    }

    #[test]
    fn test_default_registry_has_builtins() {
        let registry = LocaleRegistry::default();
        assert_eq!(registry.names(), vec!["ar", "en"]);
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut registry = LocaleRegistry::default();
        assert_eq!(registry.register(custom("")), Err(LocaleError::EmptyName));
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let mut registry = LocaleRegistry::default();
        assert_eq!(
            registry.register(custom("en")),
            Err(LocaleError::AlreadyRegistered("en".to_string()))
        );
        assert!(registry.register(custom("en-GB")).is_ok());
        assert!(registry.contains("en-GB"));
    }

    #[test]
    fn test_lookup_falls_back_to_english() {
        let registry = LocaleRegistry::default();
        assert_eq!(registry.lookup("ar").name, "ar");
        assert_eq!(registry.lookup("xx").name, "en");
    }
}
