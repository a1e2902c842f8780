//! Locale registry: Single source of truth for all supported locales.
//!
//! The table is a static array indexed by `Locale`, so resolving a locale's
//! configuration can never fail at runtime.

use crate::i18n::strings::{LocaleStrings, ENGLISH_STRINGS, MARATHI_STRINGS};
use crate::i18n::Locale;

/// Configuration for a supported locale.
#[derive(Debug)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// ISO 639-1 language code (e.g., "en", "mr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Marathi")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "मराठी")
    pub native_name: &'static str,

    /// Whether this is the fallback locale (only one should be true)
    pub is_default: bool,

    pub strings: &'static LocaleStrings,
}

static LOCALES: [LocaleConfig; 2] = [
    LocaleConfig {
        locale: Locale::En,
        code: "en",
        name: "English",
        native_name: "English",
        is_default: true,
        strings: &ENGLISH_STRINGS,
    },
    LocaleConfig {
        locale: Locale::Mr,
        code: "mr",
        name: "Marathi",
        native_name: "मराठी",
        is_default: false,
        strings: &MARATHI_STRINGS,
    },
];

/// Read-only view over the locale table.
pub struct LocaleRegistry;

impl LocaleRegistry {
    /// All supported locales, in toggle order.
    pub fn all() -> &'static [LocaleConfig] {
        &LOCALES
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(code: &str) -> Option<&'static LocaleConfig> {
        LOCALES.iter().find(|config| config.code == code)
    }

    /// Get the configuration for a locale.
    pub fn config(locale: Locale) -> &'static LocaleConfig {
        &LOCALES[locale.index()]
    }

    /// The fallback locale's configuration: the entry flagged `is_default`,
    /// or the first entry if none is flagged.
    pub fn default_config() -> &'static LocaleConfig {
        LOCALES
            .iter()
            .find(|config| config.is_default)
            .unwrap_or(&LOCALES[0])
    }
}
