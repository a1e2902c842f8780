//! Locale type: the active display language of the kiosk.

use crate::i18n::{LocaleConfig, LocaleRegistry, LocaleStrings};
use anyhow::{bail, Result};

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Mr,
}

impl Default for Locale {
    /// The locale flagged `is_default` in the registry.
    fn default() -> Self {
        LocaleRegistry::default_config().locale
    }
}

impl Locale {
    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get_by_code(code) {
            Some(config) => Ok(config.locale),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Pick the initial locale from a reported language preference.
    ///
    /// The primary subtag of the preference ("mr" in "mr-IN" or
    /// "mr_IN.UTF-8") must equal a registered code exactly; anything else,
    /// including no preference at all, falls back to the default locale.
    pub fn from_preference(preference: Option<&str>) -> Locale {
        let primary = preference
            .and_then(|p| p.split(['-', '_', '.', '@']).next())
            .unwrap_or_default();

        match LocaleRegistry::get_by_code(primary) {
            Some(config) => config.locale,
            None => Locale::default(),
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Mr => 1,
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::config(*self)
    }

    /// Get the string table for this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        self.config().strings
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        assert_eq!(Locale::from_code("en").unwrap(), Locale::En);
    }

    #[test]
    fn test_from_code_marathi() {
        assert_eq!(Locale::from_code("mr").unwrap(), Locale::Mr);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    // ==================== from_preference Tests ====================

    #[test]
    fn test_preference_exact_marathi() {
        assert_eq!(Locale::from_preference(Some("mr")), Locale::Mr);
    }

    #[test]
    fn test_preference_marathi_with_region() {
        assert_eq!(Locale::from_preference(Some("mr-IN")), Locale::Mr);
        assert_eq!(Locale::from_preference(Some("mr_IN.UTF-8")), Locale::Mr);
    }

    #[test]
    fn test_preference_other_language_defaults_to_english() {
        assert_eq!(Locale::from_preference(Some("hi-IN")), Locale::En);
        assert_eq!(Locale::from_preference(Some("en-US")), Locale::En);
        assert_eq!(Locale::from_preference(Some("C.UTF-8")), Locale::En);
    }

    #[test]
    fn test_preference_is_case_sensitive() {
        assert_eq!(Locale::from_preference(Some("MR")), Locale::En);
    }

    #[test]
    fn test_preference_missing_or_empty() {
        assert_eq!(Locale::from_preference(None), Locale::En);
        assert_eq!(Locale::from_preference(Some("")), Locale::En);
    }

    #[test]
    fn test_unmatched_preference_uses_registry_default() {
        let fallback = LocaleRegistry::default_config().locale;
        assert_eq!(Locale::from_preference(Some("ta-IN")), fallback);
        assert_eq!(Locale::default(), fallback);
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_codes_and_names() {
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Mr.code(), "mr");
        assert_eq!(Locale::Mr.name(), "Marathi");
        assert_eq!(Locale::Mr.native_name(), "मराठी");
    }

    #[test]
    fn test_strings_follow_locale() {
        assert_eq!(Locale::En.strings().label_age, "Age");
        assert_eq!(Locale::Mr.strings().label_age, "वय");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Locale::Mr.to_string(), "mr");
    }
}
