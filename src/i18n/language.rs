//! Language type: validated language representation.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
///
/// Only languages present and enabled in the registry can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Resolve the display language for a request.
    ///
    /// The `lang` query value wins when present and non-empty; otherwise the
    /// `language` cookie is consulted. Whatever value is picked must name an
    /// enabled language exactly, else the canonical language is returned.
    /// A non-empty but unknown query value does not fall through to the cookie.
    pub fn resolve(query: Option<&str>, cookie: Option<&str>) -> Language {
        let candidate = match query {
            Some(value) if !value.is_empty() => Some(value),
            _ => cookie,
        };

        candidate
            .and_then(|code| Language::from_code(code).ok())
            .unwrap_or_else(Language::canonical)
    }

    /// Get the canonical (default) language that content falls back to.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built through `from_code`, `resolve` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::ENGLISH.native_name(), "English");
        assert!(Language::ENGLISH.is_canonical());
    }

    #[test]
    fn test_french_constant() {
        assert_eq!(Language::FRENCH.code(), "fr");
        assert_eq!(Language::FRENCH.native_name(), "Français");
        assert!(!Language::FRENCH.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Language::from_code("en").ok(), Some(Language::ENGLISH));
        assert_eq!(Language::from_code("fr").ok(), Some(Language::FRENCH));
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("FR").is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_query_wins_over_cookie() {
        assert_eq!(Language::resolve(Some("fr"), Some("en")), Language::FRENCH);
        assert_eq!(Language::resolve(Some("en"), Some("fr")), Language::ENGLISH);
    }

    #[test]
    fn test_resolve_empty_query_uses_cookie() {
        assert_eq!(Language::resolve(Some(""), Some("fr")), Language::FRENCH);
        assert_eq!(Language::resolve(None, Some("fr")), Language::FRENCH);
    }

    #[test]
    fn test_resolve_unknown_query_does_not_consult_cookie() {
        assert_eq!(Language::resolve(Some("de"), Some("fr")), Language::ENGLISH);
    }

    #[test]
    fn test_resolve_nothing_defaults_to_english() {
        assert_eq!(Language::resolve(None, None), Language::ENGLISH);
        assert_eq!(Language::resolve(Some(""), Some("")), Language::ENGLISH);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(Language::resolve(Some("FR"), None), Language::ENGLISH);
        assert_eq!(Language::resolve(None, Some(" fr")), Language::ENGLISH);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::FRENCH.to_string(), "fr");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_unknown_values_resolve_to_english(value in "\\PC*") {
            prop_assume!(value != "en" && value != "fr");
            prop_assert_eq!(Language::resolve(Some(&value), None), Language::ENGLISH);
            prop_assert_eq!(Language::resolve(None, Some(&value)), Language::ENGLISH);
        }

        #[test]
        fn prop_resolve_never_leaves_supported_set(
            query in proptest::option::of("\\PC{0,4}"),
            cookie in proptest::option::of("\\PC{0,4}"),
        ) {
            let language = Language::resolve(query.as_deref(), cookie.as_deref());
            prop_assert!(language.code() == "en" || language.code() == "fr");
        }
    }
}
