//! Language type: validated handle onto a registry entry.
//!
//! A `Language` can only be built from the registry, so holding one means the
//! tag is supported. Lookups key their translation tree off it.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "pl", "en")
    code: &'static str,
}

impl Language {
    /// Polish, the default and fallback language.
    pub const POLISH: Language = Language { code: "pl" };

    /// English, the alternate language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is not found
    ///
    /// # Example
    /// ```ignore
    /// let english = Language::from_code("en")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language: the initial active language and the
    /// tree every lookup falls back to.
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
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label for the language toggle while this language is active.
    pub fn toggle_label(&self) -> &'static str {
        self.config().toggle_label
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// The language a toggle switches to: the next language in registry
    /// order, wrapping around.
    pub fn toggled(&self) -> Language {
        let languages = LanguageRegistry::get().list_all();
        let position = languages
            .iter()
            .position(|lang| lang.code == self.code)
            .unwrap_or(0);
        let next = languages[(position + 1) % languages.len()];
        Language { code: next.code }
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

    // ==================== Constant Tests ====================

    #[test]
    fn test_polish_constant() {
        let polish = Language::POLISH;
        assert_eq!(polish.code(), "pl");
        assert_eq!(polish.name(), "Polish");
        assert!(polish.is_canonical());
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(!english.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_matches_constants() {
        assert_eq!(Language::from_code("pl").unwrap(), Language::POLISH);
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
    }

    #[test]
    fn test_from_code_accepts_every_registered_language() {
        for config in LanguageRegistry::get().list_all() {
            let language = Language::from_code(config.code).expect("Registered code");
            assert_eq!(language.code(), config.code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("PL").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== canonical / default Tests ====================

    #[test]
    fn test_canonical_returns_polish() {
        assert_eq!(Language::canonical(), Language::POLISH);
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Language::default(), Language::canonical());
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggled_swaps_languages() {
        assert_eq!(Language::POLISH.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled(), Language::POLISH);
    }

    #[test]
    fn test_toggle_label_names_the_other_language() {
        assert_eq!(Language::POLISH.toggle_label(), "EN");
        assert_eq!(Language::ENGLISH.toggle_label(), "PL");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_prints_code() {
        assert_eq!(Language::ENGLISH.to_string(), "en");
        assert_eq!(format!("{}", Language::POLISH), "pl");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::POLISH.native_name(), "Polski");
        assert_eq!(Language::ENGLISH.native_name(), "English");
    }
}
