//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized singleton behind `OnceLock`. The set of
//! languages is closed: every `Language` value points at one of these entries.

use crate::i18n::strings::{ENGLISH_TREE, POLISH_TREE};
use crate::i18n::TranslationTree;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "pl", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Polish", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "Polski", "English")
    pub native_name: &'static str,

    /// Label the language toggle shows while this language is active.
    /// It names the language a click switches to.
    pub toggle_label: &'static str,

    /// Whether this is the default/fallback language (only one should be true)
    pub is_canonical: bool,

    /// Display strings for this language
    pub tree: &'static TranslationTree,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages, in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the default active language and the
    /// fallback for keys missing from any other tree.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Polish is the app's home language and the fallback; English is the alternate.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "pl",
            name: "Polish",
            native_name: "Polski",
            toggle_label: "EN",
            is_canonical: true,
            tree: &POLISH_TREE,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            toggle_label: "PL",
            is_canonical: false,
            tree: &ENGLISH_TREE,
        },
    ]
}
