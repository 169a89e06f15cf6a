//! Tree consistency validation.
//!
//! Every language tree is expected to expose the same leaf paths and use the
//! same placeholders per path. Nothing enforces this at lookup time, so the
//! check runs in tests.

use crate::i18n::{Language, LanguageRegistry, TranslationTree};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Shape mismatches: paths present in one tree but not the other
    pub errors: Vec<String>,

    /// Placeholder mismatches for a path present in both trees
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tree consistency.
pub struct TreeValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TreeValidator {
    /// Compare `candidate` against `reference`.
    ///
    /// # Returns
    /// A `ValidationReport` with an error per leaf path missing on either
    /// side and a warning per path whose placeholder names differ.
    pub fn validate(reference: &TranslationTree, candidate: &TranslationTree) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_paths: BTreeSet<String> = reference.leaf_paths().into_iter().collect();
        let candidate_paths: BTreeSet<String> = candidate.leaf_paths().into_iter().collect();

        for path in reference_paths.difference(&candidate_paths) {
            report.errors.push(format!("Missing key: {}", path));
        }
        for path in candidate_paths.difference(&reference_paths) {
            report.errors.push(format!("Unexpected key: {}", path));
        }

        for path in reference_paths.intersection(&candidate_paths) {
            let (Some(expected), Some(actual)) = (reference.lookup(path), candidate.lookup(path))
            else {
                continue;
            };
            let expected = Self::extract_placeholders(expected);
            let actual = Self::extract_placeholders(actual);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch at {}: expected {:?}, found {:?}",
                    path, expected, actual
                ));
            }
        }

        report
    }

    /// Validate every registered language against the canonical one.
    pub fn validate_all() -> Vec<(Language, ValidationReport)> {
        let canonical = TranslationTree::for_language(Language::canonical());

        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter(|config| !config.is_canonical)
            .filter_map(|config| Language::from_code(config.code).ok())
            .map(|language| {
                let report = Self::validate(canonical, TranslationTree::for_language(language));
                (language, report)
            })
            .collect()
    }

    /// Extract the set of `{name}` placeholders in a string
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{(\w+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
