//! Key resolution: lookup, fallback, placeholder substitution.
//!
//! Resolution never fails. A key missing from the active language falls back
//! to the canonical language, and a key missing from both comes back as-is.

use crate::i18n::metrics::{LookupMetrics, LookupOutcome};
use crate::i18n::{active_language, Language, TranslationTree};
use std::fmt;
use tracing::debug;

/// Placeholder values, applied in order. `("n", &5)` fills every `{n}`.
pub type Vars<'a> = &'a [(&'a str, &'a dyn fmt::Display)];

/// Resolve `key` against the active language.
///
/// Records the outcome in `LookupMetrics`.
///
/// # Example
/// ```ignore
/// let subtitle = resolve("review.subtitle", &[("n", &5)]);
/// ```
pub fn resolve(key: &str, vars: Vars<'_>) -> String {
    let active = TranslationTree::for_language(active_language());
    let fallback = TranslationTree::for_language(Language::canonical());
    resolve_recorded(active, fallback, key, vars)
}

/// Resolve `key` against an explicit language without touching global state.
pub fn resolve_in(language: Language, key: &str, vars: Vars<'_>) -> String {
    let (template, _) = find(language, key);
    substitute(template.unwrap_or(key), vars)
}

/// Resolve a key that takes no placeholders.
pub fn t(key: &str) -> String {
    resolve(key, &[])
}

fn resolve_recorded(
    active: &TranslationTree,
    fallback: &TranslationTree,
    key: &str,
    vars: Vars<'_>,
) -> String {
    let (template, outcome) = find_in(active, fallback, key);
    LookupMetrics::global().record(outcome);
    substitute(template.unwrap_or(key), vars)
}

fn find(language: Language, key: &str) -> (Option<&'static str>, LookupOutcome) {
    find_in(
        TranslationTree::for_language(language),
        TranslationTree::for_language(Language::canonical()),
        key,
    )
}

/// Two independent descents: the active tree, then the fallback one.
fn find_in(
    active: &TranslationTree,
    fallback: &TranslationTree,
    key: &str,
) -> (Option<&'static str>, LookupOutcome) {
    if let Some(text) = active.lookup(key) {
        return (Some(text), LookupOutcome::Active);
    }

    if let Some(text) = fallback.lookup(key) {
        debug!("Translation key '{}' not found in active language, using fallback", key);
        return (Some(text), LookupOutcome::Fallback);
    }

    debug!("Missing translation key: '{}'. Returning key as-is.", key);
    (None, LookupOutcome::Missing)
}

/// Literal replacement of every `{name}` token, one variable at a time.
fn substitute(template: &str, vars: Vars<'_>) -> String {
    vars.iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), &value.to_string())
        })
}

/// Resolve a key against the active language, with optional placeholders.
///
/// ```ignore
/// let label = t!("common.remove");
/// let heading = t!("result.title", title = "Unit 5");
/// let count = t!("set.questions", n = questions.len());
/// ```
#[macro_export]
macro_rules! t {
    ($key:expr $(,)?) => {
        $crate::i18n::resolve($key, &[])
    };
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $crate::i18n::resolve(
            $key,
            &[$((stringify!($name), &$value as &dyn ::std::fmt::Display)),+],
        )
    };
}
