//! Internationalization (i18n) for the worksheet app.
//!
//! Display strings live in static per-language trees and are looked up by
//! dot-separated keys. Polish is the default language and the fallback;
//! English is the alternate.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `Language` type
//! - `tree`: Nested translation trees and key descent
//! - `strings`: The Polish and English trees
//! - `state`: The process-wide active language
//! - `resolver`: Lookup with fallback and `{placeholder}` substitution
//! - `validator`: Cross-language tree consistency checks
//! - `metrics`: Lookup outcome counters
//!
//! # Example
//!
//! ```rust,ignore
//! use kwt_i18n::i18n::{set_active_language, Language};
//! use kwt_i18n::t;
//!
//! assert_eq!(t!("common.remove"), "Usuń");
//!
//! set_active_language(Language::ENGLISH);
//! assert_eq!(t!("set.questions", n = 5), "5 questions");
//! ```

mod language;
mod metrics;
mod registry;
mod resolver;
mod state;
mod strings;
mod tree;
mod validator;

pub use language::Language;
pub use metrics::{LookupMetrics, LookupOutcome, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{resolve, resolve_in, t, Vars};
pub use state::{active_language, set_active_language, subscribe_language, toggle_active_language};
pub use strings::{ENGLISH_TREE, POLISH_TREE};
pub use tree::{Node, TranslationTree};
pub use validator::{TreeValidator, ValidationReport};
