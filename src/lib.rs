//! Locale-keyed display strings for the Keyword Transformations worksheet app.

pub mod config;
pub mod i18n;
