use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use std::env::VarError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Language active at startup
    pub language: Language,

    /// Print lookup metrics as JSON after resolving
    pub report_metrics: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let language = match std::env::var("KWT_LANG") {
            Ok(code) => Language::from_code(code.trim()).context("Invalid KWT_LANG")?,
            Err(VarError::NotPresent) => Language::canonical(),
            Err(VarError::NotUnicode(raw)) => bail!("KWT_LANG is not valid UTF-8: {:?}", raw),
        };

        Ok(Self {
            language,
            report_metrics: std::env::var("KWT_REPORT_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("KWT_LANG");
        std::env::remove_var("KWT_REPORT_METRICS");

        let config = Config::from_env().expect("Defaults should load");
        assert_eq!(config.language, Language::POLISH);
        assert!(!config.report_metrics);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_values() {
        std::env::set_var("KWT_LANG", "en");
        std::env::set_var("KWT_REPORT_METRICS", "1");

        let config = Config::from_env().expect("Valid env should load");
        assert_eq!(config.language, Language::ENGLISH);
        assert!(config.report_metrics);

        std::env::remove_var("KWT_LANG");
        std::env::remove_var("KWT_REPORT_METRICS");
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_language() {
        std::env::set_var("KWT_LANG", "de");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("KWT_LANG"));

        std::env::remove_var("KWT_LANG");
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_from_env_rejects_non_utf8_language() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("KWT_LANG", OsStr::from_bytes(b"p\xFFl"));

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("UTF-8"));

        std::env::remove_var("KWT_LANG");
    }
}
