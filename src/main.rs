//! Resolve a display string from the command line.
//!
//! Usage:
//!   kwt-i18n common.remove
//!   kwt-i18n --lang en review.subtitle n=5
//!   kwt-i18n --metrics result.title title="Unit 5"
//!
//! Optional environment variables:
//! - KWT_LANG (defaults to the canonical language, pl)
//! - KWT_REPORT_METRICS (defaults to false)
//! - RUST_LOG (e.g. kwt_i18n=debug to see fallbacks)

use anyhow::{bail, Context, Result};
use kwt_i18n::config::Config;
use kwt_i18n::i18n::{self, Language, LookupMetrics};
use std::fmt::Display;
use tracing::{debug, info};

#[derive(Debug)]
struct Args {
    language: Option<Language>,
    report_metrics: bool,
    key: String,
    vars: Vec<(String, String)>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut language = None;
    let mut report_metrics = false;
    let mut key = None;
    let mut vars = Vec::new();

    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--lang" => {
                let code = raw.next().context("--lang needs a language code")?;
                language = Some(Language::from_code(&code)?);
            }
            "--metrics" => report_metrics = true,
            _ if key.is_none() => key = Some(arg),
            _ => {
                let Some((name, value)) = arg.split_once('=') else {
                    bail!("Expected name=value, got '{}'", arg);
                };
                vars.push((name.to_string(), value.to_string()));
            }
        }
    }

    Ok(Args {
        language,
        report_metrics,
        key: key.context("Usage: kwt-i18n [--lang <code>] [--metrics] <key> [name=value ...]")?,
        vars,
    })
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kwt_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args = parse_args(std::env::args().skip(1))?;

    let language = args.language.unwrap_or(config.language);
    i18n::set_active_language(language);
    debug!("Resolving '{}' in {}", args.key, language.name());

    let vars: Vec<(&str, &dyn Display)> = args
        .vars
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn Display))
        .collect();

    println!("{}", i18n::resolve(&args.key, &vars));

    if args.report_metrics || config.report_metrics {
        let report = LookupMetrics::global().report();
        info!("Lookup metrics: {} lookups", report.lookups);
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_key_only() {
        let parsed = parse_args(args(&["common.remove"])).unwrap();
        assert_eq!(parsed.key, "common.remove");
        assert!(parsed.language.is_none());
        assert!(!parsed.report_metrics);
        assert!(parsed.vars.is_empty());
    }

    #[test]
    fn test_parse_flags_and_vars() {
        let parsed =
            parse_args(args(&["--lang", "en", "--metrics", "result.title", "title=Unit 5"]))
                .unwrap();

        assert_eq!(parsed.language, Some(Language::ENGLISH));
        assert!(parsed.report_metrics);
        assert_eq!(parsed.key, "result.title");
        assert_eq!(parsed.vars, vec![("title".to_string(), "Unit 5".to_string())]);
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let parsed = parse_args(args(&["k", "a=b=c"])).unwrap();
        assert_eq!(parsed.vars, vec![("a".to_string(), "b=c".to_string())]);
    }

    #[test]
    fn test_parse_missing_key() {
        assert!(parse_args(args(&["--metrics"])).is_err());
    }

    #[test]
    fn test_parse_bad_language() {
        assert!(parse_args(args(&["--lang", "xx", "common.remove"])).is_err());
        assert!(parse_args(args(&["--lang"])).is_err());
    }

    #[test]
    fn test_parse_var_without_equals() {
        let err = parse_args(args(&["common.remove", "oops"])).unwrap_err();
        assert!(err.to_string().contains("name=value"));
    }
}
