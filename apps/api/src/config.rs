use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_template: String,
    pub default_accent: String,
    pub preview_viewport_px: u32,
    pub export_max_pages: usize,
    pub export_timeout: Duration,
    pub export_job_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_template: "classic".to_string(),
            default_accent: "blue".to_string(),
            preview_viewport_px: 816,
            export_max_pages: 12,
            export_timeout: Duration::from_secs(30),
            export_job_ttl: Duration::from_secs(900),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_template: lookup("DEFAULT_TEMPLATE").unwrap_or(defaults.default_template),
            default_accent: lookup("DEFAULT_ACCENT").unwrap_or(defaults.default_accent),
            preview_viewport_px: parse_or(
                &lookup,
                "PREVIEW_VIEWPORT_PX",
                defaults.preview_viewport_px,
            )?,
            export_max_pages: parse_or(&lookup, "EXPORT_MAX_PAGES", defaults.export_max_pages)?,
            export_timeout: Duration::from_secs(parse_or(
                &lookup,
                "EXPORT_TIMEOUT_SECS",
                defaults.export_timeout.as_secs(),
            )?),
            export_job_ttl: Duration::from_secs(parse_or(
                &lookup,
                "EXPORT_JOB_TTL_SECS",
                defaults.export_job_ttl.as_secs(),
            )?),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_template, "classic");
        assert_eq!(config.default_accent, "blue");
        assert_eq!(config.preview_viewport_px, 816);
        assert_eq!(config.export_max_pages, 12);
        assert_eq!(config.export_timeout, Duration::from_secs(30));
        assert_eq!(config.export_job_ttl, Duration::from_secs(900));
    }

    #[test]
    fn test_overrides_are_read() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("DEFAULT_TEMPLATE", "timeline"),
            ("EXPORT_MAX_PAGES", " 3 "),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_template, "timeline");
        assert_eq!(config.export_max_pages, 3);
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = config_from(&[("EXPORT_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("EXPORT_TIMEOUT_SECS"));
    }
}
