use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 180;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Without a database URL analyses are kept in memory only.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Directory for temporary copies of uploaded PDFs.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub analysis_timeout: Duration,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY")
            .context("Required environment variable 'ANTHROPIC_API_KEY' is not set")?;

        Ok(Config {
            anthropic_api_key,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            analysis_timeout: Duration::from_secs(parse_or(
                &lookup,
                "ANALYSIS_TIMEOUT_SECS",
                DEFAULT_ANALYSIS_TIMEOUT_SECS,
            )?),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
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

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.database_url.is_none());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.analysis_timeout, Duration::from_secs(180));
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("ANTHROPIC_API_KEY", "k"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("ANTHROPIC_API_KEY", "k"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:5173, http://localhost:5174,",
            ),
        ])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "http://localhost:5174"]
        );
    }

    #[test]
    fn test_blank_database_url_means_memory_store() {
        let config =
            config_from(&[("ANTHROPIC_API_KEY", "k"), ("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }
}
