use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::embedding_client::EmbeddingConfig;
use crate::matching::analyzer::{AnalysisConfig, VerdictThresholds};

pub const DEFAULT_EMBEDDING_API_URL: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2";

/// Application configuration loaded from environment variables.
/// The embedding token is optional here; its absence surfaces per request as a config error.
#[derive(Debug, Clone)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub analysis: AnalysisConfig,
    pub min_text_length: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_token = std::env::var("HUGGINGFACE_API_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let embedding = EmbeddingConfig {
            api_url: std::env::var("EMBEDDING_API_URL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_API_URL.to_string()),
            api_token,
            timeout: Duration::from_secs(parse_env("EMBEDDING_TIMEOUT_SECS", 60)?),
        };

        let defaults = VerdictThresholds::default();
        let thresholds = VerdictThresholds {
            hire: parse_env("HIRE_THRESHOLD", defaults.hire)?,
            hold: parse_env("HOLD_THRESHOLD", defaults.hold)?,
        };
        if thresholds.hold > thresholds.hire {
            bail!(
                "HOLD_THRESHOLD ({}) must not exceed HIRE_THRESHOLD ({})",
                thresholds.hold,
                thresholds.hire
            );
        }

        Ok(Config {
            embedding,
            analysis: AnalysisConfig {
                thresholds,
                ..AnalysisConfig::default()
            },
            min_text_length: parse_env("MIN_TEXT_LENGTH", 50)?,
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
