use anyhow::{Context, Result};
use axum::http::HeaderValue;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Model used when `SUMMARIZER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub model_name: String,
    pub model_cache_dir: Option<PathBuf>,
    pub inference_url: String,
    pub inference_api_token: Option<String>,
    pub inference_timeout: Duration,
    pub generation_concurrency: usize,
    pub device_override: Option<String>,
    /// Empty means any origin is allowed (development posture)
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let generation_concurrency: usize = env::var("GENERATION_CONCURRENCY")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .context("GENERATION_CONCURRENCY must be a valid number")?;
        if generation_concurrency == 0 {
            anyhow::bail!("GENERATION_CONCURRENCY must be at least 1");
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            model_name: env::var("SUMMARIZER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            model_cache_dir: env::var("TRANSFORMERS_CACHE").ok().map(PathBuf::from),
            inference_url: env::var("INFERENCE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            inference_api_token: env::var("INFERENCE_API_TOKEN").ok(),
            inference_timeout: Duration::from_secs(
                env::var("INFERENCE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "180".to_string())
                    .parse()
                    .context("INFERENCE_TIMEOUT_SECS must be a valid number")?,
            ),
            generation_concurrency,
            device_override: env::var("SUMMARIZER_DEVICE").ok(),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default())
                .context("ALLOWED_ORIGINS must be a comma-separated list of origins")?,
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map(|_| origin.to_string())
                .with_context(|| format!("invalid origin {:?}", origin))
        })
        .collect()
}
