use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::export::{DEFAULT_CONVERTER_BINARY, DEFAULT_SETTLE_DELAY};
use crate::llm_client::{ModelIds, DEFAULT_TIMEOUT};

/// Builder configuration.
///
/// Only the service credential and the log filter come from the environment.
/// Everything else has a default the embedding host may override in code.
#[derive(Debug, Clone)]
pub struct Config {
    /// `GEMINI_API_KEY`, falling back to `API_KEY`. Optional: without it the AI
    /// features are disabled but the builder still starts.
    pub gemini_api_key: Option<String>,
    pub rust_log: String,
    pub models: ModelIds,
    pub request_timeout: Duration,
    /// Fixed wait before capture when the host provides no ready signal.
    pub export_settle_delay: Duration,
    pub converter_binary: PathBuf,
    /// Where exported PDFs land. Set in code; never read from the environment.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            rust_log: "info".to_string(),
            models: ModelIds::default(),
            request_timeout: DEFAULT_TIMEOUT,
            export_settle_delay: DEFAULT_SETTLE_DELAY,
            converter_binary: PathBuf::from(DEFAULT_CONVERTER_BINARY),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ..Config::default()
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
