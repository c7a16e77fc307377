use anyhow::{Context, Result};

use crate::resume::keywords::DEFAULT_TOP_K;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unparseable numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Gateway prefix stripped from request paths before routing (e.g. "/pyapi").
    pub path_prefix: String,
    /// Upper bound on bytes sampled from an uploaded resume.
    pub max_upload_bytes: usize,
    pub keyword_top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            path_prefix: "/pyapi".to_string(),
            max_upload_bytes: 40_000,
            keyword_top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            path_prefix: std::env::var("PATH_PREFIX").unwrap_or(defaults.path_prefix),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            keyword_top_k: parse_env("KEYWORD_TOP_K", defaults.keyword_top_k)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
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
