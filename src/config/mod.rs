//! Configuration module for the seating admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, without a trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("SEATING_API_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("SEATING_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let log_level = env::var("SEATING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            timeout_secs,
            log_level,
        }
    }
}
