//! API server configuration.
//!
//! Everything is environment-sourced and resolved once at process start;
//! the resulting objects are injected where needed — nothing reads the
//! environment after startup.

use std::time::Duration;

/// Top-level API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// PostgreSQL connection URL; in-memory sample catalog when absent.
    pub database_url: Option<String>,
    /// Extraction oracle settings.
    pub oracle: OracleConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("BX_HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("BX_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_port),
            database_url: std::env::var("DATABASE_URL").ok(),
            oracle: OracleConfig::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            oracle: OracleConfig::default(),
        }
    }
}

/// Configuration for the OpenAI extraction oracle.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// API key; extraction is disabled when absent (and no mock is set).
    pub api_key: Option<String>,
    /// Chat model ID.
    pub model: String,
    /// Completion token cap — the expected payload is a tiny JSON object.
    pub max_tokens: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// When set, a static oracle returns this JSON instead of calling out.
    pub mock_json: Option<String>,
}

impl OracleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        let max_tokens: u32 = std::env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(128);
        let timeout_secs: u64 = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
            mock_json: std::env::var("OPENAI_MOCK_JSON").ok(),
        }
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".into(),
            max_tokens: 128,
            timeout: Duration::from_secs(5),
            mock_json: None,
        }
    }
}
