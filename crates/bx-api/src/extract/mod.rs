//! Extraction oracle — last-resort free-text-to-structured-query service.
//!
//! The oracle is external, untrusted, and possibly absent. It sits behind
//! a one-operation capability trait so the pipeline can be tested with a
//! deterministic stand-in, and its output is always re-validated by
//! [`bx_query::ExtractionFields::validate`] before use.

pub mod openai;
pub mod static_json;

use std::sync::Arc;

use async_trait::async_trait;
use bx_query::ExtractionFields;

use crate::config::OracleConfig;

pub use openai::OpenAiOracle;
pub use static_json::StaticOracle;

/// Capability interface for structured-parameter extraction.
#[async_trait]
pub trait ExtractionOracle: Send + Sync {
    /// Best-effort extraction from raw user text.
    /// Returns `None` on any failure — a missing oracle answer is a
    /// tier rejection, never a crash.
    async fn extract(&self, text: &str) -> Option<ExtractionFields>;

    /// Name of this oracle (for logging).
    fn name(&self) -> &str;
}

/// Oracle used when no extraction backend is configured: always misses.
pub struct DisabledOracle;

#[async_trait]
impl ExtractionOracle for DisabledOracle {
    async fn extract(&self, _text: &str) -> Option<ExtractionFields> {
        None
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Pick the oracle implementation for the given configuration.
///
/// Precedence: static mock (if `OPENAI_MOCK_JSON` is set), then the real
/// OpenAI adapter (if a key is present), then the disabled stub.
pub fn from_config(config: &OracleConfig) -> anyhow::Result<Arc<dyn ExtractionOracle>> {
    if let Some(mock) = &config.mock_json {
        tracing::info!("extraction oracle running in static mock mode");
        return Ok(Arc::new(StaticOracle::from_json(mock)?));
    }
    if config.api_key.is_some() {
        return Ok(Arc::new(OpenAiOracle::new(config.clone())?));
    }
    tracing::warn!("no OPENAI_API_KEY set — extraction fallback disabled");
    Ok(Arc::new(DisabledOracle))
}
