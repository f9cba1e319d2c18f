//! Static oracle for mock mode and tests.

use async_trait::async_trait;

use bx_query::ExtractionFields;

use super::ExtractionOracle;

/// Oracle that always answers with a fixed payload, parsed once at
/// construction. Backs the `OPENAI_MOCK_JSON` mode and pipeline tests.
#[derive(Debug, Clone)]
pub struct StaticOracle {
    fields: ExtractionFields,
}

impl StaticOracle {
    pub fn new(fields: ExtractionFields) -> Self {
        Self { fields }
    }

    /// Parse the payload from a JSON string; fails fast on bad config
    /// rather than silently missing at request time.
    pub fn from_json(payload: &str) -> anyhow::Result<Self> {
        let fields: ExtractionFields = serde_json::from_str(payload)
            .map_err(|e| anyhow::anyhow!("invalid mock oracle JSON: {e}"))?;
        Ok(Self { fields })
    }
}

#[async_trait]
impl ExtractionOracle for StaticOracle {
    async fn extract(&self, _text: &str) -> Option<ExtractionFields> {
        Some(self.fields.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_payload() {
        let oracle =
            StaticOracle::from_json(r#"{"kind":"vbelt","length_mm":"85","profile":"b"}"#).unwrap();
        let fields = oracle.extract("любой текст").await.unwrap();
        let parsed = fields.validate();
        assert_eq!(parsed.kind, bx_query::BeltKind::VBelt);
        assert_eq!(parsed.length_mm, Some(85.0));
        assert_eq!(parsed.profile.as_deref(), Some("B"));
    }

    #[test]
    fn bad_json_is_rejected_at_construction() {
        assert!(StaticOracle::from_json("{{{").is_err());
    }
}
